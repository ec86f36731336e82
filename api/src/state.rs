use std::path::PathBuf;
use std::sync::Arc;

use whistle_core::Interpreter;

use crate::groq::GroqClient;

const DEFAULT_TRAINING_LOG: &str = "training_data.jsonl";

#[derive(Clone)]
pub struct AppState {
    pub interpreter: Interpreter,
    /// Successful parses are appended here for dataset collection.
    pub training_log: PathBuf,
    /// `None` when GROQ_API_KEY is not configured; /v1/transcribe returns 503.
    pub transcriber: Option<Arc<GroqClient>>,
}

impl AppState {
    pub fn from_env() -> Self {
        let training_log = std::env::var("WHISTLE_TRAINING_LOG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_TRAINING_LOG));

        let transcriber = GroqClient::from_env().map(Arc::new);
        if transcriber.is_none() {
            tracing::warn!("GROQ_API_KEY not set; /v1/transcribe will return 503");
        }

        AppState {
            interpreter: Interpreter::new(),
            training_log,
            transcriber,
        }
    }
}
