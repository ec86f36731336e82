use serde::Deserialize;

use crate::error::AppError;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/audio/transcriptions";
const GROQ_WHISPER_MODEL: &str = "whisper-large-v3-turbo";
const GROQ_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    #[serde(default)]
    text: String,
}

/// Thin client for the Groq Whisper transcription endpoint.
pub struct GroqClient {
    http: reqwest::Client,
    api_key: String,
}

impl GroqClient {
    /// `None` when GROQ_API_KEY is absent or blank.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())?;

        Some(GroqClient {
            http: reqwest::Client::new(),
            api_key,
        })
    }

    /// Forward an uploaded audio file and return the trimmed transcript.
    pub async fn transcribe(
        &self,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(&content_type)
            .map_err(|err| AppError::Internal(format!("invalid audio content type: {err}")))?;

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", GROQ_WHISPER_MODEL)
            .text("language", "en");

        let response = self
            .http
            .post(GROQ_API_URL)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .timeout(std::time::Duration::from_secs(GROQ_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    AppError::UpstreamTimeout
                } else {
                    AppError::Upstream {
                        message: format!("request failed: {err}"),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream {
                message: format!("Groq API error ({status}): {body}"),
            });
        }

        let transcription = response
            .json::<TranscriptionResponse>()
            .await
            .map_err(|err| AppError::Upstream {
                message: format!("invalid response body: {err}"),
            })?;

        Ok(transcription.text.trim().to_string())
    }
}
