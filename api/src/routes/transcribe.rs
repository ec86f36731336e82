use axum::extract::{Multipart, State};
use axum::{Json, Router, routing::post};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/transcribe", post(transcribe_audio))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TranscribeResponse {
    /// Trimmed transcript of the uploaded audio.
    pub text: String,
}

/// Transcribe an uploaded audio file via the Groq Whisper API
/// (whisper-large-v3-turbo). Expects a multipart body with a `file` part.
#[utoipa::path(
    post,
    path = "/v1/transcribe",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Transcript", body = TranscribeResponse),
        (status = 400, description = "Missing audio file", body = crate::error::ApiError),
        (status = 502, description = "Upstream transcription error", body = crate::error::ApiError),
        (status = 503, description = "Transcription not configured", body = crate::error::ApiError),
        (status = 504, description = "Upstream timeout", body = crate::error::ApiError)
    ),
    tag = "transcribe"
)]
pub async fn transcribe_audio(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<TranscribeResponse>, AppError> {
    let transcriber = state
        .transcriber
        .as_ref()
        .ok_or(AppError::TranscriberUnavailable)?;

    let mut audio: Option<(String, String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::Validation {
            message: format!("invalid multipart body: {err}"),
            field: None,
        })?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("audio").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("audio/wav")
            .to_string();
        let bytes = field.bytes().await.map_err(|err| AppError::Validation {
            message: format!("failed to read audio upload: {err}"),
            field: Some("file".to_string()),
        })?;
        audio = Some((file_name, content_type, bytes.to_vec()));
        break;
    }

    let (file_name, content_type, bytes) = audio.ok_or_else(|| AppError::Validation {
        message: "multipart body must contain a 'file' part".to_string(),
        field: Some("file".to_string()),
    })?;

    if bytes.is_empty() {
        return Err(AppError::Validation {
            message: "uploaded audio file is empty".to_string(),
            field: Some("file".to_string()),
        });
    }

    tracing::debug!(file = %file_name, bytes = bytes.len(), "Forwarding audio for transcription");

    let text = transcriber
        .transcribe(file_name, content_type, bytes)
        .await?;

    Ok(Json(TranscribeResponse { text }))
}
