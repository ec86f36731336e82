use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::Deserialize;
use utoipa::ToSchema;
use whistle_core::ParseResult;

use crate::error::AppError;
use crate::state::AppState;
use crate::training_log;

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/parse", post(parse_instruction))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ParseRequest {
    /// Free-form coaching instruction, usually a voice transcript.
    pub text: String,
}

/// Convert a free-form coaching instruction into structured workout
/// assignments. Successful parses are logged for dataset collection;
/// logging never delays or fails the response.
#[utoipa::path(
    post,
    path = "/v1/parse",
    request_body = ParseRequest,
    responses(
        (status = 200, description = "Interpretation result", body = ParseResult),
        (status = 400, description = "Invalid request", body = crate::error::ApiError)
    ),
    tag = "parse"
)]
pub async fn parse_instruction(
    State(state): State<AppState>,
    Json(request): Json<ParseRequest>,
) -> Result<Json<ParseResult>, AppError> {
    let result = state.interpreter.interpret(&request.text);

    tracing::debug!(
        success = result.is_success(),
        assignments = result.assignments().len(),
        "Parsed instruction"
    );

    if result.is_success() {
        let log_path = state.training_log.clone();
        let logged = result.clone();
        tokio::spawn(async move {
            training_log::append(&log_path, &logged).await;
        });
    }

    Ok(Json(result))
}
