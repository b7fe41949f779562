use super::types::{ErrorResponse, EvaluateRequest, GenerateRequest, HealthResponse};
use crate::normalize::{self, EndpointKind};
use crate::vlm::{self, GenerationParams, VlmClient};
use crate::{Error, Result, imaging};
use axum::{body::Bytes, extract::State, http::StatusCode, response::Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::error;

/// Process-wide immutable state, built once at startup and cloned into each
/// request. Readers never synchronize because nothing here mutates.
#[derive(Clone)]
pub struct AppState {
    pub vlm: Arc<dyn VlmClient>,
    pub model_loaded: bool,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model_loaded: state.model_loaded,
    })
}

pub async fn generate_problem(
    State(state): State<AppState>,
    body: Bytes,
) -> std::result::Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    run_generate(&state, &body).await.map(Json).map_err(|e| {
        error!("Error in generate_problem: {}", e);
        (
            e.status_code(),
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })
}

pub async fn evaluate_answer(
    State(state): State<AppState>,
    body: Bytes,
) -> std::result::Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    run_evaluate(&state, &body).await.map(Json).map_err(|e| {
        error!("Error in evaluate_answer: {}", e);
        (
            e.status_code(),
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })
}

// The body is parsed here rather than by the `Json` extractor so a malformed
// body surfaces as the uniform 500 error envelope, like every other failure.
fn parse_body<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|e| Error::validation(format!("invalid request body: {}", e)))
}

async fn run_generate(state: &AppState, body: &[u8]) -> Result<Value> {
    let request: GenerateRequest = parse_body(body)?;

    let image_base64 = request
        .image
        .ok_or_else(|| Error::validation("missing required field `image`"))?;
    let prompt = request
        .prompt
        .ok_or_else(|| Error::validation("missing required field `prompt`"))?;
    if prompt.is_empty() {
        return Err(Error::validation("`prompt` must be non-empty"));
    }

    let image = imaging::decode_base64_image(&image_base64)?;

    let raw = state
        .vlm
        .generate(&prompt, Some(&image), GenerationParams::GENERATION)
        .await?;

    let stripped = vlm::strip_prompt_echo(&prompt, &raw);
    Ok(normalize::normalize(EndpointKind::Generate, &stripped))
}

async fn run_evaluate(state: &AppState, body: &[u8]) -> Result<Value> {
    let request: EvaluateRequest = parse_body(body)?;

    let prompt = request
        .prompt
        .ok_or_else(|| Error::validation("missing required field `prompt`"))?;

    // The image is optional here; decode only when present.
    let image = match &request.image {
        Some(payload) => Some(imaging::decode_base64_image(payload)?),
        None => None,
    };

    let raw = state
        .vlm
        .generate(&prompt, image.as_ref(), GenerationParams::EVALUATION)
        .await?;

    let stripped = vlm::strip_prompt_echo(&prompt, &raw);
    Ok(normalize::normalize(EndpointKind::Evaluate, &stripped))
}
