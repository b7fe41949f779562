use serde::{Deserialize, Serialize};

/// Body for `POST /api/vlm`. Both fields are required by the endpoint, but
/// presence is checked in the handler so a missing key, like a malformed
/// body, surfaces as the uniform error envelope rather than an extractor
/// rejection.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Body for `POST /api/vlm/evaluate`. The image is optional.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
