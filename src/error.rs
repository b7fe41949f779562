use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Startup error: {0}")]
    Startup(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] axum::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn startup(msg: impl Into<String>) -> Self {
        Self::Startup(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    /// The HTTP status a handler-level failure is surfaced with. The API
    /// does not distinguish client-input errors from backend errors: every
    /// kind maps to 500 with a `{"error": ..}` body.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_kinds_map_to_500() {
        let errors = [
            Error::validation("missing field"),
            Error::inference("model crashed"),
            Error::config("bad yaml"),
            Error::startup("runtime unreachable"),
        ];

        for error in errors {
            assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_display_includes_kind_and_message() {
        let error = Error::validation("missing required field `image`");
        assert_eq!(
            error.to_string(),
            "Validation error: missing required field `image`"
        );

        let error = Error::inference("generation failed");
        assert_eq!(error.to_string(), "Inference error: generation failed");
    }

    #[test]
    fn test_base64_error_conversion() {
        use base64::Engine as _;

        let result = base64::engine::general_purpose::STANDARD.decode("not base64!!!");
        let error: Error = result.unwrap_err().into();
        assert!(matches!(error, Error::Base64(_)));
    }
}
