use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GitHub API error: {0}")]
    Gateway(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get a sanitized error message safe for logging
    /// Filters out potentially sensitive information
    pub fn log_safe(&self) -> String {
        match self {
            // HTTP errors might contain request URLs or authentication info
            Error::Http(_) => "External HTTP request failed".to_string(),

            Error::Internal(msg) | Error::Gateway(msg) | Error::Config(msg) => {
                let lowered = msg.to_lowercase();
                if lowered.contains("token")
                    || lowered.contains("secret")
                    || lowered.contains("authorization")
                    || lowered.contains("bearer")
                {
                    format!("{} (details redacted)", self.category())
                } else {
                    self.to_string()
                }
            }

            Error::Json(_) => "Malformed JSON payload".to_string(),
            Error::Decode(msg) => format!("Decode error: {msg}"),
            Error::NotFound(msg) => format!("Not found: {msg}"),
            Error::Validation(msg) => format!("Validation error: {msg}"),
        }
    }

    fn category(&self) -> &'static str {
        match self {
            Error::Http(_) => "HTTP request failed",
            Error::Json(_) => "JSON error",
            Error::Gateway(_) => "GitHub API error",
            Error::Decode(_) => "Decode error",
            Error::Config(_) => "Configuration error",
            Error::NotFound(_) => "Not found",
            Error::Validation(_) => "Validation error",
            Error::Internal(_) => "Internal error",
        }
    }

    /// HTTP status used when the error surfaces through the tool server
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Http(_) | Error::Gateway(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to tool callers; upstream and internal details stay in the logs
    pub fn public_message(&self) -> String {
        match self {
            Error::Validation(msg) | Error::NotFound(msg) | Error::Decode(msg) => msg.clone(),
            Error::Http(_) | Error::Gateway(_) => "GitHub API request failed".to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("Request error: {}", self.log_safe());

        let status = self.status_code();
        let body = Json(json!({
            "error": self.public_message(),
        }));

        (status, body).into_response()
    }
}
