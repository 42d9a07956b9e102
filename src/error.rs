//! Error types and handling for the `YatraFare` application

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Main error type for the `YatraFare` application
#[derive(Error, Debug)]
pub enum FareError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors; the message is shown to the traveler
    #[error("Invalid input: {message}")]
    Validation { message: String },
}

impl FareError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            FareError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            FareError::Validation { message } => message.clone(),
        }
    }
}

impl IntoResponse for FareError {
    fn into_response(self) -> Response {
        let status = match self {
            FareError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            FareError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.user_message(),
        }));

        (status, body).into_response()
    }
}
