//! HTTP-level error type

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

/// Application-level error for API handlers
#[derive(Debug)]
pub enum ApiError {
    /// Malformed contact submission; the message is user-facing
    Validation(String),
    /// Email relay failure; surfaced with a generic user-facing message
    Relay,
    /// Anything unexpected
    Internal(String),
}

/// The failure envelope every endpoint shares
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "{msg}"),
            Self::Relay => write!(f, "Failed to send message. Please try again later."),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Relay | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = ErrorResponse {
            success: false,
            error: match self {
                Self::Internal(_) => "Failed to fetch GitHub repositories".to_string(),
                _ => self.to_string(),
            },
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let error = ApiError::Validation("Name, email, subject, and message are required".into());
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_relay_maps_to_500() {
        assert_eq!(
            ApiError::Relay.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Relay.to_string(),
            "Failed to send message. Please try again later."
        );
    }
}
