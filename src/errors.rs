// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure a lookup stage or an endpoint can produce.
/// Upstream variants are normally absorbed by the trip service; only the
/// validation variants reach a client.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TripError {
    #[error("Upstream request failed: {0}")]
    Transport(String),

    #[error("Upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("Failed to parse upstream response: {0}")]
    Parse(String),

    #[error("No match found for place: {0}")]
    NoMatch(String),

    #[error("Geocoding result has no coordinates")]
    MissingCoordinates,

    #[error("invalid numbers")]
    InvalidNumbers,

    #[error("days must be positive")]
    NonPositiveDays,
}

impl TripError {
    /// Whether the landmark stage may keep an already resolved location
    /// after failing with this error
    pub fn keeps_location(&self) -> bool {
        matches!(self, TripError::Transport(_) | TripError::UpstreamStatus(_))
    }
}

impl From<reqwest::Error> for TripError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            TripError::Parse(e.to_string())
        } else {
            TripError::Transport(e.to_string())
        }
    }
}

/// Convert TripError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and a flat
/// `{"error": message}` body
impl ResponseError for TripError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string()
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            TripError::InvalidNumbers | TripError::NonPositiveDays => StatusCode::BAD_REQUEST,
            TripError::NoMatch(_) => StatusCode::NOT_FOUND,
            TripError::Transport(_)
            | TripError::UpstreamStatus(_)
            | TripError::Parse(_)
            | TripError::MissingCoordinates => StatusCode::BAD_GATEWAY,
        }
    }
}
