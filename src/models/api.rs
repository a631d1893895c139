//! Request and response models for the API endpoints.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response model for the version information endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VersionResponse {
    pub version: String,
    pub commit: String,
    pub build_time: String,
}

/// Request body for the advice endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct AdviceRequest {
    /// Free-text question for the guide (e.g., "What should I do in Lisbon when it rains?")
    pub query: String,
}

/// Response model for the advice endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct AdviceResponse {
    /// Generated advice as a simple HTML fragment
    pub advice: String,
}

/// Request query parameters for the weather endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct WeatherQuery {
    /// City name (e.g., "Lisbon")
    pub city: Option<String>,
}

/// Response model for the weather endpoint, merging both upstream payloads.
///
/// The payloads are passed through from the weather API unmodified; only the
/// forecast response is narrowed to its `daily` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherBundle {
    /// Current conditions payload
    pub current: Value,
    /// The forecast payload's `daily` field
    pub daily: Value,
}

/// Uniform failure body returned by every endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
