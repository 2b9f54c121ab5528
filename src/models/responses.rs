use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::ValidationErrors;

/// Error response envelope
///
/// `messages` carries per-attribute validation messages and is empty for
/// non-validation failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub messages: HashMap<String, String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            messages: HashMap::new(),
        }
    }

    /// Build an "invalid attributes" response from validator output,
    /// keyed by the JSON attribute name.
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let messages = errors
            .field_errors()
            .iter()
            .filter_map(|(field, errs)| {
                errs.first().map(|e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    (field.to_string(), message)
                })
            })
            .collect();

        Self {
            error: "invalid attributes".to_string(),
            messages,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
