//! API response envelope
//!
//! Every endpoint wraps its payload in the same envelope: successes carry
//! `{statusCode, data, message, success: true}`, failures carry
//! `{statusCode, message, success: false, errors: []}`.

use serde::{Deserialize, Serialize};

/// Standard success envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// HTTP status code echoed in the body
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    /// Response payload
    pub data: T,

    /// Human-readable message
    pub message: String,

    /// Always true for this envelope
    pub success: bool,
}

impl<T> ApiResponse<T> {
    /// Create a success envelope
    pub fn new(status_code: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code,
            data,
            message: message.into(),
            success: true,
        }
    }

    /// Create a 200 OK envelope
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::new(200, data, message)
    }

    /// Create a 201 Created envelope
    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::new(201, data, message)
    }
}

/// Standard error envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// HTTP status code echoed in the body
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Always false for this envelope
    pub success: bool,

    /// Field-level error details, empty when not applicable
    pub errors: Vec<String>,
}

impl ApiErrorBody {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            success: false,
            errors: Vec::new(),
        }
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_shape() {
        let response = ApiResponse::ok(serde_json::json!({"id": 1}), "found");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "found");
        assert_eq!(json["data"]["id"], 1);
    }

    #[test]
    fn error_envelope_shape() {
        let body = ApiErrorBody::new(404, "Booking not found");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["success"], false);
        assert_eq!(json["errors"].as_array().unwrap().len(), 0);
    }
}
