use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Body `{"message": ...}` used by operations that confirm an action
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MessageBody {
    pub message: String,
    #[serde(skip)]
    status_code: StatusCode,
}

impl MessageBody {
    /// Create a message response with default 200 OK status
    pub fn send(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::OK,
        }
    }

    /// Set custom status code (builder pattern)
    pub fn with_status(mut self, status_code: StatusCode) -> Self {
        self.status_code = status_code;
        self
    }
}

impl IntoResponse for MessageBody {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}

/// Body `{"error": ...}` used by every failure path
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip)]
    status_code: StatusCode,
}

impl ErrorBody {
    pub fn send(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status_code: StatusCode::BAD_REQUEST,
        }
    }

    pub fn with_status(mut self, status_code: StatusCode) -> Self {
        self.status_code = status_code;
        self
    }
}

impl IntoResponse for ErrorBody {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_serializes_to_error_field() {
        let body = ErrorBody::send("Demasiadas peticiones.");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Demasiadas peticiones." }));
    }

    #[test]
    fn test_message_body_default_status() {
        let body = MessageBody::send("Sesión cerrada");
        assert_eq!(body.message, "Sesión cerrada");
    }
}
