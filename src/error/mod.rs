pub(crate) mod auth_error;
pub(crate) mod db_error;
pub(crate) mod request_error;
pub(crate) mod token_error;

use crate::response::api_response::ErrorBody;
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Unified application error type
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Token(#[from] token_error::TokenError),
    #[error(transparent)]
    Auth(#[from] auth_error::AuthError),
    #[error(transparent)]
    Request(#[from] request_error::RequestError),
    #[error(transparent)]
    Db(#[from] db_error::DbError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Db(db_error::DbError::Sqlx(e))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Token(e) => e.into_response(),
            ApiError::Auth(e) => e.into_response(),
            ApiError::Request(e) => e.into_response(),
            ApiError::NotFound(message) => ErrorBody::send(message)
                .with_status(StatusCode::NOT_FOUND)
                .into_response(),
            ApiError::Conflict(message) => ErrorBody::send(message)
                .with_status(StatusCode::CONFLICT)
                .into_response(),
            ApiError::BadRequest(message) => ErrorBody::send(message)
                .with_status(StatusCode::BAD_REQUEST)
                .into_response(),
            ApiError::Db(_) | ApiError::Internal(_) => {
                // The real cause only leaves the process in development
                let message = if crate::config::logging::get_config().allow_detailed_errors() {
                    self.to_string()
                } else {
                    "Ocurrió un error inesperado.".to_string()
                };
                ErrorBody::send(message)
                    .with_status(StatusCode::INTERNAL_SERVER_ERROR)
                    .into_response()
            }
        }
    }
}
