use crate::response::api_response::ErrorBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token de acceso requerido")]
    MissingToken,
    #[error("Token inválido o expirado")]
    InvalidOrExpired,
    #[error("JWT_SECRET no está definido")]
    MissingSecret,
    #[error("No se pudo generar el token: {0}")]
    CreationError(String),
}

impl IntoResponse for TokenError {
    fn into_response(self) -> Response {
        let status_code = match self {
            TokenError::MissingToken => StatusCode::UNAUTHORIZED,
            TokenError::InvalidOrExpired => StatusCode::UNAUTHORIZED,
            TokenError::MissingSecret => StatusCode::INTERNAL_SERVER_ERROR,
            TokenError::CreationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        ErrorBody::send(self.to_string()).with_status(status_code).into_response()
    }
}
