use crate::response::api_response::ErrorBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Uniform outward message for every credential failure: unknown
    /// email, wrong password and inactive account are indistinguishable
    /// to the caller. The actual cause is logged server-side.
    #[error("Credenciales inválidas")]
    InvalidCredentials,
    #[error("Usuario no válido o inactivo")]
    InvalidOrInactiveUser,
    #[error("No tiene permisos para realizar esta acción.")]
    Forbidden,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status_code = match self {
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::InvalidOrInactiveUser => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
        };

        ErrorBody::send(self.to_string()).with_status(status_code).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credenciales_invalidas_es_401_uniforme() {
        // Email inexistente y contraseña incorrecta comparten la misma
        // variante, así que el mensaje y el status son idénticos
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Credenciales inválidas");
        assert_eq!(
            AuthError::InvalidCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_forbidden_es_403() {
        assert_eq!(AuthError::Forbidden.into_response().status(), StatusCode::FORBIDDEN);
    }
}
