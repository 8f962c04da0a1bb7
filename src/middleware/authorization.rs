use crate::error::auth_error::AuthError;
use crate::error::token_error::TokenError;
use crate::error::ApiError;
use crate::middleware::auth::AuthContext;
use crate::service::access_control::{self, Operation};
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

/// Route layer: rechaza con 403 cuando el rol del contexto no tiene la
/// capacidad pedida. Corre después del middleware de autenticación.
pub async fn require(
    operation: Operation,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let contexto = req
        .extensions()
        .get::<AuthContext>()
        .ok_or(TokenError::MissingToken)?;

    if !access_control::can(contexto.rol.as_deref(), operation) {
        warn!(
            "Acceso denegado: usuario {} sin la capacidad {:?}",
            contexto.id, operation
        );
        return Err(AuthError::Forbidden.into());
    }

    Ok(next.run(req).await)
}
