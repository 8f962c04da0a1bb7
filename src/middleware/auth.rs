use crate::error::auth_error::AuthError;
use crate::error::token_error::TokenError;
use crate::error::ApiError;
use crate::repository::usuario_repository::UsuarioRepositoryTrait;
use crate::service::session_service::SessionService;
use crate::service::token_service::TokenServiceTrait;
use crate::state::token_state::TokenState;
use axum::body::Body;
use axum::extract::State;
use axum::{http, http::Request, middleware::Next, response::IntoResponse};
use tracing::{info, warn};

/// Identity attached to every authenticated request
#[derive(Clone, Debug)]
pub struct AuthContext {
    pub id: i32,
    pub email: String,
    pub rol: Option<String>,
    pub permisos: serde_json::Value,
}

/// Pipeline estricto por petición: extraer, verificar, cargar, adjuntar.
/// Cualquier fallo corta con 401; ningún paso se omite ni reordena.
pub async fn auth(
    State(state): State<TokenState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let token = extract_token(&req).ok_or_else(|| {
        warn!("Petición sin token de acceso: {}", req.uri().path());
        TokenError::MissingToken
    })?;

    let claims = state.token_service.verify(&token)?;

    let usuario = state
        .usuario_repo
        .find_con_rol(claims.sub)
        .await?
        .filter(|usuario| usuario.activo)
        .ok_or_else(|| {
            warn!("Token válido para un usuario inexistente o inactivo: {}", claims.sub);
            AuthError::InvalidOrInactiveUser
        })?;

    info!("Petición autenticada para el usuario: {}", usuario.id);

    req.extensions_mut().insert(AuthContext {
        id: usuario.id,
        email: usuario.email,
        rol: usuario.rol_nombre,
        permisos: usuario.permisos.unwrap_or_else(|| serde_json::json!({})),
    });

    Ok(next.run(req).await)
}

/// Bearer token del header Authorization, con la cookie de sesión como
/// alternativa para las peticiones del navegador.
fn extract_token(req: &Request<Body>) -> Option<String> {
    let bearer = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty());

    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    req.headers()
        .get(http::header::COOKIE)
        .and_then(|header| header.to_str().ok())
        .and_then(SessionService::token_from_cookie_header)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(headers: &[(&str, &str)]) -> Request<Body> {
        let mut builder = Request::builder().uri("/api/atletas");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_extract_bearer_token() {
        let req = request(&[("authorization", "Bearer abc.def.ghi")]);
        assert_eq!(extract_token(&req).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_empty_bearer_falls_back_to_cookie() {
        let req = request(&[("authorization", "Bearer "), ("cookie", "token=desde-cookie")]);
        assert_eq!(extract_token(&req).as_deref(), Some("desde-cookie"));
    }

    #[test]
    fn test_cookie_token() {
        let req = request(&[("cookie", "otra=x; token=abc.def.ghi")]);
        assert_eq!(extract_token(&req).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_no_token() {
        let req = request(&[]);
        assert_eq!(extract_token(&req), None);
    }
}
