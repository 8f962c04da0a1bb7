use crate::config::logging;
use crate::dto::auth_dto::{LoginDto, SessionRequestDto};
use crate::error::request_error::ValidatedRequest;
use crate::error::ApiError;
use crate::response::api_response::MessageBody;
use crate::service::session_service::SessionService;
use crate::state::auth_state::AuthState;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use tracing::info;

pub async fn login(
    State(state): State<AuthState>,
    ValidatedRequest(payload): ValidatedRequest<LoginDto>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Intento de login para: {}", payload.email);
    let respuesta = state.auth_service.login(payload).await?;
    Ok(Json(respuesta))
}

/// Puente de sesión: guarda el token ya emitido en una cookie HttpOnly
/// para las peticiones posteriores del navegador. No crea estado en el
/// servidor.
pub async fn session(
    State(state): State<AuthState>,
    ValidatedRequest(payload): ValidatedRequest<SessionRequestDto>,
) -> Result<impl IntoResponse, ApiError> {
    let cookie = SessionService::create_session_cookie(
        &payload.token,
        state.token_ttl_seconds,
        logging::get_config().secure_cookies(),
    );

    Ok((
        [(header::SET_COOKIE, cookie)],
        MessageBody::send("Sesión iniciada correctamente."),
    ))
}

/// El logout solo sobreescribe la cookie del cliente; un token robado
/// sigue siendo válido hasta su expiración natural.
pub async fn logout() -> impl IntoResponse {
    let cookie = SessionService::destroy_session_cookie(logging::get_config().secure_cookies());

    ([(header::SET_COOKIE, cookie)], MessageBody::send("Sesión cerrada"))
}
