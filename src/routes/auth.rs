use crate::handler::auth_handler;
use crate::state::auth_state::AuthState;
use axum::{routing::post, Router};

/// Rutas públicas: no pasan por el middleware de autenticación
pub fn routes() -> Router<AuthState> {
    Router::<AuthState>::new()
        .route("/auth/login", post(auth_handler::login))
        .route("/auth/session", post(auth_handler::session))
        .route("/auth/logout", post(auth_handler::logout))
}
