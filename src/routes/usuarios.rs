use crate::handler::usuario_handler;
use crate::middleware::authorization;
use crate::service::access_control::Operation;
use crate::state::usuario_state::UsuarioState;
use axum::routing::{get, put};
use axum::{middleware, Router};

/// La administración de usuarios expone cuentas de otros operadores, así
/// que también las lecturas requieren la capacidad.
pub fn routes() -> Router<UsuarioState> {
    Router::<UsuarioState>::new()
        .route("/usuarios", get(usuario_handler::get_all).post(usuario_handler::create))
        .route("/usuarios/{id}", put(usuario_handler::update).delete(usuario_handler::delete))
        .route_layer(middleware::from_fn(|req, next| {
            authorization::require(Operation::ManageUsers, req, next)
        }))
}
