use crate::handler::rol_handler;
use crate::middleware::authorization;
use crate::service::access_control::Operation;
use crate::state::usuario_state::UsuarioState;
use axum::routing::{get, post, put};
use axum::{middleware, Router};

pub fn routes() -> Router<UsuarioState> {
    let escritura = Router::<UsuarioState>::new()
        .route("/roles", post(rol_handler::create))
        .route("/roles/{id}", put(rol_handler::update).delete(rol_handler::delete))
        .route_layer(middleware::from_fn(|req, next| {
            authorization::require(Operation::ManageRoles, req, next)
        }));

    // El listado queda abierto a cualquier usuario autenticado
    Router::<UsuarioState>::new()
        .route("/roles", get(rol_handler::get_all))
        .merge(escritura)
}
