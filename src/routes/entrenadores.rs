use crate::handler::entrenador_handler;
use crate::middleware::authorization;
use crate::service::access_control::Operation;
use crate::state::federacion_state::FederacionState;
use axum::routing::{get, post, put};
use axum::{middleware, Router};

pub fn routes() -> Router<FederacionState> {
    let escritura = Router::<FederacionState>::new()
        .route("/entrenadores", post(entrenador_handler::create))
        .route(
            "/entrenadores/{id}",
            put(entrenador_handler::update).delete(entrenador_handler::delete),
        )
        .route_layer(middleware::from_fn(|req, next| {
            authorization::require(Operation::ManageCoaches, req, next)
        }));

    Router::<FederacionState>::new()
        .route("/entrenadores", get(entrenador_handler::get_all))
        .route("/entrenadores/{id}", get(entrenador_handler::get_by_id))
        .merge(escritura)
}
