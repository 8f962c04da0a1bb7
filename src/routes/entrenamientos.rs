use crate::handler::entrenamiento_handler;
use crate::middleware::authorization;
use crate::service::access_control::Operation;
use crate::state::federacion_state::FederacionState;
use axum::routing::{get, post, put};
use axum::{middleware, Router};

pub fn routes() -> Router<FederacionState> {
    let escritura = Router::<FederacionState>::new()
        .route("/entrenamientos", post(entrenamiento_handler::create))
        .route(
            "/entrenamientos/{id}",
            put(entrenamiento_handler::update).delete(entrenamiento_handler::delete),
        )
        .route_layer(middleware::from_fn(|req, next| {
            authorization::require(Operation::ManageTrainings, req, next)
        }));

    Router::<FederacionState>::new()
        .route("/entrenamientos", get(entrenamiento_handler::get_all))
        .merge(escritura)
}
