use crate::handler::evento_handler;
use crate::middleware::authorization;
use crate::service::access_control::Operation;
use crate::state::federacion_state::FederacionState;
use axum::routing::{get, post, put};
use axum::{middleware, Router};

pub fn routes() -> Router<FederacionState> {
    let escritura = Router::<FederacionState>::new()
        .route("/eventos", post(evento_handler::create))
        .route("/eventos/{id}", put(evento_handler::update).delete(evento_handler::delete))
        .route_layer(middleware::from_fn(|req, next| {
            authorization::require(Operation::ManageCompetitions, req, next)
        }));

    Router::<FederacionState>::new()
        .route("/eventos", get(evento_handler::get_all))
        .merge(escritura)
}
