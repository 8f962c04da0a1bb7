use crate::handler::atleta_handler;
use crate::middleware::authorization;
use crate::service::access_control::Operation;
use crate::state::federacion_state::FederacionState;
use axum::routing::{get, post, put};
use axum::{middleware, Router};

pub fn routes() -> Router<FederacionState> {
    let escritura = Router::<FederacionState>::new()
        .route("/atletas", post(atleta_handler::create))
        .route("/atletas/{id}", put(atleta_handler::update).delete(atleta_handler::delete))
        .route_layer(middleware::from_fn(|req, next| {
            authorization::require(Operation::ManageAthletes, req, next)
        }));

    Router::<FederacionState>::new()
        .route("/atletas", get(atleta_handler::get_all))
        .route("/atletas/{id}", get(atleta_handler::get_by_id))
        .merge(escritura)
}
