use crate::handler::competencia_handler;
use crate::middleware::authorization;
use crate::service::access_control::Operation;
use crate::state::federacion_state::FederacionState;
use axum::routing::{get, post, put};
use axum::{middleware, Router};

pub fn routes() -> Router<FederacionState> {
    let escritura = Router::<FederacionState>::new()
        .route("/competencias", post(competencia_handler::create))
        .route(
            "/competencias/{id}",
            put(competencia_handler::update).delete(competencia_handler::delete),
        )
        .route_layer(middleware::from_fn(|req, next| {
            authorization::require(Operation::ManageCompetitions, req, next)
        }));

    Router::<FederacionState>::new()
        .route("/competencias", get(competencia_handler::get_all))
        .route("/competencias/{id}", get(competencia_handler::get_by_id))
        .merge(escritura)
}
