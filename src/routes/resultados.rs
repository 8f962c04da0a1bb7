use crate::handler::resultado_handler;
use crate::middleware::authorization;
use crate::service::access_control::Operation;
use crate::state::federacion_state::FederacionState;
use axum::routing::{get, post, put};
use axum::{middleware, Router};

pub fn routes() -> Router<FederacionState> {
    let escritura = Router::<FederacionState>::new()
        .route("/resultados", post(resultado_handler::create))
        .route(
            "/resultados/{id}",
            put(resultado_handler::update).delete(resultado_handler::delete),
        )
        .route_layer(middleware::from_fn(|req, next| {
            authorization::require(Operation::ManageResults, req, next)
        }));

    Router::<FederacionState>::new()
        .route("/resultados", get(resultado_handler::get_all))
        .merge(escritura)
}
