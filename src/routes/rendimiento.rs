use crate::handler::rendimiento_handler;
use crate::state::federacion_state::FederacionState;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<FederacionState> {
    Router::<FederacionState>::new()
        .route("/rendimiento/{atleta_id}", get(rendimiento_handler::get_by_atleta))
}
