use crate::handler::plan_handler;
use crate::middleware::authorization;
use crate::service::access_control::Operation;
use crate::state::plan_state::PlanState;
use axum::routing::{get, post};
use axum::{middleware, Router};

pub fn routes() -> Router<PlanState> {
    let generacion = Router::<PlanState>::new()
        .route(
            "/ai/generate-training-plan",
            post(plan_handler::generate_plan_entrenamiento),
        )
        .route(
            "/ai/generate-nutrition-plan",
            post(plan_handler::generate_plan_alimentacion),
        )
        .route_layer(middleware::from_fn(|req, next| {
            authorization::require(Operation::GeneratePlans, req, next)
        }));

    Router::<PlanState>::new()
        .route(
            "/planes-entrenamiento/{atleta_id}",
            get(plan_handler::get_planes_entrenamiento),
        )
        .route(
            "/planes-alimentacion/{atleta_id}",
            get(plan_handler::get_planes_alimentacion),
        )
        .merge(generacion)
}
