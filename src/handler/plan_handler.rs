use crate::dto::plan_dto::{PlanAlimentacionRequestDto, PlanEntrenamientoRequestDto};
use crate::error::request_error::ValidatedRequest;
use crate::error::ApiError;
use crate::state::plan_state::PlanState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::info;

pub async fn get_planes_entrenamiento(
    State(state): State<PlanState>,
    Path(atleta_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let planes = state.plan_service.listar_planes_entrenamiento(atleta_id).await?;
    Ok(Json(planes))
}

pub async fn get_planes_alimentacion(
    State(state): State<PlanState>,
    Path(atleta_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let planes = state.plan_service.listar_planes_alimentacion(atleta_id).await?;
    Ok(Json(planes))
}

/// La generación delega en el servicio externo y puede tardar decenas de
/// segundos; la petición queda abierta mientras tanto.
pub async fn generate_plan_entrenamiento(
    State(state): State<PlanState>,
    ValidatedRequest(payload): ValidatedRequest<PlanEntrenamientoRequestDto>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Generando plan de entrenamiento para el atleta {}", payload.atleta_id);
    let plan = state.plan_service.generar_plan_entrenamiento(payload).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

pub async fn generate_plan_alimentacion(
    State(state): State<PlanState>,
    ValidatedRequest(payload): ValidatedRequest<PlanAlimentacionRequestDto>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Generando plan de alimentación para el atleta {}", payload.atleta_id);
    let plan = state.plan_service.generar_plan_alimentacion(payload).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}
