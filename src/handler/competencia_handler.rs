use crate::dto::competencia_dto::CompetenciaDto;
use crate::error::request_error::ValidatedRequest;
use crate::error::ApiError;
use crate::repository::competencia_repository::CompetenciaRepositoryTrait;
use crate::response::api_response::MessageBody;
use crate::state::federacion_state::FederacionState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn get_all(State(state): State<FederacionState>) -> Result<impl IntoResponse, ApiError> {
    let competencias = state.competencia_repo.list().await?;
    Ok(Json(competencias))
}

pub async fn get_by_id(
    State(state): State<FederacionState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let competencia = state
        .competencia_repo
        .find(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Competencia no encontrada.".to_string()))?;
    Ok(Json(competencia))
}

pub async fn create(
    State(state): State<FederacionState>,
    ValidatedRequest(payload): ValidatedRequest<CompetenciaDto>,
) -> Result<impl IntoResponse, ApiError> {
    let competencia = state.competencia_repo.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(competencia)))
}

pub async fn update(
    State(state): State<FederacionState>,
    Path(id): Path<i32>,
    ValidatedRequest(payload): ValidatedRequest<CompetenciaDto>,
) -> Result<impl IntoResponse, ApiError> {
    let competencia = state
        .competencia_repo
        .update(id, &payload)
        .await?
        .ok_or_else(|| ApiError::NotFound("Competencia no encontrada.".to_string()))?;
    Ok(Json(competencia))
}

pub async fn delete(
    State(state): State<FederacionState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let eliminados = state.competencia_repo.delete(id).await?;
    if eliminados == 0 {
        return Err(ApiError::NotFound("Competencia no encontrada.".to_string()));
    }
    Ok(MessageBody::send("Competencia eliminada correctamente."))
}
