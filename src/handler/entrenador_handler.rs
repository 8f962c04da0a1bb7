use crate::dto::entrenador_dto::EntrenadorDto;
use crate::error::request_error::ValidatedRequest;
use crate::error::ApiError;
use crate::repository::entrenador_repository::EntrenadorRepositoryTrait;
use crate::response::api_response::MessageBody;
use crate::state::federacion_state::FederacionState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn get_all(State(state): State<FederacionState>) -> Result<impl IntoResponse, ApiError> {
    let entrenadores = state.entrenador_repo.list().await?;
    Ok(Json(entrenadores))
}

pub async fn get_by_id(
    State(state): State<FederacionState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let entrenador = state
        .entrenador_repo
        .find(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Entrenador no encontrado.".to_string()))?;
    Ok(Json(entrenador))
}

pub async fn create(
    State(state): State<FederacionState>,
    ValidatedRequest(payload): ValidatedRequest<EntrenadorDto>,
) -> Result<impl IntoResponse, ApiError> {
    let entrenador = state.entrenador_repo.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(entrenador)))
}

pub async fn update(
    State(state): State<FederacionState>,
    Path(id): Path<i32>,
    ValidatedRequest(payload): ValidatedRequest<EntrenadorDto>,
) -> Result<impl IntoResponse, ApiError> {
    let entrenador = state
        .entrenador_repo
        .update(id, &payload)
        .await?
        .ok_or_else(|| ApiError::NotFound("Entrenador no encontrado.".to_string()))?;
    Ok(Json(entrenador))
}

pub async fn delete(
    State(state): State<FederacionState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let eliminados = state.entrenador_repo.delete(id).await?;
    if eliminados == 0 {
        return Err(ApiError::NotFound("Entrenador no encontrado.".to_string()));
    }
    Ok(MessageBody::send("Entrenador eliminado correctamente."))
}
