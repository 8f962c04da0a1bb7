use crate::dto::atleta_dto::AtletaDto;
use crate::error::request_error::ValidatedRequest;
use crate::error::ApiError;
use crate::repository::atleta_repository::AtletaRepositoryTrait;
use crate::response::api_response::MessageBody;
use crate::state::federacion_state::FederacionState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn get_all(State(state): State<FederacionState>) -> Result<impl IntoResponse, ApiError> {
    let atletas = state.atleta_repo.list().await?;
    Ok(Json(atletas))
}

pub async fn get_by_id(
    State(state): State<FederacionState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let atleta = state
        .atleta_repo
        .find(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Atleta no encontrado.".to_string()))?;
    Ok(Json(atleta))
}

pub async fn create(
    State(state): State<FederacionState>,
    ValidatedRequest(payload): ValidatedRequest<AtletaDto>,
) -> Result<impl IntoResponse, ApiError> {
    let atleta = state.atleta_repo.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(atleta)))
}

pub async fn update(
    State(state): State<FederacionState>,
    Path(id): Path<i32>,
    ValidatedRequest(payload): ValidatedRequest<AtletaDto>,
) -> Result<impl IntoResponse, ApiError> {
    let atleta = state
        .atleta_repo
        .update(id, &payload)
        .await?
        .ok_or_else(|| ApiError::NotFound("Atleta no encontrado.".to_string()))?;
    Ok(Json(atleta))
}

pub async fn delete(
    State(state): State<FederacionState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let eliminados = state.atleta_repo.delete(id).await?;
    if eliminados == 0 {
        return Err(ApiError::NotFound("Atleta no encontrado.".to_string()));
    }
    Ok(MessageBody::send("Atleta eliminado correctamente."))
}
