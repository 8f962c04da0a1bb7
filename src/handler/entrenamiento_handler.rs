use crate::dto::entrenamiento_dto::EntrenamientoDto;
use crate::error::db_error;
use crate::error::request_error::ValidatedRequest;
use crate::error::ApiError;
use crate::repository::entrenamiento_repository::EntrenamientoRepositoryTrait;
use crate::response::api_response::MessageBody;
use crate::state::federacion_state::FederacionState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn get_all(State(state): State<FederacionState>) -> Result<impl IntoResponse, ApiError> {
    let entrenamientos = state.entrenamiento_repo.list().await?;
    Ok(Json(entrenamientos))
}

pub async fn create(
    State(state): State<FederacionState>,
    ValidatedRequest(payload): ValidatedRequest<EntrenamientoDto>,
) -> Result<impl IntoResponse, ApiError> {
    match state.entrenamiento_repo.create(&payload).await {
        Ok(entrenamiento) => Ok((StatusCode::CREATED, Json(entrenamiento))),
        Err(e) if db_error::is_foreign_key_violation(&e) => {
            Err(ApiError::NotFound("Atleta no encontrado.".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn update(
    State(state): State<FederacionState>,
    Path(id): Path<i32>,
    ValidatedRequest(payload): ValidatedRequest<EntrenamientoDto>,
) -> Result<impl IntoResponse, ApiError> {
    match state.entrenamiento_repo.update(id, &payload).await {
        Ok(Some(entrenamiento)) => Ok(Json(entrenamiento)),
        Ok(None) => Err(ApiError::NotFound("Entrenamiento no encontrado.".to_string())),
        Err(e) if db_error::is_foreign_key_violation(&e) => {
            Err(ApiError::NotFound("Atleta no encontrado.".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn delete(
    State(state): State<FederacionState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let eliminados = state.entrenamiento_repo.delete(id).await?;
    if eliminados == 0 {
        return Err(ApiError::NotFound("Entrenamiento no encontrado.".to_string()));
    }
    Ok(MessageBody::send("Entrenamiento eliminado correctamente."))
}
