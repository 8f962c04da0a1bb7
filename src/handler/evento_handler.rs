use crate::dto::competencia_dto::EventoDto;
use crate::error::db_error;
use crate::error::request_error::ValidatedRequest;
use crate::error::ApiError;
use crate::repository::evento_repository::EventoRepositoryTrait;
use crate::response::api_response::MessageBody;
use crate::state::federacion_state::FederacionState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn get_all(State(state): State<FederacionState>) -> Result<impl IntoResponse, ApiError> {
    let eventos = state.evento_repo.list().await?;
    Ok(Json(eventos))
}

pub async fn create(
    State(state): State<FederacionState>,
    ValidatedRequest(payload): ValidatedRequest<EventoDto>,
) -> Result<impl IntoResponse, ApiError> {
    match state.evento_repo.create(&payload).await {
        Ok(evento) => Ok((StatusCode::CREATED, Json(evento))),
        Err(e) if db_error::is_foreign_key_violation(&e) => {
            Err(ApiError::NotFound("Competencia no encontrada.".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn update(
    State(state): State<FederacionState>,
    Path(id): Path<i32>,
    ValidatedRequest(payload): ValidatedRequest<EventoDto>,
) -> Result<impl IntoResponse, ApiError> {
    match state.evento_repo.update(id, &payload).await {
        Ok(Some(evento)) => Ok(Json(evento)),
        Ok(None) => Err(ApiError::NotFound("Evento no encontrado.".to_string())),
        Err(e) if db_error::is_foreign_key_violation(&e) => {
            Err(ApiError::NotFound("Competencia no encontrada.".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn delete(
    State(state): State<FederacionState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let eliminados = state.evento_repo.delete(id).await?;
    if eliminados == 0 {
        return Err(ApiError::NotFound("Evento no encontrado.".to_string()));
    }
    Ok(MessageBody::send("Evento eliminado correctamente."))
}
