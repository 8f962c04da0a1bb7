use crate::dto::usuario_dto::{UsuarioCreateDto, UsuarioUpdateDto};
use crate::error::request_error::ValidatedRequest;
use crate::error::ApiError;
use crate::response::api_response::MessageBody;
use crate::state::usuario_state::UsuarioState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn get_all(State(state): State<UsuarioState>) -> Result<impl IntoResponse, ApiError> {
    let usuarios = state.usuario_service.listar().await?;
    Ok(Json(usuarios))
}

pub async fn create(
    State(state): State<UsuarioState>,
    ValidatedRequest(payload): ValidatedRequest<UsuarioCreateDto>,
) -> Result<impl IntoResponse, ApiError> {
    let usuario = state.usuario_service.crear(payload).await?;
    Ok((StatusCode::CREATED, Json(usuario)))
}

pub async fn update(
    State(state): State<UsuarioState>,
    Path(id): Path<i32>,
    ValidatedRequest(payload): ValidatedRequest<UsuarioUpdateDto>,
) -> Result<impl IntoResponse, ApiError> {
    let usuario = state.usuario_service.actualizar(id, payload).await?;
    Ok(Json(usuario))
}

pub async fn delete(
    State(state): State<UsuarioState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state.usuario_service.eliminar(id).await?;
    Ok(MessageBody::send("Usuario eliminado correctamente."))
}
