use crate::dto::rol_dto::RolDto;
use crate::error::db_error;
use crate::error::request_error::ValidatedRequest;
use crate::error::ApiError;
use crate::repository::rol_repository::RolRepositoryTrait;
use crate::response::api_response::MessageBody;
use crate::state::usuario_state::UsuarioState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn get_all(State(state): State<UsuarioState>) -> Result<impl IntoResponse, ApiError> {
    let roles = state.rol_repo.list().await?;
    Ok(Json(roles))
}

pub async fn create(
    State(state): State<UsuarioState>,
    ValidatedRequest(payload): ValidatedRequest<RolDto>,
) -> Result<impl IntoResponse, ApiError> {
    match state.rol_repo.create(&payload.nombre, payload.permisos.as_ref()).await {
        Ok(rol) => Ok((StatusCode::CREATED, Json(rol))),
        Err(e) if db_error::is_unique_violation(&e) => {
            Err(ApiError::Conflict("El rol ya existe.".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn update(
    State(state): State<UsuarioState>,
    Path(id): Path<i32>,
    ValidatedRequest(payload): ValidatedRequest<RolDto>,
) -> Result<impl IntoResponse, ApiError> {
    match state.rol_repo.update(id, &payload.nombre, payload.permisos.as_ref()).await {
        Ok(Some(rol)) => Ok(Json(rol)),
        Ok(None) => Err(ApiError::NotFound("Rol no encontrado.".to_string())),
        Err(e) if db_error::is_unique_violation(&e) => {
            Err(ApiError::Conflict("El rol ya existe.".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn delete(
    State(state): State<UsuarioState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    match state.rol_repo.delete(id).await {
        Ok(0) => Err(ApiError::NotFound("Rol no encontrado.".to_string())),
        Ok(_) => Ok(MessageBody::send("Rol eliminado correctamente.")),
        Err(e) if db_error::is_foreign_key_violation(&e) => Err(ApiError::Conflict(
            "No se puede eliminar un rol asignado a usuarios.".to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}
