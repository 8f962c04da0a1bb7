use crate::dto::resultado_dto::ResultadoDto;
use crate::error::request_error::ValidatedRequest;
use crate::error::ApiError;
use crate::response::api_response::MessageBody;
use crate::state::federacion_state::FederacionState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn get_all(State(state): State<FederacionState>) -> Result<impl IntoResponse, ApiError> {
    let resultados = state.resultado_service.listar().await?;
    Ok(Json(resultados))
}

pub async fn create(
    State(state): State<FederacionState>,
    ValidatedRequest(payload): ValidatedRequest<ResultadoDto>,
) -> Result<impl IntoResponse, ApiError> {
    let resultado = state.resultado_service.crear(payload).await?;
    Ok((StatusCode::CREATED, Json(resultado)))
}

pub async fn update(
    State(state): State<FederacionState>,
    Path(id): Path<i32>,
    ValidatedRequest(payload): ValidatedRequest<ResultadoDto>,
) -> Result<impl IntoResponse, ApiError> {
    let resultado = state.resultado_service.actualizar(id, payload).await?;
    Ok(Json(resultado))
}

pub async fn delete(
    State(state): State<FederacionState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state.resultado_service.eliminar(id).await?;
    Ok(MessageBody::send("Resultado eliminado correctamente."))
}
