use crate::error::ApiError;
use crate::state::federacion_state::FederacionState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

/// Serie histórica de rendimiento de un atleta, derivada de sus
/// resultados registrados.
pub async fn get_by_atleta(
    State(state): State<FederacionState>,
    Path(atleta_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let historial = state.resultado_service.rendimiento(atleta_id).await?;
    Ok(Json(historial))
}
