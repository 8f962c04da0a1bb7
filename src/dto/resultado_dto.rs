use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Result submission: the three lifts come from the client, `total` and
/// `wilks_score` are computed by the server.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct ResultadoDto {
    pub evento_id: i32,
    pub atleta_id: i32,
    #[validate(range(min = 0.0, message = "Los levantamientos no pueden ser negativos."))]
    pub sentadilla: f64,
    #[validate(range(min = 0.0, message = "Los levantamientos no pueden ser negativos."))]
    pub press_banca: f64,
    #[validate(range(min = 0.0, message = "Los levantamientos no pueden ser negativos."))]
    pub peso_muerto: f64,
    #[validate(range(min = 0.0, message = "La categoría de peso no puede ser negativa."))]
    pub categoria_peso: f64,
}

/// Punto de la serie histórica de rendimiento de un atleta
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RendimientoDto {
    pub fecha: NaiveDate,
    pub sentadilla: f64,
    pub press_banca: f64,
    pub peso_muerto: f64,
    pub total: f64,
    pub peso_corporal: f64,
    pub wilks: f64,
}
