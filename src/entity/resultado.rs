use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Row of the `resultados` table. `total` and `wilks_score` are computed
/// server-side when the result is stored.
#[derive(Clone, Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct Resultado {
    pub id: i32,
    pub evento_id: i32,
    pub atleta_id: i32,
    pub sentadilla: f64,
    pub press_banca: f64,
    pub peso_muerto: f64,
    pub categoria_peso: f64,
    pub total: f64,
    pub wilks_score: f64,
}

/// Resultado joined through eventos with the competition date, used to
/// assemble an athlete's performance history.
#[derive(Clone, Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct ResultadoConFecha {
    pub fecha: NaiveDate,
    pub sentadilla: f64,
    pub press_banca: f64,
    pub peso_muerto: f64,
    pub total: f64,
    pub wilks_score: f64,
}
