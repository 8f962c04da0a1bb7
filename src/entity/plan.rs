use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Plan de entrenamiento generado para un atleta. `ejercicios` guarda el
/// arreglo JSON producido por el generador.
#[derive(Clone, Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct PlanEntrenamiento {
    pub id: i32,
    pub atleta_id: i32,
    pub objetivo: String,
    pub nivel: String,
    pub frecuencia: i32,
    pub duracion_semanas: i32,
    pub plan_detallado: String,
    pub ejercicios: serde_json::Value,
    pub fecha_creacion: NaiveDate,
}

/// Plan de alimentación generado para un atleta
#[derive(Clone, Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct PlanAlimentacion {
    pub id: i32,
    pub atleta_id: i32,
    pub objetivo: String,
    pub peso_actual: f64,
    pub peso_objetivo: Option<f64>,
    pub actividad_nivel: String,
    pub restricciones: Option<String>,
    pub duracion_semanas: i32,
    pub plan_detallado: String,
    pub calorias_diarias: i32,
    pub macros: serde_json::Value,
    pub comidas: serde_json::Value,
    pub fecha_creacion: NaiveDate,
}
