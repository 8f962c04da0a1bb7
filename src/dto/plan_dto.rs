use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct PlanEntrenamientoRequestDto {
    pub atleta_id: i32,
    #[validate(length(min = 1, message = "El objetivo es requerido."))]
    pub objetivo: String,
    #[validate(length(min = 1, message = "El nivel es requerido."))]
    pub nivel: String,
    #[validate(range(min = 1, max = 7, message = "La frecuencia debe estar entre 1 y 7 días."))]
    pub frecuencia: i32,
    #[validate(range(min = 1, max = 52, message = "La duración debe estar entre 1 y 52 semanas."))]
    pub duracion: i32,
    pub limitaciones: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct PlanAlimentacionRequestDto {
    pub atleta_id: i32,
    #[validate(length(min = 1, message = "El objetivo es requerido."))]
    pub objetivo: String,
    #[validate(range(min = 20.0, max = 300.0, message = "El peso actual debe estar entre 20 y 300 kg."))]
    pub peso_actual: f64,
    pub peso_objetivo: Option<f64>,
    #[validate(length(min = 1, message = "El nivel de actividad es requerido."))]
    pub actividad_nivel: String,
    pub restricciones: Option<String>,
    pub preferencias: Option<String>,
    #[validate(range(min = 1, max = 52, message = "La duración debe estar entre 1 y 52 semanas."))]
    pub duracion: i32,
}

/// Contenido estructurado que el generador debe devolver para un plan de
/// entrenamiento.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanEntrenamientoContenido {
    pub plan_detallado: String,
    pub ejercicios: serde_json::Value,
}

/// Contenido estructurado de un plan de alimentación
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanAlimentacionContenido {
    pub plan_detallado: String,
    pub calorias_diarias: i32,
    pub macros: serde_json::Value,
    pub comidas: serde_json::Value,
}
