use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct CompetenciaDto {
    #[validate(length(min = 1, message = "El nombre de la competencia es requerido."))]
    pub nombre: String,
    pub fecha: NaiveDate,
    pub ubicacion: String,
    pub tipo: String,
    pub organizador: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct EventoDto {
    pub competencia_id: i32,
    #[validate(length(min = 1, message = "El nombre del evento es requerido."))]
    pub nombre: String,
    pub categoria: String,
    pub fecha: NaiveDate,
}
