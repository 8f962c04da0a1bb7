use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct EntrenamientoDto {
    pub atleta_id: i32,
    pub fecha: NaiveDate,
    #[validate(length(min = 1, message = "La descripción es requerida."))]
    pub descripcion: String,
    #[validate(range(min = 1, max = 600, message = "La duración debe estar entre 1 y 600 minutos."))]
    pub duracion: i32,
    #[validate(length(min = 1, message = "La intensidad es requerida."))]
    pub intensidad: String,
}
