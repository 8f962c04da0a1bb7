use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct AtletaDto {
    #[validate(length(min = 1, message = "El nombre es requerido."))]
    pub nombre: String,
    #[validate(length(min = 1, message = "El apellido es requerido."))]
    pub apellido: String,
    pub fecha_nacimiento: NaiveDate,
    #[validate(length(min = 1, message = "El género es requerido."))]
    pub genero: String,
    pub pais: String,
    pub ciudad: String,
    #[validate(email(message = "Email inválido."))]
    pub email: String,
    pub telefono: String,
    #[validate(range(min = 20.0, max = 300.0, message = "El peso corporal debe estar entre 20 y 300 kg."))]
    pub peso: f64,
}
