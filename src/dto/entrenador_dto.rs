use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct EntrenadorDto {
    #[validate(length(min = 1, message = "El nombre es requerido."))]
    pub nombre: String,
    #[validate(length(min = 1, message = "El apellido es requerido."))]
    pub apellido: String,
    pub experiencia: String,
    #[validate(email(message = "Email inválido."))]
    pub email: String,
    pub telefono: String,
}
