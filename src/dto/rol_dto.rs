use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct RolDto {
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "El nombre del rol es requerido."))]
    pub nombre: String,
    pub permisos: Option<serde_json::Value>,
}
