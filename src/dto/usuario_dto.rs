use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct UsuarioCreateDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "Todos los campos son requeridos."))]
    pub nombre_usuario: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Todos los campos son requeridos."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Todos los campos son requeridos."))]
    pub contrasena: String,
    #[validate(required(message = "Todos los campos son requeridos."))]
    pub rol_id: Option<i32>,
}

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct UsuarioUpdateDto {
    #[validate(length(min = 1, message = "El nombre de usuario es requerido."))]
    pub nombre_usuario: String,
    #[validate(email(message = "Email inválido."))]
    pub email: String,
    pub rol_id: Option<i32>,
    pub activo: bool,
    // La contraseña solo se actualiza cuando viene en el cuerpo
    pub contrasena: Option<String>,
}

impl std::fmt::Debug for UsuarioCreateDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsuarioCreateDto")
            .field("nombre_usuario", &self.nombre_usuario)
            .field("email", &self.email)
            .field("rol_id", &self.rol_id)
            .finish()
    }
}

impl std::fmt::Debug for UsuarioUpdateDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsuarioUpdateDto")
            .field("nombre_usuario", &self.nombre_usuario)
            .field("email", &self.email)
            .field("rol_id", &self.rol_id)
            .field("activo", &self.activo)
            .finish()
    }
}

/// Usuario serialized back to clients, without the password hash
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UsuarioReadDto {
    pub id: i32,
    pub nombre_usuario: String,
    pub email: String,
    pub rol_id: Option<i32>,
    pub activo: bool,
}

impl From<crate::entity::usuario::Usuario> for UsuarioReadDto {
    fn from(model: crate::entity::usuario::Usuario) -> Self {
        Self {
            id: model.id,
            nombre_usuario: model.nombre_usuario,
            email: model.email,
            rol_id: model.rol_id,
            activo: model.activo,
        }
    }
}
