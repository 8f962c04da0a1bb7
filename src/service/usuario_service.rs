use crate::config::database::Database;
use crate::config::logging::secure_log;
use crate::config::parameter;
use crate::dto::usuario_dto::{UsuarioCreateDto, UsuarioReadDto, UsuarioUpdateDto};
use crate::entity::usuario::UsuarioResumen;
use crate::error::db_error::{self, DbError};
use crate::error::ApiError;
use crate::repository::usuario_repository::{UsuarioRepository, UsuarioRepositoryTrait};
use std::sync::Arc;

#[derive(Clone)]
pub struct UsuarioService {
    usuario_repo: UsuarioRepository,
}

impl UsuarioService {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            usuario_repo: UsuarioRepository::new(db_conn),
        }
    }

    pub async fn listar(&self) -> Result<Vec<UsuarioResumen>, ApiError> {
        Ok(self.usuario_repo.list().await?)
    }

    pub async fn crear(&self, payload: UsuarioCreateDto) -> Result<UsuarioReadDto, ApiError> {
        let contrasena_hash = hash_contrasena(&payload.contrasena)?;

        // rol_id ya pasó la validación `required` del DTO
        let rol_id = payload
            .rol_id
            .ok_or_else(|| ApiError::BadRequest("Todos los campos son requeridos.".to_string()))?;

        match self
            .usuario_repo
            .create(&payload.nombre_usuario, &payload.email, &contrasena_hash, rol_id)
            .await
        {
            Ok(usuario) => Ok(usuario.into()),
            Err(e) if db_error::is_unique_violation(&e) => {
                Err(ApiError::Conflict("El email o nombre de usuario ya existe.".to_string()))
            }
            Err(e) => {
                secure_log::secure_error!("Error al crear el usuario", e);
                Err(ApiError::Db(DbError::SomethingWentWrong(
                    "No se pudo crear el usuario".to_string(),
                )))
            }
        }
    }

    pub async fn actualizar(&self, id: i32, payload: UsuarioUpdateDto) -> Result<UsuarioReadDto, ApiError> {
        // Solo se actualiza la contraseña cuando viene en el cuerpo
        let contrasena_hash = match payload.contrasena.as_deref() {
            Some(contrasena) if !contrasena.is_empty() => Some(hash_contrasena(contrasena)?),
            _ => None,
        };

        match self
            .usuario_repo
            .update(
                id,
                &payload.nombre_usuario,
                &payload.email,
                payload.rol_id,
                payload.activo,
                contrasena_hash.as_deref(),
            )
            .await
        {
            Ok(Some(usuario)) => Ok(usuario.into()),
            Ok(None) => Err(ApiError::NotFound("Usuario no encontrado.".to_string())),
            Err(e) if db_error::is_unique_violation(&e) => {
                Err(ApiError::Conflict("El email o nombre de usuario ya existe.".to_string()))
            }
            Err(e) => {
                secure_log::secure_error!("Error al actualizar el usuario", e);
                Err(ApiError::Db(DbError::SomethingWentWrong(
                    "No se pudo actualizar el usuario".to_string(),
                )))
            }
        }
    }

    pub async fn eliminar(&self, id: i32) -> Result<(), ApiError> {
        let eliminados = self.usuario_repo.delete(id).await?;
        if eliminados == 0 {
            return Err(ApiError::NotFound("Usuario no encontrado.".to_string()));
        }
        Ok(())
    }
}

fn hash_contrasena(contrasena: &str) -> Result<String, ApiError> {
    let costo = parameter::get_u32("BCRYPT_COST");
    bcrypt::hash(contrasena, costo).map_err(|e| {
        secure_log::secure_error!("Error al calcular el hash de la contraseña", e);
        ApiError::Internal("No se pudo procesar la contraseña".to_string())
    })
}
