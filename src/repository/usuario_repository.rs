use crate::config::database::{Database, DatabaseTrait};
use crate::entity::usuario::{Usuario, UsuarioConRol, UsuarioResumen};
use async_trait::async_trait;
use sqlx::Error;
use std::sync::Arc;

const USUARIO_CON_ROL_COLUMNS: &str = "usuarios.id, usuarios.nombre_usuario, usuarios.email, \
     usuarios.contrasena_hash, usuarios.rol_id, usuarios.activo, usuarios.ultimo_login, \
     roles.nombre AS rol_nombre, roles.permisos";

#[derive(Clone)]
pub struct UsuarioRepository {
    db_conn: Arc<Database>,
}

#[async_trait]
pub trait UsuarioRepositoryTrait {
    fn new(db_conn: &Arc<Database>) -> Self;
    async fn find_by_email_con_rol(&self, email: &str) -> Result<Option<UsuarioConRol>, Error>;
    async fn find_con_rol(&self, id: i32) -> Result<Option<UsuarioConRol>, Error>;
    async fn touch_ultimo_login(&self, id: i32) -> Result<(), Error>;
    async fn list(&self) -> Result<Vec<UsuarioResumen>, Error>;
    async fn create(
        &self,
        nombre_usuario: &str,
        email: &str,
        contrasena_hash: &str,
        rol_id: i32,
    ) -> Result<Usuario, Error>;
    async fn update(
        &self,
        id: i32,
        nombre_usuario: &str,
        email: &str,
        rol_id: Option<i32>,
        activo: bool,
        contrasena_hash: Option<&str>,
    ) -> Result<Option<Usuario>, Error>;
    async fn delete(&self, id: i32) -> Result<u64, Error>;
}

#[async_trait]
impl UsuarioRepositoryTrait for UsuarioRepository {
    fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn find_by_email_con_rol(&self, email: &str) -> Result<Option<UsuarioConRol>, Error> {
        sqlx::query_as::<_, UsuarioConRol>(&format!(
            "SELECT {USUARIO_CON_ROL_COLUMNS} FROM usuarios \
             LEFT JOIN roles ON usuarios.rol_id = roles.id \
             WHERE usuarios.email = $1"
        ))
        .bind(email)
        .fetch_optional(self.db_conn.get_pool())
        .await
    }

    async fn find_con_rol(&self, id: i32) -> Result<Option<UsuarioConRol>, Error> {
        sqlx::query_as::<_, UsuarioConRol>(&format!(
            "SELECT {USUARIO_CON_ROL_COLUMNS} FROM usuarios \
             LEFT JOIN roles ON usuarios.rol_id = roles.id \
             WHERE usuarios.id = $1"
        ))
        .bind(id)
        .fetch_optional(self.db_conn.get_pool())
        .await
    }

    async fn touch_ultimo_login(&self, id: i32) -> Result<(), Error> {
        sqlx::query("UPDATE usuarios SET ultimo_login = NOW(), updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(self.db_conn.get_pool())
            .await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<UsuarioResumen>, Error> {
        sqlx::query_as::<_, UsuarioResumen>(
            "SELECT usuarios.id, usuarios.nombre_usuario, usuarios.email, usuarios.activo, \
             roles.nombre AS rol_nombre FROM usuarios \
             LEFT JOIN roles ON usuarios.rol_id = roles.id \
             ORDER BY usuarios.id ASC",
        )
        .fetch_all(self.db_conn.get_pool())
        .await
    }

    async fn create(
        &self,
        nombre_usuario: &str,
        email: &str,
        contrasena_hash: &str,
        rol_id: i32,
    ) -> Result<Usuario, Error> {
        sqlx::query_as::<_, Usuario>(
            "INSERT INTO usuarios (nombre_usuario, email, contrasena_hash, rol_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(nombre_usuario)
        .bind(email)
        .bind(contrasena_hash)
        .bind(rol_id)
        .fetch_one(self.db_conn.get_pool())
        .await
    }

    async fn update(
        &self,
        id: i32,
        nombre_usuario: &str,
        email: &str,
        rol_id: Option<i32>,
        activo: bool,
        contrasena_hash: Option<&str>,
    ) -> Result<Option<Usuario>, Error> {
        sqlx::query_as::<_, Usuario>(
            "UPDATE usuarios SET nombre_usuario = $1, email = $2, rol_id = $3, activo = $4, \
             contrasena_hash = COALESCE($5, contrasena_hash), updated_at = NOW() \
             WHERE id = $6 RETURNING *",
        )
        .bind(nombre_usuario)
        .bind(email)
        .bind(rol_id)
        .bind(activo)
        .bind(contrasena_hash)
        .bind(id)
        .fetch_optional(self.db_conn.get_pool())
        .await
    }

    async fn delete(&self, id: i32) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(id)
            .execute(self.db_conn.get_pool())
            .await?;
        Ok(result.rows_affected())
    }
}
