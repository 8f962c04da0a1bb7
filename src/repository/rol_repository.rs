use crate::config::database::{Database, DatabaseTrait};
use crate::entity::rol::Rol;
use async_trait::async_trait;
use sqlx::Error;
use std::sync::Arc;

#[derive(Clone)]
pub struct RolRepository {
    db_conn: Arc<Database>,
}

#[async_trait]
pub trait RolRepositoryTrait {
    fn new(db_conn: &Arc<Database>) -> Self;
    async fn list(&self) -> Result<Vec<Rol>, Error>;
    async fn create(&self, nombre: &str, permisos: Option<&serde_json::Value>) -> Result<Rol, Error>;
    async fn update(
        &self,
        id: i32,
        nombre: &str,
        permisos: Option<&serde_json::Value>,
    ) -> Result<Option<Rol>, Error>;
    async fn delete(&self, id: i32) -> Result<u64, Error>;
}

#[async_trait]
impl RolRepositoryTrait for RolRepository {
    fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn list(&self) -> Result<Vec<Rol>, Error> {
        sqlx::query_as::<_, Rol>("SELECT id, nombre, permisos FROM roles ORDER BY id ASC")
            .fetch_all(self.db_conn.get_pool())
            .await
    }

    async fn create(&self, nombre: &str, permisos: Option<&serde_json::Value>) -> Result<Rol, Error> {
        sqlx::query_as::<_, Rol>(
            "INSERT INTO roles (nombre, permisos) VALUES ($1, $2) RETURNING id, nombre, permisos",
        )
        .bind(nombre)
        .bind(permisos)
        .fetch_one(self.db_conn.get_pool())
        .await
    }

    async fn update(
        &self,
        id: i32,
        nombre: &str,
        permisos: Option<&serde_json::Value>,
    ) -> Result<Option<Rol>, Error> {
        sqlx::query_as::<_, Rol>(
            "UPDATE roles SET nombre = $1, permisos = $2 WHERE id = $3 RETURNING id, nombre, permisos",
        )
        .bind(nombre)
        .bind(permisos)
        .bind(id)
        .fetch_optional(self.db_conn.get_pool())
        .await
    }

    async fn delete(&self, id: i32) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(self.db_conn.get_pool())
            .await?;
        Ok(result.rows_affected())
    }
}
