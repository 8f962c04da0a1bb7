use crate::config::database::{Database, DatabaseTrait};
use crate::dto::entrenador_dto::EntrenadorDto;
use crate::entity::entrenador::Entrenador;
use async_trait::async_trait;
use sqlx::Error;
use std::sync::Arc;

#[derive(Clone)]
pub struct EntrenadorRepository {
    db_conn: Arc<Database>,
}

#[async_trait]
pub trait EntrenadorRepositoryTrait {
    fn new(db_conn: &Arc<Database>) -> Self;
    async fn list(&self) -> Result<Vec<Entrenador>, Error>;
    async fn find(&self, id: i32) -> Result<Option<Entrenador>, Error>;
    async fn create(&self, payload: &EntrenadorDto) -> Result<Entrenador, Error>;
    async fn update(&self, id: i32, payload: &EntrenadorDto) -> Result<Option<Entrenador>, Error>;
    async fn delete(&self, id: i32) -> Result<u64, Error>;
}

#[async_trait]
impl EntrenadorRepositoryTrait for EntrenadorRepository {
    fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn list(&self) -> Result<Vec<Entrenador>, Error> {
        sqlx::query_as::<_, Entrenador>("SELECT * FROM entrenadores ORDER BY id ASC")
            .fetch_all(self.db_conn.get_pool())
            .await
    }

    async fn find(&self, id: i32) -> Result<Option<Entrenador>, Error> {
        sqlx::query_as::<_, Entrenador>("SELECT * FROM entrenadores WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db_conn.get_pool())
            .await
    }

    async fn create(&self, payload: &EntrenadorDto) -> Result<Entrenador, Error> {
        sqlx::query_as::<_, Entrenador>(
            "INSERT INTO entrenadores (nombre, apellido, experiencia, email, telefono) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&payload.nombre)
        .bind(&payload.apellido)
        .bind(&payload.experiencia)
        .bind(&payload.email)
        .bind(&payload.telefono)
        .fetch_one(self.db_conn.get_pool())
        .await
    }

    async fn update(&self, id: i32, payload: &EntrenadorDto) -> Result<Option<Entrenador>, Error> {
        sqlx::query_as::<_, Entrenador>(
            "UPDATE entrenadores SET nombre = $1, apellido = $2, experiencia = $3, email = $4, \
             telefono = $5 WHERE id = $6 RETURNING *",
        )
        .bind(&payload.nombre)
        .bind(&payload.apellido)
        .bind(&payload.experiencia)
        .bind(&payload.email)
        .bind(&payload.telefono)
        .bind(id)
        .fetch_optional(self.db_conn.get_pool())
        .await
    }

    async fn delete(&self, id: i32) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM entrenadores WHERE id = $1")
            .bind(id)
            .execute(self.db_conn.get_pool())
            .await?;
        Ok(result.rows_affected())
    }
}
