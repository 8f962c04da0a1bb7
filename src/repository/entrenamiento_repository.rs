use crate::config::database::{Database, DatabaseTrait};
use crate::dto::entrenamiento_dto::EntrenamientoDto;
use crate::entity::entrenamiento::Entrenamiento;
use async_trait::async_trait;
use sqlx::Error;
use std::sync::Arc;

#[derive(Clone)]
pub struct EntrenamientoRepository {
    db_conn: Arc<Database>,
}

#[async_trait]
pub trait EntrenamientoRepositoryTrait {
    fn new(db_conn: &Arc<Database>) -> Self;
    async fn list(&self) -> Result<Vec<Entrenamiento>, Error>;
    async fn find(&self, id: i32) -> Result<Option<Entrenamiento>, Error>;
    async fn create(&self, payload: &EntrenamientoDto) -> Result<Entrenamiento, Error>;
    async fn update(&self, id: i32, payload: &EntrenamientoDto) -> Result<Option<Entrenamiento>, Error>;
    async fn delete(&self, id: i32) -> Result<u64, Error>;
}

#[async_trait]
impl EntrenamientoRepositoryTrait for EntrenamientoRepository {
    fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn list(&self) -> Result<Vec<Entrenamiento>, Error> {
        sqlx::query_as::<_, Entrenamiento>("SELECT * FROM entrenamientos ORDER BY fecha DESC")
            .fetch_all(self.db_conn.get_pool())
            .await
    }

    async fn find(&self, id: i32) -> Result<Option<Entrenamiento>, Error> {
        sqlx::query_as::<_, Entrenamiento>("SELECT * FROM entrenamientos WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db_conn.get_pool())
            .await
    }

    async fn create(&self, payload: &EntrenamientoDto) -> Result<Entrenamiento, Error> {
        sqlx::query_as::<_, Entrenamiento>(
            "INSERT INTO entrenamientos (atleta_id, fecha, descripcion, duracion, intensidad) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(payload.atleta_id)
        .bind(payload.fecha)
        .bind(&payload.descripcion)
        .bind(payload.duracion)
        .bind(&payload.intensidad)
        .fetch_one(self.db_conn.get_pool())
        .await
    }

    async fn update(&self, id: i32, payload: &EntrenamientoDto) -> Result<Option<Entrenamiento>, Error> {
        sqlx::query_as::<_, Entrenamiento>(
            "UPDATE entrenamientos SET atleta_id = $1, fecha = $2, descripcion = $3, \
             duracion = $4, intensidad = $5 WHERE id = $6 RETURNING *",
        )
        .bind(payload.atleta_id)
        .bind(payload.fecha)
        .bind(&payload.descripcion)
        .bind(payload.duracion)
        .bind(&payload.intensidad)
        .bind(id)
        .fetch_optional(self.db_conn.get_pool())
        .await
    }

    async fn delete(&self, id: i32) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM entrenamientos WHERE id = $1")
            .bind(id)
            .execute(self.db_conn.get_pool())
            .await?;
        Ok(result.rows_affected())
    }
}
