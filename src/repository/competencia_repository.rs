use crate::config::database::{Database, DatabaseTrait};
use crate::dto::competencia_dto::CompetenciaDto;
use crate::entity::competencia::Competencia;
use async_trait::async_trait;
use sqlx::Error;
use std::sync::Arc;

#[derive(Clone)]
pub struct CompetenciaRepository {
    db_conn: Arc<Database>,
}

#[async_trait]
pub trait CompetenciaRepositoryTrait {
    fn new(db_conn: &Arc<Database>) -> Self;
    async fn list(&self) -> Result<Vec<Competencia>, Error>;
    async fn find(&self, id: i32) -> Result<Option<Competencia>, Error>;
    async fn create(&self, payload: &CompetenciaDto) -> Result<Competencia, Error>;
    async fn update(&self, id: i32, payload: &CompetenciaDto) -> Result<Option<Competencia>, Error>;
    async fn delete(&self, id: i32) -> Result<u64, Error>;
}

#[async_trait]
impl CompetenciaRepositoryTrait for CompetenciaRepository {
    fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn list(&self) -> Result<Vec<Competencia>, Error> {
        sqlx::query_as::<_, Competencia>("SELECT * FROM competencias ORDER BY fecha ASC")
            .fetch_all(self.db_conn.get_pool())
            .await
    }

    async fn find(&self, id: i32) -> Result<Option<Competencia>, Error> {
        sqlx::query_as::<_, Competencia>("SELECT * FROM competencias WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db_conn.get_pool())
            .await
    }

    async fn create(&self, payload: &CompetenciaDto) -> Result<Competencia, Error> {
        sqlx::query_as::<_, Competencia>(
            "INSERT INTO competencias (nombre, fecha, ubicacion, tipo, organizador) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&payload.nombre)
        .bind(payload.fecha)
        .bind(&payload.ubicacion)
        .bind(&payload.tipo)
        .bind(&payload.organizador)
        .fetch_one(self.db_conn.get_pool())
        .await
    }

    async fn update(&self, id: i32, payload: &CompetenciaDto) -> Result<Option<Competencia>, Error> {
        sqlx::query_as::<_, Competencia>(
            "UPDATE competencias SET nombre = $1, fecha = $2, ubicacion = $3, tipo = $4, \
             organizador = $5 WHERE id = $6 RETURNING *",
        )
        .bind(&payload.nombre)
        .bind(payload.fecha)
        .bind(&payload.ubicacion)
        .bind(&payload.tipo)
        .bind(&payload.organizador)
        .bind(id)
        .fetch_optional(self.db_conn.get_pool())
        .await
    }

    async fn delete(&self, id: i32) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM competencias WHERE id = $1")
            .bind(id)
            .execute(self.db_conn.get_pool())
            .await?;
        Ok(result.rows_affected())
    }
}
