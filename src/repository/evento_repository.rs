use crate::config::database::{Database, DatabaseTrait};
use crate::dto::competencia_dto::EventoDto;
use crate::entity::competencia::Evento;
use async_trait::async_trait;
use sqlx::Error;
use std::sync::Arc;

#[derive(Clone)]
pub struct EventoRepository {
    db_conn: Arc<Database>,
}

#[async_trait]
pub trait EventoRepositoryTrait {
    fn new(db_conn: &Arc<Database>) -> Self;
    async fn list(&self) -> Result<Vec<Evento>, Error>;
    async fn find(&self, id: i32) -> Result<Option<Evento>, Error>;
    async fn create(&self, payload: &EventoDto) -> Result<Evento, Error>;
    async fn update(&self, id: i32, payload: &EventoDto) -> Result<Option<Evento>, Error>;
    async fn delete(&self, id: i32) -> Result<u64, Error>;
}

#[async_trait]
impl EventoRepositoryTrait for EventoRepository {
    fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn list(&self) -> Result<Vec<Evento>, Error> {
        sqlx::query_as::<_, Evento>("SELECT * FROM eventos ORDER BY fecha ASC")
            .fetch_all(self.db_conn.get_pool())
            .await
    }

    async fn find(&self, id: i32) -> Result<Option<Evento>, Error> {
        sqlx::query_as::<_, Evento>("SELECT * FROM eventos WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db_conn.get_pool())
            .await
    }

    async fn create(&self, payload: &EventoDto) -> Result<Evento, Error> {
        sqlx::query_as::<_, Evento>(
            "INSERT INTO eventos (competencia_id, nombre, categoria, fecha) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(payload.competencia_id)
        .bind(&payload.nombre)
        .bind(&payload.categoria)
        .bind(payload.fecha)
        .fetch_one(self.db_conn.get_pool())
        .await
    }

    async fn update(&self, id: i32, payload: &EventoDto) -> Result<Option<Evento>, Error> {
        sqlx::query_as::<_, Evento>(
            "UPDATE eventos SET competencia_id = $1, nombre = $2, categoria = $3, fecha = $4 \
             WHERE id = $5 RETURNING *",
        )
        .bind(payload.competencia_id)
        .bind(&payload.nombre)
        .bind(&payload.categoria)
        .bind(payload.fecha)
        .bind(id)
        .fetch_optional(self.db_conn.get_pool())
        .await
    }

    async fn delete(&self, id: i32) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM eventos WHERE id = $1")
            .bind(id)
            .execute(self.db_conn.get_pool())
            .await?;
        Ok(result.rows_affected())
    }
}
