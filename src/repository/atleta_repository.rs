use crate::config::database::{Database, DatabaseTrait};
use crate::dto::atleta_dto::AtletaDto;
use crate::entity::atleta::Atleta;
use async_trait::async_trait;
use sqlx::Error;
use std::sync::Arc;

#[derive(Clone)]
pub struct AtletaRepository {
    db_conn: Arc<Database>,
}

#[async_trait]
pub trait AtletaRepositoryTrait {
    fn new(db_conn: &Arc<Database>) -> Self;
    async fn list(&self) -> Result<Vec<Atleta>, Error>;
    async fn find(&self, id: i32) -> Result<Option<Atleta>, Error>;
    async fn create(&self, payload: &AtletaDto) -> Result<Atleta, Error>;
    async fn update(&self, id: i32, payload: &AtletaDto) -> Result<Option<Atleta>, Error>;
    async fn delete(&self, id: i32) -> Result<u64, Error>;
}

#[async_trait]
impl AtletaRepositoryTrait for AtletaRepository {
    fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn list(&self) -> Result<Vec<Atleta>, Error> {
        sqlx::query_as::<_, Atleta>("SELECT * FROM atletas ORDER BY id ASC")
            .fetch_all(self.db_conn.get_pool())
            .await
    }

    async fn find(&self, id: i32) -> Result<Option<Atleta>, Error> {
        sqlx::query_as::<_, Atleta>("SELECT * FROM atletas WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db_conn.get_pool())
            .await
    }

    async fn create(&self, payload: &AtletaDto) -> Result<Atleta, Error> {
        sqlx::query_as::<_, Atleta>(
            "INSERT INTO atletas (nombre, apellido, fecha_nacimiento, genero, pais, ciudad, email, telefono, peso) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(&payload.nombre)
        .bind(&payload.apellido)
        .bind(payload.fecha_nacimiento)
        .bind(&payload.genero)
        .bind(&payload.pais)
        .bind(&payload.ciudad)
        .bind(&payload.email)
        .bind(&payload.telefono)
        .bind(payload.peso)
        .fetch_one(self.db_conn.get_pool())
        .await
    }

    async fn update(&self, id: i32, payload: &AtletaDto) -> Result<Option<Atleta>, Error> {
        sqlx::query_as::<_, Atleta>(
            "UPDATE atletas SET nombre = $1, apellido = $2, fecha_nacimiento = $3, genero = $4, \
             pais = $5, ciudad = $6, email = $7, telefono = $8, peso = $9 WHERE id = $10 RETURNING *",
        )
        .bind(&payload.nombre)
        .bind(&payload.apellido)
        .bind(payload.fecha_nacimiento)
        .bind(&payload.genero)
        .bind(&payload.pais)
        .bind(&payload.ciudad)
        .bind(&payload.email)
        .bind(&payload.telefono)
        .bind(payload.peso)
        .bind(id)
        .fetch_optional(self.db_conn.get_pool())
        .await
    }

    async fn delete(&self, id: i32) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM atletas WHERE id = $1")
            .bind(id)
            .execute(self.db_conn.get_pool())
            .await?;
        Ok(result.rows_affected())
    }
}
