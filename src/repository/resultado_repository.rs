use crate::config::database::{Database, DatabaseTrait};
use crate::entity::resultado::{Resultado, ResultadoConFecha};
use async_trait::async_trait;
use sqlx::Error;
use std::sync::Arc;

#[derive(Clone)]
pub struct ResultadoRepository {
    db_conn: Arc<Database>,
}

#[async_trait]
pub trait ResultadoRepositoryTrait {
    fn new(db_conn: &Arc<Database>) -> Self;
    async fn list(&self) -> Result<Vec<Resultado>, Error>;
    async fn find(&self, id: i32) -> Result<Option<Resultado>, Error>;
    async fn create(&self, resultado: &Resultado) -> Result<Resultado, Error>;
    async fn update(&self, id: i32, resultado: &Resultado) -> Result<Option<Resultado>, Error>;
    async fn delete(&self, id: i32) -> Result<u64, Error>;
    /// Historial de un atleta, fechado por la competencia de cada evento
    async fn list_by_atleta_con_fecha(&self, atleta_id: i32) -> Result<Vec<ResultadoConFecha>, Error>;
}

#[async_trait]
impl ResultadoRepositoryTrait for ResultadoRepository {
    fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn list(&self) -> Result<Vec<Resultado>, Error> {
        sqlx::query_as::<_, Resultado>("SELECT * FROM resultados ORDER BY id ASC")
            .fetch_all(self.db_conn.get_pool())
            .await
    }

    async fn find(&self, id: i32) -> Result<Option<Resultado>, Error> {
        sqlx::query_as::<_, Resultado>("SELECT * FROM resultados WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db_conn.get_pool())
            .await
    }

    async fn create(&self, resultado: &Resultado) -> Result<Resultado, Error> {
        sqlx::query_as::<_, Resultado>(
            "INSERT INTO resultados (evento_id, atleta_id, sentadilla, press_banca, peso_muerto, \
             categoria_peso, total, wilks_score) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(resultado.evento_id)
        .bind(resultado.atleta_id)
        .bind(resultado.sentadilla)
        .bind(resultado.press_banca)
        .bind(resultado.peso_muerto)
        .bind(resultado.categoria_peso)
        .bind(resultado.total)
        .bind(resultado.wilks_score)
        .fetch_one(self.db_conn.get_pool())
        .await
    }

    async fn update(&self, id: i32, resultado: &Resultado) -> Result<Option<Resultado>, Error> {
        sqlx::query_as::<_, Resultado>(
            "UPDATE resultados SET evento_id = $1, atleta_id = $2, sentadilla = $3, \
             press_banca = $4, peso_muerto = $5, categoria_peso = $6, total = $7, \
             wilks_score = $8 WHERE id = $9 RETURNING *",
        )
        .bind(resultado.evento_id)
        .bind(resultado.atleta_id)
        .bind(resultado.sentadilla)
        .bind(resultado.press_banca)
        .bind(resultado.peso_muerto)
        .bind(resultado.categoria_peso)
        .bind(resultado.total)
        .bind(resultado.wilks_score)
        .bind(id)
        .fetch_optional(self.db_conn.get_pool())
        .await
    }

    async fn delete(&self, id: i32) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM resultados WHERE id = $1")
            .bind(id)
            .execute(self.db_conn.get_pool())
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_by_atleta_con_fecha(&self, atleta_id: i32) -> Result<Vec<ResultadoConFecha>, Error> {
        sqlx::query_as::<_, ResultadoConFecha>(
            "SELECT c.fecha, r.sentadilla, r.press_banca, r.peso_muerto, r.total, r.wilks_score \
             FROM resultados r \
             JOIN eventos e ON r.evento_id = e.id \
             JOIN competencias c ON e.competencia_id = c.id \
             WHERE r.atleta_id = $1 ORDER BY c.fecha ASC",
        )
        .bind(atleta_id)
        .fetch_all(self.db_conn.get_pool())
        .await
    }
}
