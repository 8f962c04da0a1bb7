use crate::config::database::{Database, DatabaseTrait};
use crate::entity::plan::{PlanAlimentacion, PlanEntrenamiento};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::Error;
use std::sync::Arc;

#[derive(Clone)]
pub struct PlanRepository {
    db_conn: Arc<Database>,
}

pub struct NuevoPlanEntrenamiento<'a> {
    pub atleta_id: i32,
    pub objetivo: &'a str,
    pub nivel: &'a str,
    pub frecuencia: i32,
    pub duracion_semanas: i32,
    pub plan_detallado: &'a str,
    pub ejercicios: &'a serde_json::Value,
    pub fecha_creacion: NaiveDate,
}

pub struct NuevoPlanAlimentacion<'a> {
    pub atleta_id: i32,
    pub objetivo: &'a str,
    pub peso_actual: f64,
    pub peso_objetivo: Option<f64>,
    pub actividad_nivel: &'a str,
    pub restricciones: Option<&'a str>,
    pub duracion_semanas: i32,
    pub plan_detallado: &'a str,
    pub calorias_diarias: i32,
    pub macros: &'a serde_json::Value,
    pub comidas: &'a serde_json::Value,
    pub fecha_creacion: NaiveDate,
}

#[async_trait]
pub trait PlanRepositoryTrait {
    fn new(db_conn: &Arc<Database>) -> Self;
    async fn list_entrenamiento_by_atleta(&self, atleta_id: i32) -> Result<Vec<PlanEntrenamiento>, Error>;
    async fn list_alimentacion_by_atleta(&self, atleta_id: i32) -> Result<Vec<PlanAlimentacion>, Error>;
    async fn store_entrenamiento(&self, plan: NuevoPlanEntrenamiento<'_>) -> Result<PlanEntrenamiento, Error>;
    async fn store_alimentacion(&self, plan: NuevoPlanAlimentacion<'_>) -> Result<PlanAlimentacion, Error>;
}

#[async_trait]
impl PlanRepositoryTrait for PlanRepository {
    fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn list_entrenamiento_by_atleta(&self, atleta_id: i32) -> Result<Vec<PlanEntrenamiento>, Error> {
        sqlx::query_as::<_, PlanEntrenamiento>(
            "SELECT * FROM planes_entrenamiento WHERE atleta_id = $1 ORDER BY fecha_creacion DESC",
        )
        .bind(atleta_id)
        .fetch_all(self.db_conn.get_pool())
        .await
    }

    async fn list_alimentacion_by_atleta(&self, atleta_id: i32) -> Result<Vec<PlanAlimentacion>, Error> {
        sqlx::query_as::<_, PlanAlimentacion>(
            "SELECT * FROM planes_alimentacion WHERE atleta_id = $1 ORDER BY fecha_creacion DESC",
        )
        .bind(atleta_id)
        .fetch_all(self.db_conn.get_pool())
        .await
    }

    async fn store_entrenamiento(&self, plan: NuevoPlanEntrenamiento<'_>) -> Result<PlanEntrenamiento, Error> {
        sqlx::query_as::<_, PlanEntrenamiento>(
            "INSERT INTO planes_entrenamiento (atleta_id, objetivo, nivel, frecuencia, \
             duracion_semanas, plan_detallado, ejercicios, fecha_creacion) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(plan.atleta_id)
        .bind(plan.objetivo)
        .bind(plan.nivel)
        .bind(plan.frecuencia)
        .bind(plan.duracion_semanas)
        .bind(plan.plan_detallado)
        .bind(plan.ejercicios)
        .bind(plan.fecha_creacion)
        .fetch_one(self.db_conn.get_pool())
        .await
    }

    async fn store_alimentacion(&self, plan: NuevoPlanAlimentacion<'_>) -> Result<PlanAlimentacion, Error> {
        sqlx::query_as::<_, PlanAlimentacion>(
            "INSERT INTO planes_alimentacion (atleta_id, objetivo, peso_actual, peso_objetivo, \
             actividad_nivel, restricciones, duracion_semanas, plan_detallado, calorias_diarias, \
             macros, comidas, fecha_creacion) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) RETURNING *",
        )
        .bind(plan.atleta_id)
        .bind(plan.objetivo)
        .bind(plan.peso_actual)
        .bind(plan.peso_objetivo)
        .bind(plan.actividad_nivel)
        .bind(plan.restricciones)
        .bind(plan.duracion_semanas)
        .bind(plan.plan_detallado)
        .bind(plan.calorias_diarias)
        .bind(plan.macros)
        .bind(plan.comidas)
        .bind(plan.fecha_creacion)
        .fetch_one(self.db_conn.get_pool())
        .await
    }
}
