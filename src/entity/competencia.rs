use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct Competencia {
    pub id: i32,
    pub nombre: String,
    pub fecha: NaiveDate,
    pub ubicacion: String,
    pub tipo: String,
    pub organizador: String,
}

/// Prueba individual dentro de una competencia (p. ej. "Sentadilla")
#[derive(Clone, Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct Evento {
    pub id: i32,
    pub competencia_id: i32,
    pub nombre: String,
    pub categoria: String,
    pub fecha: NaiveDate,
}
