use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct Entrenamiento {
    pub id: i32,
    pub atleta_id: i32,
    pub fecha: NaiveDate,
    pub descripcion: String,
    pub duracion: i32,
    pub intensidad: String,
}
