use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Row of the `atletas` table. `peso` is the current bodyweight in kg,
/// used for the Wilks computation.
#[derive(Clone, Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct Atleta {
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    pub fecha_nacimiento: NaiveDate,
    pub genero: String,
    pub pais: String,
    pub ciudad: String,
    pub email: String,
    pub telefono: String,
    pub peso: f64,
}
