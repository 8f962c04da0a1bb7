use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct Entrenador {
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    pub experiencia: String,
    pub email: String,
    pub telefono: String,
}
