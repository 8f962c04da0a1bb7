use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct Rol {
    pub id: i32,
    pub nombre: String,
    pub permisos: Option<serde_json::Value>,
}
