use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of the `usuarios` table. The password hash never leaves the
/// backend; read DTOs strip it before serialization.
#[derive(Clone, Deserialize, Serialize, sqlx::FromRow)]
pub struct Usuario {
    pub id: i32,
    pub nombre_usuario: String,
    pub email: String,
    pub contrasena_hash: String,
    pub rol_id: Option<i32>,
    pub activo: bool,
    pub ultimo_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Usuario joined with its role name and permission data, as loaded by
/// the login flow and the auth middleware.
#[derive(Clone, Deserialize, Serialize, sqlx::FromRow)]
pub struct UsuarioConRol {
    pub id: i32,
    pub nombre_usuario: String,
    pub email: String,
    pub contrasena_hash: String,
    pub rol_id: Option<i32>,
    pub activo: bool,
    pub ultimo_login: Option<DateTime<Utc>>,
    pub rol_nombre: Option<String>,
    pub permisos: Option<serde_json::Value>,
}

/// Listing row for the usuarios admin table
#[derive(Clone, Deserialize, Serialize, sqlx::FromRow)]
pub struct UsuarioResumen {
    pub id: i32,
    pub nombre_usuario: String,
    pub email: String,
    pub activo: bool,
    pub rol_nombre: Option<String>,
}
