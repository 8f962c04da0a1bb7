use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Error de base de datos: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("{0}")]
    SomethingWentWrong(String),
}

/// Postgres unique-violation (SQLSTATE 23505), surfaced as 409 by callers
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    has_code(error, "23505")
}

/// Postgres foreign-key violation (SQLSTATE 23503)
pub fn is_foreign_key_violation(error: &sqlx::Error) -> bool {
    has_code(error, "23503")
}

fn has_code(error: &sqlx::Error, code: &str) -> bool {
    match error {
        sqlx::Error::Database(db) => db.code().as_deref() == Some(code),
        _ => false,
    }
}
