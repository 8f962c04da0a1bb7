use crate::config::database::Database;
use crate::error::token_error::TokenError;
use crate::repository::usuario_repository::{UsuarioRepository, UsuarioRepositoryTrait};
use crate::service::token_service::{TokenService, TokenServiceTrait};
use std::sync::Arc;

/// Estado del middleware de autenticación
#[derive(Clone)]
pub struct TokenState {
    pub(crate) token_service: TokenService,
    pub(crate) usuario_repo: UsuarioRepository,
}

impl TokenState {
    pub fn new(db_conn: &Arc<Database>) -> Result<Self, TokenError> {
        Ok(Self {
            token_service: TokenService::new()?,
            usuario_repo: UsuarioRepository::new(db_conn),
        })
    }
}
