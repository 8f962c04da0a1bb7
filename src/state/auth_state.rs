use crate::config::database::Database;
use crate::error::token_error::TokenError;
use crate::service::auth_service::AuthService;
use crate::service::token_service::{TokenService, TokenServiceTrait};
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthState {
    pub(crate) auth_service: AuthService,
    /// La cookie de sesión hereda la vida del token
    pub(crate) token_ttl_seconds: i64,
}

impl AuthState {
    pub fn new(db_conn: &Arc<Database>) -> Result<Self, TokenError> {
        let token_service = TokenService::new()?;
        Ok(Self {
            token_ttl_seconds: token_service.ttl_seconds(),
            auth_service: AuthService::new(db_conn, token_service),
        })
    }
}
