use crate::config::database::Database;
use crate::config::logging::secure_log;
use crate::dto::auth_dto::{LoginDto, LoginResponseDto, UsuarioAuthDto};
use crate::error::auth_error::AuthError;
use crate::error::ApiError;
use crate::repository::usuario_repository::{UsuarioRepository, UsuarioRepositoryTrait};
use crate::service::token_service::{TokenService, TokenServiceTrait};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AuthService {
    usuario_repo: UsuarioRepository,
    token_service: TokenService,
}

impl AuthService {
    pub fn new(db_conn: &Arc<Database>, token_service: TokenService) -> Self {
        Self {
            usuario_repo: UsuarioRepository::new(db_conn),
            token_service,
        }
    }

    /// Login flow: lookup, active check, password verify, last-login
    /// touch, token issue. Every credential failure collapses into the
    /// same outward 401; the cause stays in the logs.
    pub async fn login(&self, payload: LoginDto) -> Result<LoginResponseDto, ApiError> {
        let usuario = self
            .usuario_repo
            .find_by_email_con_rol(&payload.email)
            .await?
            .ok_or_else(|| {
                warn!("Login fallido - usuario inexistente: {}", payload.email);
                AuthError::InvalidCredentials
            })?;

        if !usuario.activo {
            warn!("Login fallido - usuario inactivo: {}", payload.email);
            return Err(AuthError::InvalidCredentials.into());
        }

        if !verify_password(&payload.contrasena, &usuario.contrasena_hash) {
            warn!("Login fallido - contraseña incorrecta: {}", payload.email);
            return Err(AuthError::InvalidCredentials.into());
        }

        self.usuario_repo.touch_ultimo_login(usuario.id).await?;

        let token = self.token_service.issue(&usuario)?;
        info!("Login exitoso para el usuario: {}", usuario.id);

        Ok(LoginResponseDto {
            token,
            user: UsuarioAuthDto {
                id: usuario.id,
                email: usuario.email,
                rol: usuario.rol_nombre,
            },
        })
    }
}

/// A malformed stored hash answers `false` instead of an error so the
/// caller cannot distinguish it from a wrong password.
pub fn verify_password(contrasena: &str, contrasena_hash: &str) -> bool {
    match bcrypt::verify(contrasena, contrasena_hash) {
        Ok(valida) => valida,
        Err(e) => {
            secure_log::secure_error!("Error del verificador de contraseñas", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Low cost keeps the test fast; production cost comes from BCRYPT_COST
    fn hash(contrasena: &str) -> String {
        bcrypt::hash(contrasena, 4).unwrap()
    }

    #[test]
    fn test_correct_password_verifies() {
        let almacenado = hash("password");
        assert!(verify_password("password", &almacenado));
    }

    #[test]
    fn test_single_character_mutation_fails() {
        let almacenado = hash("password");
        assert!(!verify_password("passw0rd", &almacenado));
        assert!(!verify_password("Password", &almacenado));
        assert!(!verify_password("password ", &almacenado));
    }

    #[test]
    fn test_malformed_hash_is_just_false() {
        // verify_password logs via secure_error! on the bcrypt error path,
        // which reads the global logging config; initialize it for the test
        // binary so the call is runnable.
        crate::config::logging::init();
        assert!(!verify_password("password", "esto-no-es-un-hash"));
    }

    #[test]
    fn test_distinct_hashes_same_password() {
        // Salted hashing: two hashes of the same password differ but
        // both verify
        let a = hash("password");
        let b = hash("password");
        assert_ne!(a, b);
        assert!(verify_password("password", &a));
        assert!(verify_password("password", &b));
    }
}
