use crate::config::parameter;
use crate::dto::auth_dto::TokenClaimsDto;
use crate::entity::usuario::UsuarioConRol;
use crate::error::token_error::TokenError;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::warn;

#[derive(Clone)]
pub struct TokenService {
    secret: String,
    ttl_seconds: i64,
}

pub trait TokenServiceTrait {
    fn new() -> Result<Self, TokenError>
    where
        Self: Sized;
    fn with_secret(secret: &str, ttl_seconds: i64) -> Self
    where
        Self: Sized;
    fn issue(&self, usuario: &UsuarioConRol) -> Result<String, TokenError>;
    fn verify(&self, token: &str) -> Result<TokenClaimsDto, TokenError>;
    fn ttl_seconds(&self) -> i64;
}

impl TokenServiceTrait for TokenService {
    /// Fails when JWT_SECRET is absent or empty. Callers treat this as a
    /// fatal startup condition, not a per-request error.
    fn new() -> Result<Self, TokenError> {
        let secret = parameter::get_optional("JWT_SECRET").ok_or(TokenError::MissingSecret)?;

        Ok(Self {
            secret,
            ttl_seconds: parameter::get_i64("TOKEN_TTL_SECONDS"),
        })
    }

    fn with_secret(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            secret: secret.to_string(),
            ttl_seconds,
        }
    }

    fn issue(&self, usuario: &UsuarioConRol) -> Result<String, TokenError> {
        let iat = chrono::Utc::now().timestamp();
        let exp = chrono::Utc::now()
            .checked_add_signed(chrono::Duration::seconds(self.ttl_seconds))
            .ok_or_else(|| TokenError::CreationError("desbordamiento al calcular la expiración".to_string()))?
            .timestamp();

        let claims = TokenClaimsDto {
            sub: usuario.id,
            email: usuario.email.clone(),
            rol: usuario.rol_nombre.clone(),
            iat,
            exp,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|e| TokenError::CreationError(e.to_string()))
    }

    /// Malformed token, bad signature and expiry all collapse into the
    /// same outward classification.
    fn verify(&self, token: &str) -> Result<TokenClaimsDto, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        decode::<TokenClaimsDto>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| {
            warn!("Token rechazado: {:?}", e.kind());
            TokenError::InvalidOrExpired
        })
    }

    fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "secreto-de-pruebas-suficientemente-largo";

    fn usuario(rol: Option<&str>) -> UsuarioConRol {
        UsuarioConRol {
            id: 7,
            nombre_usuario: "admin".to_string(),
            email: "admin@powerlifting.com".to_string(),
            contrasena_hash: "$2b$04$irrelevante".to_string(),
            rol_id: Some(1),
            activo: true,
            ultimo_login: None,
            rol_nombre: rol.map(|r| r.to_string()),
            permisos: None,
        }
    }

    #[test]
    fn test_issue_verify_round_trip() {
        let service = TokenService::with_secret(TEST_SECRET, 3600);
        let token = service.issue(&usuario(Some("Administrador"))).unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.email, "admin@powerlifting.com");
        assert_eq!(claims.rol.as_deref(), Some("Administrador"));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = TokenService::with_secret(TEST_SECRET, -60);
        let token = service.issue(&usuario(None)).unwrap();

        assert!(matches!(service.verify(&token), Err(TokenError::InvalidOrExpired)));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let issuer = TokenService::with_secret(TEST_SECRET, 3600);
        let verifier = TokenService::with_secret("otro-secreto-distinto-al-original", 3600);
        let token = issuer.issue(&usuario(None)).unwrap();

        assert!(matches!(verifier.verify(&token), Err(TokenError::InvalidOrExpired)));
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let service = TokenService::with_secret(TEST_SECRET, 3600);

        assert!(matches!(service.verify("no-es-un-jwt"), Err(TokenError::InvalidOrExpired)));
    }
}
