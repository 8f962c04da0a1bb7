use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct LoginDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email y contraseña son requeridos"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Email y contraseña son requeridos"))]
    pub contrasena: String,
}

// The password must never reach the logs
impl std::fmt::Debug for LoginDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginDto").field("email", &self.email).finish()
    }
}

/// User summary returned by the login endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UsuarioAuthDto {
    pub id: i32,
    pub email: String,
    pub rol: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponseDto {
    pub token: String,
    pub user: UsuarioAuthDto,
}

/// Claims carried by the session token
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenClaimsDto {
    pub sub: i32,
    pub email: String,
    pub rol: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct SessionRequestDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "Token no proporcionado."))]
    pub token: String,
}

impl std::fmt::Debug for SessionRequestDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRequestDto").finish()
    }
}
