pub mod access_control;
pub mod auth_service;
pub mod plan_service;
pub mod resultado_service;
pub mod session_service;
pub mod token_service;
pub mod usuario_service;
pub mod wilks;
