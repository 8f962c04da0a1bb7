pub mod atleta_handler;
pub mod auth_handler;
pub mod competencia_handler;
pub mod entrenador_handler;
pub mod entrenamiento_handler;
pub mod evento_handler;
pub mod health_handler;
pub mod plan_handler;
pub mod rendimiento_handler;
pub mod resultado_handler;
pub mod rol_handler;
pub mod usuario_handler;
