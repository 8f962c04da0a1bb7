pub mod atleta_dto;
pub mod auth_dto;
pub mod competencia_dto;
pub mod entrenador_dto;
pub mod entrenamiento_dto;
pub mod plan_dto;
pub mod resultado_dto;
pub mod rol_dto;
pub mod usuario_dto;
