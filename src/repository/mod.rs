pub mod atleta_repository;
pub mod competencia_repository;
pub mod entrenador_repository;
pub mod entrenamiento_repository;
pub mod evento_repository;
pub mod plan_repository;
pub mod resultado_repository;
pub mod rol_repository;
pub mod usuario_repository;
