pub mod atleta;
pub mod competencia;
pub mod entrenador;
pub mod entrenamiento;
pub mod plan;
pub mod resultado;
pub mod rol;
pub mod usuario;
