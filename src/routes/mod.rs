pub mod atletas;
pub mod auth;
pub mod competencias;
pub mod entrenadores;
pub mod entrenamientos;
pub mod eventos;
pub mod planes;
pub mod rendimiento;
pub mod resultados;
pub mod roles;
pub mod root;
pub mod usuarios;
