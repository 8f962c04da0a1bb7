use crate::config::database::Database;
use crate::repository::rol_repository::{RolRepository, RolRepositoryTrait};
use crate::service::usuario_service::UsuarioService;
use std::sync::Arc;

/// Estado de la administración de usuarios y roles
#[derive(Clone)]
pub struct UsuarioState {
    pub(crate) usuario_service: UsuarioService,
    pub(crate) rol_repo: RolRepository,
}

impl UsuarioState {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            usuario_service: UsuarioService::new(db_conn),
            rol_repo: RolRepository::new(db_conn),
        }
    }
}
