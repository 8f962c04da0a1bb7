use crate::config::database::Database;
use crate::repository::atleta_repository::{AtletaRepository, AtletaRepositoryTrait};
use crate::repository::competencia_repository::{CompetenciaRepository, CompetenciaRepositoryTrait};
use crate::repository::entrenador_repository::{EntrenadorRepository, EntrenadorRepositoryTrait};
use crate::repository::entrenamiento_repository::{EntrenamientoRepository, EntrenamientoRepositoryTrait};
use crate::repository::evento_repository::{EventoRepository, EventoRepositoryTrait};
use crate::service::resultado_service::ResultadoService;
use std::sync::Arc;

/// Estado compartido por los recursos deportivos de la federación
#[derive(Clone)]
pub struct FederacionState {
    pub(crate) atleta_repo: AtletaRepository,
    pub(crate) entrenador_repo: EntrenadorRepository,
    pub(crate) competencia_repo: CompetenciaRepository,
    pub(crate) evento_repo: EventoRepository,
    pub(crate) entrenamiento_repo: EntrenamientoRepository,
    pub(crate) resultado_service: ResultadoService,
}

impl FederacionState {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            atleta_repo: AtletaRepository::new(db_conn),
            entrenador_repo: EntrenadorRepository::new(db_conn),
            competencia_repo: CompetenciaRepository::new(db_conn),
            evento_repo: EventoRepository::new(db_conn),
            entrenamiento_repo: EntrenamientoRepository::new(db_conn),
            resultado_service: ResultadoService::new(db_conn),
        }
    }
}
