use crate::config::database::Database;
use crate::dto::resultado_dto::{RendimientoDto, ResultadoDto};
use crate::entity::atleta::Atleta;
use crate::entity::resultado::Resultado;
use crate::error::ApiError;
use crate::repository::atleta_repository::{AtletaRepository, AtletaRepositoryTrait};
use crate::repository::resultado_repository::{ResultadoRepository, ResultadoRepositoryTrait};
use crate::service::wilks;
use std::sync::Arc;

#[derive(Clone)]
pub struct ResultadoService {
    resultado_repo: ResultadoRepository,
    atleta_repo: AtletaRepository,
}

impl ResultadoService {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            resultado_repo: ResultadoRepository::new(db_conn),
            atleta_repo: AtletaRepository::new(db_conn),
        }
    }

    pub async fn listar(&self) -> Result<Vec<Resultado>, ApiError> {
        Ok(self.resultado_repo.list().await?)
    }

    pub async fn crear(&self, payload: ResultadoDto) -> Result<Resultado, ApiError> {
        let atleta = self.atleta(payload.atleta_id).await?;
        let resultado = construir_resultado(0, &payload, &atleta);
        Ok(self.resultado_repo.create(&resultado).await?)
    }

    pub async fn actualizar(&self, id: i32, payload: ResultadoDto) -> Result<Resultado, ApiError> {
        let atleta = self.atleta(payload.atleta_id).await?;
        let resultado = construir_resultado(id, &payload, &atleta);
        self.resultado_repo
            .update(id, &resultado)
            .await?
            .ok_or_else(|| ApiError::NotFound("Resultado no encontrado.".to_string()))
    }

    pub async fn eliminar(&self, id: i32) -> Result<(), ApiError> {
        let eliminados = self.resultado_repo.delete(id).await?;
        if eliminados == 0 {
            return Err(ApiError::NotFound("Resultado no encontrado.".to_string()));
        }
        Ok(())
    }

    /// Serie histórica del atleta, fechada por la competencia de cada
    /// evento en que participó.
    pub async fn rendimiento(&self, atleta_id: i32) -> Result<Vec<RendimientoDto>, ApiError> {
        let atleta = self.atleta(atleta_id).await?;
        let historial = self.resultado_repo.list_by_atleta_con_fecha(atleta_id).await?;

        Ok(historial
            .into_iter()
            .map(|punto| RendimientoDto {
                fecha: punto.fecha,
                sentadilla: punto.sentadilla,
                press_banca: punto.press_banca,
                peso_muerto: punto.peso_muerto,
                total: punto.total,
                peso_corporal: atleta.peso,
                wilks: punto.wilks_score,
            })
            .collect())
    }

    async fn atleta(&self, atleta_id: i32) -> Result<Atleta, ApiError> {
        self.atleta_repo
            .find(atleta_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Atleta no encontrado.".to_string()))
    }
}

/// El total y el Wilks se derivan siempre en el servidor a partir de los
/// tres levantamientos y el peso corporal del atleta.
fn construir_resultado(id: i32, payload: &ResultadoDto, atleta: &Atleta) -> Resultado {
    let total = payload.sentadilla + payload.press_banca + payload.peso_muerto;
    let wilks_score = wilks::puntaje(total, atleta.peso, &atleta.genero);

    Resultado {
        id,
        evento_id: payload.evento_id,
        atleta_id: payload.atleta_id,
        sentadilla: payload.sentadilla,
        press_banca: payload.press_banca,
        peso_muerto: payload.peso_muerto,
        categoria_peso: payload.categoria_peso,
        total,
        wilks_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn atleta(genero: &str, peso: f64) -> Atleta {
        Atleta {
            id: 1,
            nombre: "Juan".to_string(),
            apellido: "Pérez".to_string(),
            fecha_nacimiento: NaiveDate::from_ymd_opt(1995, 3, 15).unwrap(),
            genero: genero.to_string(),
            pais: "México".to_string(),
            ciudad: "Ciudad de México".to_string(),
            email: "juan.perez@email.com".to_string(),
            telefono: "+52 555 123 4567".to_string(),
            peso,
        }
    }

    fn payload() -> ResultadoDto {
        ResultadoDto {
            evento_id: 1,
            atleta_id: 1,
            sentadilla: 200.0,
            press_banca: 120.0,
            peso_muerto: 220.0,
            categoria_peso: 83.0,
        }
    }

    #[test]
    fn test_total_es_la_suma_de_los_levantamientos() {
        let resultado = construir_resultado(0, &payload(), &atleta("Masculino", 80.0));
        assert_eq!(resultado.total, 540.0);
    }

    #[test]
    fn test_wilks_usa_peso_y_genero_del_atleta() {
        let resultado = construir_resultado(0, &payload(), &atleta("Masculino", 80.0));
        let esperado = wilks::puntaje(540.0, 80.0, "Masculino");
        assert_eq!(resultado.wilks_score, esperado);

        let resultado_femenino = construir_resultado(0, &payload(), &atleta("Femenino", 60.0));
        assert!(resultado_femenino.wilks_score > resultado.wilks_score);
    }
}
