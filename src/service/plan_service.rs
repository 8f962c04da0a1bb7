use crate::config::database::Database;
use crate::config::logging::secure_log;
use crate::config::parameter;
use crate::dto::plan_dto::{
    PlanAlimentacionContenido, PlanAlimentacionRequestDto, PlanEntrenamientoContenido,
    PlanEntrenamientoRequestDto,
};
use crate::entity::plan::{PlanAlimentacion, PlanEntrenamiento};
use crate::error::ApiError;
use crate::repository::atleta_repository::{AtletaRepository, AtletaRepositoryTrait};
use crate::repository::plan_repository::{
    NuevoPlanAlimentacion, NuevoPlanEntrenamiento, PlanRepository, PlanRepositoryTrait,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

const SYSTEM_ENTRENADOR: &str = "Eres un entrenador experto en powerlifting con 15 años de \
     experiencia. Siempre respondes en español y con información técnicamente correcta.";

const SYSTEM_NUTRICIONISTA: &str = "Eres un nutricionista deportivo con especialización en \
     powerlifting y 10 años de experiencia. Siempre respondes en español con información \
     nutricional precisa.";

/// Cliente mínimo para un endpoint de chat-completions compatible con
/// OpenAI. La generación de texto en sí queda delegada al servicio
/// externo.
#[derive(Clone)]
pub struct LlmClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl LlmClient {
    pub fn from_config() -> Self {
        // La generación puede tardar decenas de segundos; el timeout solo
        // evita que un endpoint muerto retenga la conexión para siempre.
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(90))
            .build()
            .expect("no se pudo construir el cliente HTTP");

        Self {
            http,
            api_key: parameter::get_optional("OPENAI_API_KEY"),
            model: parameter::get("OPENAI_MODEL"),
            base_url: parameter::get("OPENAI_BASE_URL"),
        }
    }

    async fn generate(&self, system: &str, prompt: &str) -> Result<String, ApiError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ApiError::Internal("OPENAI_API_KEY no está definido".to_string())
        })?;

        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": prompt },
            ],
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                secure_log::secure_error!("Error al llamar al generador de planes", e);
                ApiError::Internal("El generador de planes no está disponible".to_string())
            })?;

        if !response.status().is_success() {
            secure_log::secure_error!("El generador de planes respondió con error", response.status());
            return Err(ApiError::Internal("El generador de planes no está disponible".to_string()));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            secure_log::secure_error!("Respuesta ilegible del generador de planes", e);
            ApiError::Internal("El generador de planes no está disponible".to_string())
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ApiError::Internal("El generador de planes no devolvió contenido".to_string()))
    }
}

#[derive(Clone)]
pub struct PlanService {
    plan_repo: PlanRepository,
    atleta_repo: AtletaRepository,
    llm: LlmClient,
}

impl PlanService {
    pub fn new(db_conn: &Arc<Database>, llm: LlmClient) -> Self {
        Self {
            plan_repo: PlanRepository::new(db_conn),
            atleta_repo: AtletaRepository::new(db_conn),
            llm,
        }
    }

    pub async fn listar_planes_entrenamiento(&self, atleta_id: i32) -> Result<Vec<PlanEntrenamiento>, ApiError> {
        Ok(self.plan_repo.list_entrenamiento_by_atleta(atleta_id).await?)
    }

    pub async fn listar_planes_alimentacion(&self, atleta_id: i32) -> Result<Vec<PlanAlimentacion>, ApiError> {
        Ok(self.plan_repo.list_alimentacion_by_atleta(atleta_id).await?)
    }

    pub async fn generar_plan_entrenamiento(
        &self,
        payload: PlanEntrenamientoRequestDto,
    ) -> Result<PlanEntrenamiento, ApiError> {
        self.atleta_existe(payload.atleta_id).await?;

        let texto = self
            .llm
            .generate(SYSTEM_ENTRENADOR, &prompt_entrenamiento(&payload))
            .await?;

        // Si el modelo no devolvió el JSON pedido, el texto completo pasa a
        // ser la descripción y se adjunta la rutina básica.
        let contenido = parse_contenido::<PlanEntrenamientoContenido>(&texto)
            .unwrap_or_else(|| {
                warn!("Respuesta del generador sin estructura JSON, usando plan básico");
                contenido_entrenamiento_basico(texto)
            });

        let plan = self
            .plan_repo
            .store_entrenamiento(NuevoPlanEntrenamiento {
                atleta_id: payload.atleta_id,
                objetivo: &payload.objetivo,
                nivel: &payload.nivel,
                frecuencia: payload.frecuencia,
                duracion_semanas: payload.duracion,
                plan_detallado: &contenido.plan_detallado,
                ejercicios: &contenido.ejercicios,
                fecha_creacion: chrono::Utc::now().date_naive(),
            })
            .await?;

        Ok(plan)
    }

    pub async fn generar_plan_alimentacion(
        &self,
        payload: PlanAlimentacionRequestDto,
    ) -> Result<PlanAlimentacion, ApiError> {
        self.atleta_existe(payload.atleta_id).await?;

        let texto = self
            .llm
            .generate(SYSTEM_NUTRICIONISTA, &prompt_alimentacion(&payload))
            .await?;

        let contenido = parse_contenido::<PlanAlimentacionContenido>(&texto)
            .unwrap_or_else(|| {
                warn!("Respuesta del generador sin estructura JSON, usando plan básico");
                contenido_alimentacion_basico(texto, payload.peso_actual, &payload.actividad_nivel)
            });

        let plan = self
            .plan_repo
            .store_alimentacion(NuevoPlanAlimentacion {
                atleta_id: payload.atleta_id,
                objetivo: &payload.objetivo,
                peso_actual: payload.peso_actual,
                peso_objetivo: payload.peso_objetivo,
                actividad_nivel: &payload.actividad_nivel,
                restricciones: payload.restricciones.as_deref(),
                duracion_semanas: payload.duracion,
                plan_detallado: &contenido.plan_detallado,
                calorias_diarias: contenido.calorias_diarias,
                macros: &contenido.macros,
                comidas: &contenido.comidas,
                fecha_creacion: chrono::Utc::now().date_naive(),
            })
            .await?;

        Ok(plan)
    }

    async fn atleta_existe(&self, atleta_id: i32) -> Result<(), ApiError> {
        self.atleta_repo
            .find(atleta_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| ApiError::NotFound("Atleta no encontrado.".to_string()))
    }
}

fn prompt_entrenamiento(payload: &PlanEntrenamientoRequestDto) -> String {
    format!(
        "Genera un plan de entrenamiento de powerlifting detallado con las siguientes especificaciones:\n\
         \n\
         - Objetivo: {}\n\
         - Nivel del atleta: {}\n\
         - Frecuencia: {} días por semana\n\
         - Duración: {} semanas\n\
         - Limitaciones: {}\n\
         \n\
         El plan debe incluir:\n\
         1. Una descripción general del plan (2-3 párrafos)\n\
         2. Lista de ejercicios específicos con series, repeticiones, peso sugerido y descansos\n\
         3. Enfoque en los tres levantamientos principales: sentadilla, press de banca y peso muerto\n\
         4. Ejercicios accesorios apropiados para el nivel\n\
         \n\
         Responde únicamente en formato JSON con esta estructura:\n\
         {{\"plan_detallado\": \"descripción del plan\", \"ejercicios\": [{{\"nombre\": \"nombre del ejercicio\", \
         \"series\": 4, \"repeticiones\": \"rango de reps\", \"peso_sugerido\": \"porcentaje o descripción\", \
         \"descanso\": \"tiempo de descanso\", \"notas\": \"notas adicionales\"}}]}}",
        payload.objetivo,
        payload.nivel,
        payload.frecuencia,
        payload.duracion,
        payload.limitaciones.as_deref().unwrap_or("Ninguna"),
    )
}

fn prompt_alimentacion(payload: &PlanAlimentacionRequestDto) -> String {
    let peso_objetivo = payload
        .peso_objetivo
        .map(|peso| format!("{}kg", peso))
        .unwrap_or_else(|| "No especificado".to_string());

    format!(
        "Genera un plan de alimentación detallado para powerlifting con las siguientes especificaciones:\n\
         \n\
         - Objetivo: {}\n\
         - Peso actual: {}kg\n\
         - Peso objetivo: {}\n\
         - Nivel de actividad: {}\n\
         - Restricciones: {}\n\
         - Preferencias: {}\n\
         - Duración: {} semanas\n\
         \n\
         El plan debe incluir:\n\
         1. Una descripción general del plan nutricional (2-3 párrafos)\n\
         2. Cálculo de calorías diarias totales\n\
         3. Distribución de macronutrientes (proteínas, carbohidratos, grasas en gramos)\n\
         4. Plan de comidas detallado con al menos 5 comidas al día\n\
         5. Cada comida debe incluir alimentos específicos, calorías y macros\n\
         \n\
         Responde únicamente en formato JSON con esta estructura:\n\
         {{\"plan_detallado\": \"descripción del plan\", \"calorias_diarias\": 3000, \
         \"macros\": {{\"proteinas\": 180, \"carbohidratos\": 350, \"grasas\": 80}}, \
         \"comidas\": [{{\"nombre\": \"nombre de la comida\", \"horario\": \"hora sugerida\", \
         \"alimentos\": [\"alimento1\", \"alimento2\"], \"calorias\": 600, \"proteinas\": 40, \
         \"carbohidratos\": 70, \"grasas\": 15, \"notas\": \"notas adicionales\"}}]}}",
        payload.objetivo,
        payload.peso_actual,
        peso_objetivo,
        payload.actividad_nivel,
        payload.restricciones.as_deref().unwrap_or("Ninguna"),
        payload.preferencias.as_deref().unwrap_or("Ninguna"),
        payload.duracion,
    )
}

/// Intenta leer la respuesta del modelo como el JSON pedido, tolerando
/// cercas de markdown alrededor del objeto.
fn parse_contenido<T: serde::de::DeserializeOwned>(texto: &str) -> Option<T> {
    let inicio = texto.find('{')?;
    let fin = texto.rfind('}')?;
    if fin <= inicio {
        return None;
    }
    serde_json::from_str(&texto[inicio..=fin]).ok()
}

fn contenido_entrenamiento_basico(plan_detallado: String) -> PlanEntrenamientoContenido {
    PlanEntrenamientoContenido {
        plan_detallado,
        ejercicios: json!([
            {
                "nombre": "Sentadilla Trasera",
                "series": 4,
                "repeticiones": "5-8",
                "peso_sugerido": "80-85% 1RM",
                "descanso": "3-4 min",
                "notas": "Enfoque en técnica"
            },
            {
                "nombre": "Press de Banca",
                "series": 4,
                "repeticiones": "5-8",
                "peso_sugerido": "80-85% 1RM",
                "descanso": "3-4 min",
                "notas": "Pausa en el pecho"
            },
            {
                "nombre": "Peso Muerto",
                "series": 3,
                "repeticiones": "5-8",
                "peso_sugerido": "80-85% 1RM",
                "descanso": "4-5 min",
                "notas": "Activación de glúteos"
            }
        ]),
    }
}

fn contenido_alimentacion_basico(
    plan_detallado: String,
    peso_actual: f64,
    actividad_nivel: &str,
) -> PlanAlimentacionContenido {
    let factor = match actividad_nivel {
        "intenso" => 35.0,
        "moderado" => 30.0,
        _ => 25.0,
    };
    let calorias = (peso_actual * factor).round();

    PlanAlimentacionContenido {
        plan_detallado,
        calorias_diarias: calorias as i32,
        macros: json!({
            "proteinas": (peso_actual * 2.2).round(),
            "carbohidratos": (peso_actual * 4.0).round(),
            "grasas": peso_actual.round(),
        }),
        comidas: json!([
            {
                "nombre": "Desayuno",
                "horario": "7:00 AM",
                "alimentos": ["Avena", "Plátano", "Proteína en polvo"],
                "calorias": (calorias * 0.25).round(),
                "proteinas": (peso_actual * 0.5).round(),
                "carbohidratos": peso_actual.round(),
                "grasas": (peso_actual * 0.2).round(),
                "notas": "Comida pre-entrenamiento"
            }
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_contenido_json_directo() {
        let texto = r#"{"plan_detallado": "Plan de 8 semanas", "ejercicios": []}"#;
        let contenido: PlanEntrenamientoContenido = parse_contenido(texto).unwrap();
        assert_eq!(contenido.plan_detallado, "Plan de 8 semanas");
    }

    #[test]
    fn test_parse_contenido_con_cercas_markdown() {
        let texto = "```json\n{\"plan_detallado\": \"Plan\", \"ejercicios\": [{\"nombre\": \"Sentadilla\"}]}\n```";
        let contenido: PlanEntrenamientoContenido = parse_contenido(texto).unwrap();
        assert_eq!(contenido.plan_detallado, "Plan");
    }

    #[test]
    fn test_parse_contenido_texto_plano_falla() {
        assert!(parse_contenido::<PlanEntrenamientoContenido>("plan en prosa sin estructura").is_none());
    }

    #[test]
    fn test_calorias_de_respaldo_por_nivel_de_actividad() {
        let intenso = contenido_alimentacion_basico(String::new(), 80.0, "intenso");
        assert_eq!(intenso.calorias_diarias, 2800);

        let moderado = contenido_alimentacion_basico(String::new(), 80.0, "moderado");
        assert_eq!(moderado.calorias_diarias, 2400);

        let ligero = contenido_alimentacion_basico(String::new(), 80.0, "ligero");
        assert_eq!(ligero.calorias_diarias, 2000);
    }

    #[test]
    fn test_macros_de_respaldo() {
        let contenido = contenido_alimentacion_basico(String::new(), 80.0, "moderado");
        assert_eq!(contenido.macros["proteinas"], 176.0);
        assert_eq!(contenido.macros["carbohidratos"], 320.0);
        assert_eq!(contenido.macros["grasas"], 80.0);
    }

    #[test]
    fn test_rutina_basica_trae_los_tres_levantamientos() {
        let contenido = contenido_entrenamiento_basico("plan".to_string());
        let ejercicios = contenido.ejercicios.as_array().unwrap();
        assert_eq!(ejercicios.len(), 3);
        assert_eq!(ejercicios[0]["nombre"], "Sentadilla Trasera");
    }
}
