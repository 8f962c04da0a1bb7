use crate::config::cors;
use crate::config::database::Database;
use crate::error::token_error::TokenError;
use crate::handler::health_handler;
use crate::middleware::auth as auth_middleware;
use crate::middleware::rate_limit::{self, RateLimiterState};
use crate::routes::{
    atletas, auth, competencias, entrenadores, entrenamientos, eventos, planes, rendimiento,
    resultados, roles, usuarios,
};
use crate::state::auth_state::AuthState;
use crate::state::federacion_state::FederacionState;
use crate::state::plan_state::PlanState;
use crate::state::token_state::TokenState;
use crate::state::usuario_state::UsuarioState;
use crate::response::api_response::ErrorBody;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{middleware, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

/// Compone el router completo. Falla cuando JWT_SECRET no está definido:
/// condición fatal de arranque, nunca un error por petición.
pub fn routes(db_conn: Arc<Database>, rate_limiter: RateLimiterState) -> Result<Router, TokenError> {
    let auth_state = AuthState::new(&db_conn)?;
    let token_state = TokenState::new(&db_conn)?;
    let usuario_state = UsuarioState::new(&db_conn);
    let federacion_state = FederacionState::new(&db_conn);
    let plan_state = PlanState::new(&db_conn);

    // Todo lo que cuelga de /api salvo /api/auth pasa por el middleware
    // de autenticación
    let protegidas = usuarios::routes()
        .with_state(usuario_state.clone())
        .merge(roles::routes().with_state(usuario_state))
        .merge(atletas::routes().with_state(federacion_state.clone()))
        .merge(entrenadores::routes().with_state(federacion_state.clone()))
        .merge(competencias::routes().with_state(federacion_state.clone()))
        .merge(eventos::routes().with_state(federacion_state.clone()))
        .merge(resultados::routes().with_state(federacion_state.clone()))
        .merge(entrenamientos::routes().with_state(federacion_state.clone()))
        .merge(rendimiento::routes().with_state(federacion_state))
        .merge(planes::routes().with_state(plan_state))
        .layer(middleware::from_fn_with_state(token_state, auth_middleware::auth));

    let api = auth::routes().with_state(auth_state).merge(protegidas);

    let app_router = Router::new()
        .route("/health", get(health_handler::health_check))
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(TraceLayer::new_for_http())
                .layer(cors::cors_layer())
                .layer(middleware::from_fn_with_state(rate_limiter, rate_limit::rate_limit)),
        );

    Ok(app_router)
}

/// Última barrera de errores: un pánico en cualquier handler termina en
/// un 500 genérico; el mensaje real solo sale en desarrollo.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    let detalle = err
        .downcast_ref::<String>()
        .map(|s| s.as_str())
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("pánico sin mensaje");

    error!("Pánico no controlado en la petición: {}", detalle);

    let mensaje = if crate::config::logging::get_config().allow_detailed_errors() {
        detalle.to_string()
    } else {
        "Ocurrió un error inesperado.".to_string()
    };

    ErrorBody::send(mensaje)
        .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        .into_response()
}
