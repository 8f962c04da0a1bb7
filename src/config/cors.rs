use crate::config::parameter;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Hosts accepted when CORS_ORIGIN is not configured
const DEFAULT_ORIGINS: &str = "http://localhost:3000, http://104.198.235.137:3000";

fn allowed_origins() -> Vec<HeaderValue> {
    let origins = parameter::get_optional("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_ORIGINS.to_string());

    origins
        .split(',')
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("CORS: origin inválido descartado: {}", origin);
                None
            }
        })
        .collect()
}

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins()))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .allow_credentials(true)
}
