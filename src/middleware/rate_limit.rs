use crate::config::parameter;
use crate::response::api_response::ErrorBody;
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use dashmap::DashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

struct Window {
    inicio: Instant,
    consumidos: u32,
}

/// Contador de ventana fija por dirección de cliente. Estado local al
/// proceso: se pierde al reiniciar y no se comparte entre instancias.
#[derive(Clone)]
pub struct RateLimiterState {
    windows: Arc<DashMap<String, Window>>,
    points: u32,
    window: Duration,
}

impl RateLimiterState {
    pub fn new(points: u32, window_seconds: u64) -> Self {
        Self {
            windows: Arc::new(DashMap::new()),
            points,
            window: Duration::from_secs(window_seconds),
        }
    }

    pub fn from_config() -> Self {
        Self::new(
            parameter::get_u32("RATE_LIMIT_POINTS"),
            parameter::get_u64("RATE_LIMIT_WINDOW_SECONDS"),
        )
    }

    /// Consume un punto de la ventana vigente de `key`. Devuelve `false`
    /// cuando el presupuesto de la ventana ya se agotó.
    pub fn consume(&self, key: &str) -> bool {
        let ahora = Instant::now();
        let mut window = self.windows.entry(key.to_string()).or_insert_with(|| Window {
            inicio: ahora,
            consumidos: 0,
        });

        // La ventana venció: arranca una nueva desde esta petición
        if ahora.duration_since(window.inicio) >= self.window {
            window.inicio = ahora;
            window.consumidos = 0;
        }

        window.consumidos += 1;
        window.consumidos <= self.points
    }

    /// Descarta ventanas sin actividad reciente para acotar la memoria
    pub fn cleanup(&self) {
        let ahora = Instant::now();
        let limite = self.window * 2;

        self.windows
            .retain(|_, window| ahora.duration_since(window.inicio) < limite);
    }
}

/// Barrido periódico del mapa de ventanas, cancelable en el apagado
pub fn start_sweep_task(
    state: RateLimiterState,
    interval_seconds: u64,
    shutdown: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_seconds));
        interval.tick().await;
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("Barrido del rate limiter detenido");
                    break;
                }
                _ = interval.tick() => {
                    state.cleanup();
                }
            }
        }
    })
}

/// Aplica el límite a toda la superficie HTTP. Una petición sin dirección
/// identificable se rechaza en lugar de dejarla pasar.
pub async fn rate_limit(
    axum::extract::State(state): axum::extract::State<RateLimiterState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let Some(ip) = client_ip(&req) else {
        warn!("Petición sin dirección IP identificable rechazada");
        return ErrorBody::send("Dirección IP no reconocida.")
            .with_status(StatusCode::BAD_REQUEST)
            .into_response();
    };

    if !state.consume(&ip) {
        warn!("Rate limit excedido para IP: {}", ip);
        return ErrorBody::send("Demasiadas peticiones.")
            .with_status(StatusCode::TOO_MANY_REQUESTS)
            .into_response();
    }

    next.run(req).await
}

/// Dirección del cliente: cabeceras de proxy primero, luego el socket
fn client_ip(req: &Request<Body>) -> Option<String> {
    let forwarded = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.split(',').next())
        .map(|ip| ip.trim())
        .filter(|ip| !ip.is_empty() && *ip != "unknown");

    if let Some(ip) = forwarded {
        return Some(ip.to_string());
    }

    let real_ip = req
        .headers()
        .get("x-real-ip")
        .and_then(|header| header.to_str().ok())
        .map(|ip| ip.trim())
        .filter(|ip| !ip.is_empty() && *ip != "unknown");

    if let Some(ip) = real_ip {
        return Some(ip.to_string());
    }

    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presupuesto_de_la_ventana() {
        let state = RateLimiterState::new(100, 60);
        let ip = "192.168.1.1";

        for intento in 1..=100 {
            assert!(state.consume(ip), "el intento {} debería pasar", intento);
        }
        assert!(!state.consume(ip), "el intento 101 debe rechazarse");
        assert!(!state.consume(ip));
    }

    #[test]
    fn test_claves_independientes() {
        let state = RateLimiterState::new(1, 60);

        assert!(state.consume("192.168.1.1"));
        assert!(!state.consume("192.168.1.1"));
        assert!(state.consume("192.168.1.2"));
    }

    #[tokio::test]
    async fn test_la_ventana_se_reinicia() {
        let state = RateLimiterState::new(2, 1);
        let ip = "192.168.1.1";

        assert!(state.consume(ip));
        assert!(state.consume(ip));
        assert!(!state.consume(ip));

        tokio::time::sleep(Duration::from_secs(2)).await;

        assert!(state.consume(ip));
    }

    #[tokio::test]
    async fn test_cleanup_descarta_ventanas_viejas() {
        let state = RateLimiterState::new(5, 1);

        assert!(state.consume("192.168.1.1"));
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(state.consume("192.168.1.2"));

        state.cleanup();

        assert!(!state.windows.contains_key("192.168.1.1"));
        assert!(state.windows.contains_key("192.168.1.2"));
    }

    #[test]
    fn test_client_ip_de_cabeceras() {
        let req = Request::builder()
            .header("x-forwarded-for", "10.0.0.1, 10.0.0.2")
            .body(Body::empty())
            .unwrap();
        assert_eq!(client_ip(&req).as_deref(), Some("10.0.0.1"));

        let req = Request::builder()
            .header("x-real-ip", "10.0.0.3")
            .body(Body::empty())
            .unwrap();
        assert_eq!(client_ip(&req).as_deref(), Some("10.0.0.3"));

        let req = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(client_ip(&req), None);
    }
}
