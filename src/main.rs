use crate::config::database::DatabaseTrait;
use crate::config::{database, parameter};
use crate::middleware::rate_limit::{self, RateLimiterState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

mod config;
mod dto;
mod entity;
mod error;
mod handler;
mod middleware;
mod repository;
mod response;
mod routes;
mod service;
mod state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    info!("Iniciando la API administrativa de la federación...");

    parameter::init();
    config::logging::init();

    let connection = match database::Database::init().await {
        Ok(conn) => {
            info!("Conexión a la base de datos establecida");
            conn
        }
        Err(e) => {
            error!("No se pudo inicializar la base de datos: {}", e);
            return Err(Box::new(e) as Box<dyn std::error::Error>);
        }
    };

    let server_address = parameter::get("SERVER_ADDRESS");
    let server_port = parameter::get("SERVER_PORT");
    let host = format!("{}:{}", server_address, server_port);

    // Limitador de peticiones compartido por toda la superficie HTTP
    let rate_limiter = RateLimiterState::from_config();
    let sweep_interval = parameter::get_u64("RATE_LIMIT_SWEEP_INTERVAL_SECONDS");
    let sweep_shutdown_token = tokio_util::sync::CancellationToken::new();
    let sweep_task_handle = rate_limit::start_sweep_task(
        rate_limiter.clone(),
        sweep_interval,
        sweep_shutdown_token.clone(),
    );
    info!("Rate limiter inicializado (barrido cada {}s)", sweep_interval);

    let listener = match tokio::net::TcpListener::bind(&host).await {
        Ok(listener) => {
            info!("Servidor escuchando en {}", host);
            listener
        }
        Err(e) => {
            error!("No se pudo enlazar {}: {}", host, e);
            return Err(e.into());
        }
    };

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Señal de apagado recibida, cerrando ordenadamente...");
                sweep_shutdown_token.cancel();
                let _ = shutdown_tx.send(());
            }
            Err(err) => {
                error!("No se pudo escuchar la señal de apagado: {}", err);
            }
        }
    });

    // La construcción de rutas valida la configuración del firmado de
    // tokens; sin JWT_SECRET el proceso no arranca
    let app = match routes::root::routes(Arc::new(connection), rate_limiter) {
        Ok(router) => router,
        Err(e) => {
            error!("No se pudieron inicializar las rutas: {}", e);
            return Err(Box::new(e) as Box<dyn std::error::Error>);
        }
    };

    match axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async {
        shutdown_rx.await.ok();
        if let Err(e) = sweep_task_handle.await {
            error!("Error esperando el fin del barrido del rate limiter: {}", e);
        }
    })
    .await
    {
        Ok(_) => {
            info!("Servidor apagado ordenadamente");
            Ok(())
        }
        Err(e) => {
            error!("Error del servidor: {}", e);
            Err(Box::new(e) as Box<dyn std::error::Error>)
        }
    }
}
