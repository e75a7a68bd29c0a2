//! Taskpad API Server Entry Point
//!
//! Bootstraps configuration, the Postgres note store, and starts the
//! Axum HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use taskpad_api::{create_api_router, ApiConfig, ApiError, ApiResult, DbConfig, PgNoteStore};

#[tokio::main]
async fn main() -> ApiResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let db_config = DbConfig::from_env();
    // Pool creation is lazy; /health/ready reports connectivity
    let store = Arc::new(PgNoteStore::from_config(&db_config)?);

    let api_config = ApiConfig::from_env();
    let app: Router = create_api_router(store, &api_config);

    let addr = resolve_bind_addr()?;
    tracing::info!(%addr, "Starting Taskpad API server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::internal_error(format!("Failed to bind {}: {}", addr, e)))?;

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            result.map_err(|e| ApiError::internal_error(format!("Server error: {}", e)))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

fn resolve_bind_addr() -> ApiResult<SocketAddr> {
    let host = std::env::var("TASKPAD_API_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port_str = std::env::var("TASKPAD_API_PORT").unwrap_or_else(|_| "3000".to_string());
    let port = port_str
        .parse::<u16>()
        .map_err(|_| ApiError::invalid_input(format!("Invalid port value: {}", port_str)))?;

    let addr = format!("{}:{}", host, port);
    addr.parse::<SocketAddr>()
        .map_err(|e| ApiError::invalid_input(format!("Invalid bind address {}: {}", addr, e)))
}
