// src/main.rs
mod routes;
mod handlers;
mod models;
mod database;
mod middleware;
mod state;
mod dtos;
mod error;
mod auth;
mod config;
#[cfg(test)]
mod test_support;

use tracing_subscriber::fmt::init as tracing_init;
use tokio::net::TcpListener;
use dotenvy::dotenv;
use std::net::SocketAddr;
use config::{AppConfig, StoreBackend};
use database::EmployeeDbContext;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return;
        }
    };

    let db = match (config.store, config.database_url.as_deref()) {
        (StoreBackend::Postgres, Some(url)) => {
            match EmployeeDbContext::connect(url, config.max_connections).await {
                Ok(db) => db,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to create database pool");
                    return;
                }
            }
        }
        (StoreBackend::Postgres, None) => {
            tracing::error!("No connection string for {}", config::EMPLOYEE_CONNECTION_NAME);
            return;
        }
        (StoreBackend::Memory, _) => {
            tracing::warn!("Using in-memory employee store; data is lost on exit");
            EmployeeDbContext::in_memory()
        }
    };

    let app_state = state::AppState::new(db, config.antiforgery_secret.as_str());
    let app = routes::build_app(app_state, &config.cors_origins);

    // Try port..port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = config.port.saturating_add(offset);
            let addr = SocketAddr::from((config.host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => { bound = Some((l, addr)); break; }
                Err(e) => {
                    if offset == 0 { tracing::warn!(%addr, error=%e, "Port in use, trying next"); }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Server running on {}", addr);
                l
            }
            None => {
                tracing::error!("Failed to bind to any port starting at {} on {}", config.port, config.host);
                return;
            }
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}
