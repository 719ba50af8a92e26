// Launchpad API server entry point

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launchpad_api::build_router;
use launchpad_api::config::ApiConfig;
use launchpad_api::db::DbPool;
use launchpad_api::handlers::ApiState;

fn load_env() {
    dotenv::dotenv().ok();
}

#[tokio::main]
async fn main() {
    load_env();
    // Configure logging with tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load API configuration from environment
    let config = ApiConfig::from_env();
    tracing::info!("Configuration loaded");

    // Establish database connection pool
    let db_pool = match DbPool::new(&config).await {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!("{}", err);
            std::process::exit(1);
        }
    };
    tracing::info!("Connected to database");

    let app_state = Arc::new(ApiState::new(db_pool.into_connection()));
    let app = build_router(app_state);

    // Parse server address from config
    let addr: SocketAddr = match config.server_addr().parse() {
        Ok(addr) => addr,
        Err(err) => {
            tracing::error!("Invalid address {}: {}", config.server_addr(), err);
            std::process::exit(1);
        }
    };

    // Start HTTP server
    tracing::info!("Starting server on {}", addr);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to bind to {}: {}", addr, err);
            std::process::exit(1);
        }
    };

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {}", err);
    }

    tracing::info!("Server shut down");
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, shutting down");
}
