//! # Pet API Server
//!
//! HTTP server for the pet store.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ApiConfig::load()                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PETSTORE_STORE=sqlite ──► Database::new (pool + migrations)           │
//! │  PETSTORE_STORE=memory ──► InMemoryPetRepository                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PetService ──► AppState (+ JwtIdentityProvider if AUTH_ENABLED)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  axum::serve on PETSTORE_BIND_ADDR:PETSTORE_PORT until Ctrl+C/SIGTERM   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;
use petstore_db::{Database, DbConfig, InMemoryPetRepository, PetRepository};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pet_api::config::StoreKind;
use pet_api::{build_router, ApiConfig, AppState, JwtIdentityProvider, PetService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("info,pet_api=debug,petstore_db=debug,sqlx=warn")
            }),
        )
        .with_target(true)
        .init();

    info!("Starting Pet API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(
        port = config.port,
        store = ?config.store,
        auth_enabled = config.auth_enabled,
        "Configuration loaded"
    );

    // Open the pet store
    let mut database = None;
    let repo: Arc<dyn PetRepository> = match config.store {
        StoreKind::Sqlite => {
            if let Some(parent) = config.database_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create database directory {}", parent.display())
                    })?;
                }
            }

            let db = Database::new(
                DbConfig::new(&config.database_path)
                    .max_connections(config.database_max_connections),
            )
            .await?;
            info!(path = %config.database_path.display(), "Connected to SQLite");

            let pets = db.pets();
            database = Some(db);
            Arc::new(pets)
        }
        StoreKind::Memory => {
            info!("Using in-memory pet store");
            Arc::new(InMemoryPetRepository::new())
        }
    };

    // Build shared state
    let mut state = AppState::new(PetService::new(repo));
    if config.auth_enabled {
        let secret = config
            .jwt_secret
            .as_deref()
            .context("JWT_SECRET is required when AUTH_ENABLED is set")?;

        let mut provider = JwtIdentityProvider::new(secret);
        if let Some(issuer) = &config.jwt_issuer {
            provider = provider.with_issuer(issuer);
        }
        if let Some(audience) = &config.jwt_audience {
            provider = provider.with_audience(audience);
        }
        state = state.with_identity(Arc::new(provider));
        info!("Bearer token authentication enabled");
    }

    let app = build_router(state);

    // Start server
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(%addr, "Pet API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(db) = database {
        db.close().await;
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
