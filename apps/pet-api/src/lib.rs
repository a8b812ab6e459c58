//! # Pet API
//!
//! HTTP server for the pet store.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Pet API                                       │
//! │                                                                         │
//! │  HTTP client ──► routes ──► PetService ──► Arc<dyn PetRepository>       │
//! │                    │                          ├── SqlitePetRepository   │
//! │                    │                          └── InMemoryPetRepository │
//! │                    ▼                                                    │
//! │             middleware (cors, require_auth ──► IdentityProvider)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `PETSTORE_PORT` - HTTP port (default: 8080)
//! - `PETSTORE_BIND_ADDR` - Bind address (default: 0.0.0.0)
//! - `PETSTORE_STORE` - `sqlite` or `memory` (default: sqlite)
//! - `DATABASE_PATH` - SQLite file (default: ../database/database.db)
//! - `DATABASE_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `AUTH_ENABLED` - Require bearer tokens on `/pets` routes (default: false)
//! - `JWT_SECRET` - HS256 secret, required when auth is enabled
//! - `JWT_ISSUER` / `JWT_AUDIENCE` - Optional claim checks

use std::sync::Arc;

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod service;

// Re-exports
pub use auth::{IdentityProvider, JwtIdentityProvider};
pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::build_router;
pub use service::PetService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service: PetService,
    /// `None` disables authentication.
    pub identity: Option<Arc<dyn IdentityProvider>>,
}

impl AppState {
    /// State with authentication disabled.
    pub fn new(service: PetService) -> Self {
        AppState {
            service,
            identity: None,
        }
    }

    /// Require bearer tokens verified by `identity` on the pet routes.
    pub fn with_identity(mut self, identity: Arc<dyn IdentityProvider>) -> Self {
        self.identity = Some(identity);
        self
    }
}
