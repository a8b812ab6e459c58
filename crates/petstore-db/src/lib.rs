//! # petstore-db: Storage Layer for the Pet Store
//!
//! This crate provides the [`PetRepository`] capability trait and its two
//! interchangeable implementations: SQLite through sqlx, and an in-memory
//! map for tests and throwaway deployments.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Petstore Data Flow                               │
//! │                                                                         │
//! │  PetService (get_pet_by_id)                                             │
//! │       │                                                                 │
//! │       ▼  Arc<dyn PetRepository>                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   petstore-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌────────────┐  │   │
//! │  │   │   Database    │    │   Repositories     │  │ Migrations │  │   │
//! │  │   │   (pool.rs)   │    │                    │  │ (embedded) │  │   │
//! │  │   │               │    │ SqlitePetRepository│  │            │  │   │
//! │  │   │ SqlitePool    │◄───│ InMemoryPet-       │  │ 001_create │  │   │
//! │  │   │               │    │   Repository       │  │ _pets.sql  │  │   │
//! │  │   └───────────────┘    └────────────────────┘  └────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Storage error types
//! - [`repository`] - The repository trait and its implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use petstore_db::{Database, DbConfig, PetRepository};
//! use petstore_core::NewPet;
//!
//! let db = Database::new(DbConfig::new("pets.db")).await?;
//! let pet = db.pets().add(NewPet::new("Rex")).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::memory::InMemoryPetRepository;
pub use repository::pet::SqlitePetRepository;
pub use repository::PetRepository;
