//! # petstore-core: Pure Domain Model for the Pet Store
//!
//! This crate holds the pet record, its status enumeration, the inputs to
//! the repository operations and the validation rules. It has zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Petstore Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    pet-api (HTTP)                               │   │
//! │  │    CORS ──► Auth ──► Router ──► PetService                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ petstore-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │ validation│  │   error   │                  │   │
//! │  │   │   Pet     │  │  names    │  │Validation │                  │   │
//! │  │   │ PetStatus │  │  ids      │  │  Error    │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 petstore-db (Storage Layer)                     │   │
//! │  │          PetRepository trait, SQLite and in-memory stores        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Pet, PetStatus, NewPet, PetUpdate)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use petstore_core::{NewPet, PetStatus};
//! use petstore_core::validation::validate_pet_name;
//!
//! let new_pet = NewPet::new("Rex");
//! assert!(validate_pet_name(&new_pet.name).is_ok());
//! assert_eq!(new_pet.status_or_default(), PetStatus::Available);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::*;
