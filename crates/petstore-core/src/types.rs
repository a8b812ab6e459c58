//! # Domain Types
//!
//! Core domain types used throughout the pet store.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Pet        │   │     NewPet      │   │   PetUpdate     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (store-set) │   │  name           │   │  id             │       │
//! │  │  name           │   │  status?        │   │  name           │       │
//! │  │  status         │   │                 │   │  status?        │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │   PetStatus     │   Stored and serialized lower-case:               │
//! │  │  ─────────────  │   "available" | "pending" | "sold"                │
//! │  │  Available      │                                                   │
//! │  │  Pending        │                                                   │
//! │  │  Sold           │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is assigned by the store on creation and never changes afterwards.
//! There is no way to express "change the id" through [`PetUpdate`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Pet Status
// =============================================================================

/// Lifecycle status of a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    /// Pet can be adopted. Default for new pets.
    #[default]
    Available,
    /// Adoption is in progress.
    Pending,
    /// Pet has been adopted.
    Sold,
}

impl PetStatus {
    /// Every status, in declaration order.
    pub const ALL: [PetStatus; 3] = [PetStatus::Available, PetStatus::Pending, PetStatus::Sold];

    /// Returns the wire/storage representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PetStatus::Available => "available",
            PetStatus::Pending => "pending",
            PetStatus::Sold => "sold",
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PetStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: PetStatus::ALL.iter().map(|s| s.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Pet
// =============================================================================

/// A persisted pet record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Pet {
    /// Store-assigned identifier.
    pub id: i64,

    /// Display name. Never empty for a persisted pet.
    pub name: String,

    /// Current status.
    pub status: PetStatus,
}

// =============================================================================
// Repository Inputs
// =============================================================================

/// Input for creating a pet. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    pub name: String,
    /// `None` means [`PetStatus::Available`].
    pub status: Option<PetStatus>,
}

impl NewPet {
    /// Creates a new pet input with the default status.
    pub fn new(name: impl Into<String>) -> Self {
        NewPet {
            name: name.into(),
            status: None,
        }
    }

    /// Sets an explicit status.
    pub fn with_status(mut self, status: PetStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the status the store should persist.
    pub fn status_or_default(&self) -> PetStatus {
        self.status.unwrap_or_default()
    }
}

/// Input for updating an existing pet.
///
/// `name` is always overwritten. `status` is overwritten only when present;
/// `None` keeps the stored status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetUpdate {
    pub id: i64,
    pub name: String,
    pub status: Option<PetStatus>,
}

impl PetUpdate {
    /// Applies this update to a stored pet. The id is left untouched.
    pub fn apply_to(&self, pet: &mut Pet) {
        pet.name = self.name.clone();
        if let Some(status) = self.status {
            pet.status = status;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
