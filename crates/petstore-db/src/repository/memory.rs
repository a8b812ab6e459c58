//! # In-Memory Pet Repository
//!
//! A process-local store with no persistence.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  InMemoryPetRepository                                                  │
//! │  └── Mutex<MemoryStore>                                                 │
//! │       ├── pets: BTreeMap<i64, Pet>   id order == insertion order        │
//! │       └── next_id: i64               only ever increments               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The lock is taken for the map access only and is never held across an
//! `.await`.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use super::PetRepository;
use crate::error::{DbError, DbResult};
use petstore_core::{NewPet, Pet, PetStatus, PetUpdate};

#[derive(Debug)]
struct MemoryStore {
    pets: BTreeMap<i64, Pet>,
    next_id: i64,
}

/// Mutex-guarded map of pets.
#[derive(Debug)]
pub struct InMemoryPetRepository {
    store: Mutex<MemoryStore>,
}

impl InMemoryPetRepository {
    /// Creates an empty store. The first pet gets id 1.
    pub fn new() -> Self {
        InMemoryPetRepository {
            store: Mutex::new(MemoryStore {
                pets: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> DbResult<MutexGuard<'_, MemoryStore>> {
        self.store
            .lock()
            .map_err(|_| DbError::Internal("pet store mutex poisoned".to_string()))
    }
}

impl Default for InMemoryPetRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {
    async fn add(&self, pet: NewPet) -> DbResult<Pet> {
        // Same rule the SQLite table enforces with CHECK (name <> '')
        if pet.name.is_empty() {
            return Err(DbError::ConstraintViolation("name must not be empty".to_string()));
        }

        let mut store = self.lock()?;
        let id = store.next_id;
        store.next_id += 1;

        let created = Pet {
            id,
            status: pet.status_or_default(),
            name: pet.name,
        };
        store.pets.insert(id, created.clone());

        debug!(id, "Pet added to memory store");
        Ok(created)
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        self.lock()?
            .pets
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DbError::not_found("Pet", id))
    }

    async fn get_by_id(&self, id: i64) -> DbResult<Pet> {
        self.lock()?
            .pets
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::not_found("Pet", id))
    }

    async fn update(&self, update: &PetUpdate) -> DbResult<()> {
        if update.name.is_empty() {
            return Err(DbError::ConstraintViolation("name must not be empty".to_string()));
        }

        let mut store = self.lock()?;
        let pet = store
            .pets
            .get_mut(&update.id)
            .ok_or_else(|| DbError::not_found("Pet", update.id))?;
        update.apply_to(pet);
        Ok(())
    }

    async fn list(&self, status: Option<PetStatus>) -> DbResult<Vec<Pet>> {
        let store = self.lock()?;
        let pets = store
            .pets
            .values()
            .filter(|pet| status.map_or(true, |s| pet.status == s))
            .cloned()
            .collect();
        Ok(pets)
    }

    async fn count(&self) -> DbResult<i64> {
        Ok(self.lock()?.pets.len() as i64)
    }

    async fn health_check(&self) -> bool {
        !self.store.is_poisoned()
    }
}
