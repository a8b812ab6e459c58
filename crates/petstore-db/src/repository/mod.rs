//! # Repository Module
//!
//! The pet repository capability and its implementations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Capability, Two Stores                           │
//! │                                                                         │
//! │  PetService                                                            │
//! │       │                                                                 │
//! │       │  repo.get_by_id(1)                                             │
//! │       ▼                                                                 │
//! │  Arc<dyn PetRepository>                                                │
//! │  ├── add(new_pet)          → Pet with fresh id                         │
//! │  ├── delete(id)            → () | NotFound                             │
//! │  ├── get_by_id(id)         → Pet | NotFound                            │
//! │  ├── update(&changes)      → () | NotFound                             │
//! │  └── list(status_filter)   → Vec<Pet>                                  │
//! │       │                                  │                              │
//! │       ▼                                  ▼                              │
//! │  SqlitePetRepository            InMemoryPetRepository                   │
//! │  (pets table, sqlx)             (Mutex<BTreeMap<i64, Pet>>)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both implementations report a missing id as [`DbError::NotFound`], so the
//! service never needs to know which store it talks to.
//!
//! [`DbError::NotFound`]: crate::DbError::NotFound

use async_trait::async_trait;
use petstore_core::{NewPet, Pet, PetStatus, PetUpdate};

use crate::error::DbResult;

pub mod memory;
pub mod pet;

/// Storage capability for pet records.
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Creates a pet with a fresh, never-used id.
    ///
    /// Status defaults to [`PetStatus::Available`] when unset.
    async fn add(&self, pet: NewPet) -> DbResult<Pet>;

    /// Removes a pet. `NotFound` if no pet has this id.
    async fn delete(&self, id: i64) -> DbResult<()>;

    /// Fetches a pet. `NotFound` if no pet has this id.
    async fn get_by_id(&self, id: i64) -> DbResult<Pet>;

    /// Overwrites the name, and the status when given. `NotFound` if no pet
    /// has this id.
    async fn update(&self, update: &PetUpdate) -> DbResult<()>;

    /// Lists all pets, or only those with the given status, in id order.
    async fn list(&self, status: Option<PetStatus>) -> DbResult<Vec<Pet>>;

    /// Counts stored pets.
    async fn count(&self) -> DbResult<i64>;

    /// Returns true if the store can serve requests.
    async fn health_check(&self) -> bool {
        true
    }
}

// =============================================================================
// Shared Behaviour Tests
// =============================================================================
// Both implementations must behave identically, so every scenario below
// runs against each of them.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig, DbError, InMemoryPetRepository};
    use std::collections::HashSet;
    use std::sync::Arc;

    async fn stores() -> Vec<(&'static str, Arc<dyn PetRepository>)> {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        vec![
            ("memory", Arc::new(InMemoryPetRepository::new())),
            ("sqlite", Arc::new(db.pets())),
        ]
    }

    #[tokio::test]
    async fn test_add_assigns_ids_and_defaults_status() {
        for (kind, repo) in stores().await {
            let rex = repo.add(NewPet::new("Rex")).await.unwrap();
            assert_eq!(rex.id, 1, "{kind}");
            assert_eq!(rex.name, "Rex", "{kind}");
            assert_eq!(rex.status, PetStatus::Available, "{kind}");

            let tom = repo
                .add(NewPet::new("Tom").with_status(PetStatus::Pending))
                .await
                .unwrap();
            assert_eq!(tom.id, 2, "{kind}");
            assert_eq!(tom.status, PetStatus::Pending, "{kind}");

            assert_eq!(repo.get_by_id(1).await.unwrap(), rex, "{kind}");
        }
    }

    #[tokio::test]
    async fn test_update_then_get() {
        for (kind, repo) in stores().await {
            let rex = repo.add(NewPet::new("Rex")).await.unwrap();

            repo.update(&PetUpdate {
                id: rex.id,
                name: "Max".to_string(),
                status: Some(PetStatus::Sold),
            })
            .await
            .unwrap();

            let pet = repo.get_by_id(rex.id).await.unwrap();
            assert_eq!(pet.name, "Max", "{kind}");
            assert_eq!(pet.status, PetStatus::Sold, "{kind}");

            // Absent status keeps the stored one
            repo.update(&PetUpdate {
                id: rex.id,
                name: "Maximilian".to_string(),
                status: None,
            })
            .await
            .unwrap();

            let pet = repo.get_by_id(rex.id).await.unwrap();
            assert_eq!(pet.name, "Maximilian", "{kind}");
            assert_eq!(pet.status, PetStatus::Sold, "{kind}");
        }
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found_and_store_unchanged() {
        for (kind, repo) in stores().await {
            let rex = repo.add(NewPet::new("Rex")).await.unwrap();

            assert!(repo.get_by_id(99).await.unwrap_err().is_not_found(), "{kind}");
            assert!(repo.delete(99).await.unwrap_err().is_not_found(), "{kind}");
            let err = repo
                .update(&PetUpdate {
                    id: 99,
                    name: "Ghost".to_string(),
                    status: None,
                })
                .await
                .unwrap_err();
            assert!(matches!(err, DbError::NotFound { ref entity, .. } if entity == "Pet"), "{kind}");

            assert_eq!(repo.list(None).await.unwrap(), vec![rex], "{kind}");
        }
    }

    #[tokio::test]
    async fn test_delete_removes_pet_and_never_reuses_id() {
        for (kind, repo) in stores().await {
            let rex = repo.add(NewPet::new("Rex")).await.unwrap();
            let tom = repo.add(NewPet::new("Tom")).await.unwrap();

            repo.delete(tom.id).await.unwrap();
            assert!(repo.get_by_id(tom.id).await.unwrap_err().is_not_found(), "{kind}");
            assert_eq!(repo.list(None).await.unwrap(), vec![rex], "{kind}");

            let kit = repo.add(NewPet::new("Kit")).await.unwrap();
            assert_eq!(kit.id, 3, "{kind}");
        }
    }

    #[tokio::test]
    async fn test_list_filters_by_status_in_id_order() {
        for (kind, repo) in stores().await {
            repo.add(NewPet::new("A")).await.unwrap();
            repo.add(NewPet::new("B").with_status(PetStatus::Sold)).await.unwrap();
            repo.add(NewPet::new("C")).await.unwrap();

            let all: Vec<String> = repo
                .list(None)
                .await
                .unwrap()
                .into_iter()
                .map(|p| p.name)
                .collect();
            assert_eq!(all, ["A", "B", "C"], "{kind}");

            let available: Vec<i64> = repo
                .list(Some(PetStatus::Available))
                .await
                .unwrap()
                .into_iter()
                .map(|p| p.id)
                .collect();
            assert_eq!(available, [1, 3], "{kind}");

            assert!(repo.list(Some(PetStatus::Pending)).await.unwrap().is_empty(), "{kind}");
            assert_eq!(repo.count().await.unwrap(), 3, "{kind}");
        }
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected_by_store() {
        for (kind, repo) in stores().await {
            let err = repo.add(NewPet::new("")).await.unwrap_err();
            assert!(matches!(err, DbError::ConstraintViolation(_)), "{kind}: {err}");
            assert_eq!(repo.count().await.unwrap(), 0, "{kind}");
        }
    }

    #[tokio::test]
    async fn test_concurrent_adds_get_unique_ids() {
        for (kind, repo) in stores().await {
            let handles: Vec<_> = (0..32)
                .map(|i| {
                    let repo = Arc::clone(&repo);
                    tokio::spawn(async move { repo.add(NewPet::new(format!("pet-{i}"))).await })
                })
                .collect();

            let mut ids = HashSet::new();
            for handle in handles {
                let pet = handle.await.unwrap().unwrap();
                assert!(ids.insert(pet.id), "{kind}: duplicate id {}", pet.id);
            }
            assert_eq!(ids.len(), 32, "{kind}");
            assert_eq!(repo.list(None).await.unwrap().len(), 32, "{kind}");
        }
    }
}
