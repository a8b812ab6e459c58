//! # Pet Service
//!
//! Use-case layer between the HTTP handlers and the repository. Each method
//! returns the response enum of its operation; storage errors are logged here
//! and never leave this module as Rust errors.
//!
//! ## Error Mapping
//! ```text
//! ValidationError (empty name)    ─► BadRequest            (store untouched)
//! non-positive id                 ─► NotFound              (store untouched)
//! DbError::NotFound               ─► NotFound
//! any other DbError               ─► InternalServerError   (logged)
//! ```

use std::sync::Arc;

use petstore_core::validation::{validate_pet_id, validate_pet_name};
use petstore_core::{NewPet, PetUpdate};
use petstore_db::PetRepository;
use tracing::{debug, error, info, warn};

use crate::api::{
    AddPetResponse, DeletePetResponse, GetPetByIdResponse, ListPetsResponse, Pet,
    UpdatePetParams, UpdatePetResponse,
};
use crate::error::ApiError;

const PET_NOT_FOUND: &str = "pet not found";

/// Pet use cases over an injected repository.
#[derive(Clone)]
pub struct PetService {
    repo: Arc<dyn PetRepository>,
}

impl PetService {
    /// Create a service over the given repository.
    pub fn new(repo: Arc<dyn PetRepository>) -> Self {
        PetService { repo }
    }

    /// Creates a pet. The client-supplied id, if any, is ignored.
    pub async fn add_pet(&self, pet: Pet) -> AddPetResponse {
        if let Err(e) = validate_pet_name(&pet.name) {
            warn!(error = %e, "Rejected new pet");
            return AddPetResponse::BadRequest(e.into());
        }

        let new_pet = NewPet {
            name: pet.name,
            status: pet.status,
        };

        match self.repo.add(new_pet).await {
            Ok(created) => {
                info!(id = created.id, name = %created.name, "Pet created");
                AddPetResponse::Ok(created.into())
            }
            Err(e) => {
                error!(error = %e, "Failed to create pet");
                AddPetResponse::InternalServerError(ApiError::internal("failed to create pet"))
            }
        }
    }

    /// Removes a pet.
    pub async fn delete_pet(&self, pet_id: i64) -> DeletePetResponse {
        if validate_pet_id(pet_id).is_err() {
            return DeletePetResponse::NotFound(ApiError::not_found(PET_NOT_FOUND));
        }

        match self.repo.delete(pet_id).await {
            Ok(()) => {
                info!(id = pet_id, "Pet deleted");
                DeletePetResponse::Ok
            }
            Err(e) if e.is_not_found() => {
                debug!(id = pet_id, "Delete of unknown pet");
                DeletePetResponse::NotFound(ApiError::not_found(PET_NOT_FOUND))
            }
            Err(e) => {
                error!(id = pet_id, error = %e, "Failed to delete pet");
                DeletePetResponse::InternalServerError(ApiError::internal("failed to delete pet"))
            }
        }
    }

    /// Fetches a pet.
    pub async fn get_pet_by_id(&self, pet_id: i64) -> GetPetByIdResponse {
        if validate_pet_id(pet_id).is_err() {
            return GetPetByIdResponse::NotFound(ApiError::not_found(PET_NOT_FOUND));
        }

        match self.repo.get_by_id(pet_id).await {
            Ok(pet) => GetPetByIdResponse::Ok(pet.into()),
            Err(e) if e.is_not_found() => {
                debug!(id = pet_id, "Pet not found");
                GetPetByIdResponse::NotFound(ApiError::not_found(PET_NOT_FOUND))
            }
            Err(e) => {
                error!(id = pet_id, error = %e, "Failed to fetch pet");
                GetPetByIdResponse::InternalServerError(ApiError::internal("failed to fetch pet"))
            }
        }
    }

    /// Renames a pet and, when given, changes its status.
    ///
    /// The name is required even though it travels as a query parameter.
    pub async fn update_pet(&self, params: UpdatePetParams) -> UpdatePetResponse {
        let name = match params.name {
            Some(name) => name,
            None => {
                warn!(id = params.pet_id, "Rejected update without a name");
                return UpdatePetResponse::BadRequest(ApiError::bad_request("name is required"));
            }
        };
        if let Err(e) = validate_pet_name(&name) {
            warn!(id = params.pet_id, error = %e, "Rejected pet update");
            return UpdatePetResponse::BadRequest(e.into());
        }
        if validate_pet_id(params.pet_id).is_err() {
            return UpdatePetResponse::NotFound(ApiError::not_found(PET_NOT_FOUND));
        }

        let update = PetUpdate {
            id: params.pet_id,
            name,
            status: params.status,
        };

        match self.repo.update(&update).await {
            Ok(()) => {
                info!(id = update.id, name = %update.name, "Pet updated");
                UpdatePetResponse::Ok
            }
            Err(e) if e.is_not_found() => {
                debug!(id = update.id, "Update of unknown pet");
                UpdatePetResponse::NotFound(ApiError::not_found(PET_NOT_FOUND))
            }
            Err(e) => {
                error!(id = update.id, error = %e, "Failed to update pet");
                UpdatePetResponse::InternalServerError(ApiError::internal("failed to update pet"))
            }
        }
    }

    /// Lists every pet in id order.
    pub async fn list_pets(&self) -> ListPetsResponse {
        match self.repo.list(None).await {
            Ok(pets) => {
                debug!(count = pets.len(), "Listed pets");
                ListPetsResponse::Ok(pets.into_iter().map(Pet::from).collect())
            }
            Err(e) => {
                error!(error = %e, "Failed to list pets");
                ListPetsResponse::InternalServerError(ApiError::internal("failed to list pets"))
            }
        }
    }

    /// Returns true if the repository can serve requests.
    pub async fn health(&self) -> bool {
        self.repo.health_check().await
    }
}

impl std::fmt::Debug for PetService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PetService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petstore_core::PetStatus;
    use petstore_db::{Database, DbConfig, InMemoryPetRepository};

    fn service() -> PetService {
        PetService::new(Arc::new(InMemoryPetRepository::new()))
    }

    fn named(name: &str) -> Pet {
        Pet {
            id: None,
            name: name.to_string(),
            status: None,
        }
    }

    #[tokio::test]
    async fn test_add_assigns_id_and_default_status() {
        let service = service();

        let created = match service.add_pet(named("Rex")).await {
            AddPetResponse::Ok(pet) => pet,
            other => panic!("unexpected response: {:?}", other),
        };
        assert_eq!(created.id, Some(1));
        assert_eq!(created.status, Some(PetStatus::Available));
    }

    #[tokio::test]
    async fn test_add_ignores_client_id() {
        let service = service();

        let mut pet = named("Rex");
        pet.id = Some(42);
        match service.add_pet(pet).await {
            AddPetResponse::Ok(created) => assert_eq!(created.id, Some(1)),
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_name_is_bad_request() {
        let service = service();

        assert!(matches!(
            service.add_pet(named("")).await,
            AddPetResponse::BadRequest(e) if e.message == "name is required"
        ));
        assert!(matches!(service.list_pets().await, ListPetsResponse::Ok(pets) if pets.is_empty()));
    }

    #[tokio::test]
    async fn test_whitespace_and_long_names_are_accepted() {
        let service = service();
        let long_name = "A".repeat(201);

        match service.add_pet(named("   ")).await {
            AddPetResponse::Ok(pet) => assert_eq!(pet.name, "   "),
            other => panic!("unexpected response: {:?}", other),
        }
        match service.add_pet(named(&long_name)).await {
            AddPetResponse::Ok(pet) => assert_eq!(pet.name, long_name),
            other => panic!("unexpected response: {:?}", other),
        }

        let response = service
            .update_pet(UpdatePetParams {
                pet_id: 1,
                name: Some("A".repeat(500)),
                status: None,
            })
            .await;
        assert_eq!(response, UpdatePetResponse::Ok);
    }

    #[tokio::test]
    async fn test_update_then_get() {
        let service = service();
        service.add_pet(named("Rex")).await;

        let response = service
            .update_pet(UpdatePetParams {
                pet_id: 1,
                name: Some("Max".to_string()),
                status: Some(PetStatus::Sold),
            })
            .await;
        assert_eq!(response, UpdatePetResponse::Ok);

        assert_eq!(
            service.get_pet_by_id(1).await,
            GetPetByIdResponse::Ok(Pet {
                id: Some(1),
                name: "Max".to_string(),
                status: Some(PetStatus::Sold),
            })
        );
    }

    #[tokio::test]
    async fn test_update_requires_name() {
        let service = service();
        service.add_pet(named("Rex")).await;

        let response = service
            .update_pet(UpdatePetParams {
                pet_id: 1,
                name: None,
                status: Some(PetStatus::Sold),
            })
            .await;
        assert!(matches!(response, UpdatePetResponse::BadRequest(_)));

        let response = service
            .update_pet(UpdatePetParams {
                pet_id: 1,
                name: Some(String::new()),
                status: None,
            })
            .await;
        assert!(matches!(response, UpdatePetResponse::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        let service = service();

        assert!(matches!(
            service.get_pet_by_id(7).await,
            GetPetByIdResponse::NotFound(e) if e.code == 404
        ));
        assert!(matches!(
            service.delete_pet(7).await,
            DeletePetResponse::NotFound(_)
        ));
        assert!(matches!(
            service
                .update_pet(UpdatePetParams {
                    pet_id: 7,
                    name: Some("Max".to_string()),
                    status: None,
                })
                .await,
            UpdatePetResponse::NotFound(_)
        ));
        assert!(matches!(
            service.get_pet_by_id(0).await,
            GetPetByIdResponse::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_pet() {
        let service = service();
        service.add_pet(named("Rex")).await;
        service.add_pet(named("Bella")).await;

        assert_eq!(service.delete_pet(1).await, DeletePetResponse::Ok);
        assert!(matches!(
            service.get_pet_by_id(1).await,
            GetPetByIdResponse::NotFound(_)
        ));

        match service.list_pets().await {
            ListPetsResponse::Ok(pets) => {
                assert_eq!(pets.len(), 1);
                assert_eq!(pets[0].id, Some(2));
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_storage_failure_is_internal_error() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let service = PetService::new(Arc::new(db.pets()));
        service.add_pet(named("Rex")).await;
        db.close().await;

        assert!(matches!(
            service.add_pet(named("Bella")).await,
            AddPetResponse::InternalServerError(e) if e.message == "failed to create pet"
        ));
        assert!(matches!(
            service.get_pet_by_id(1).await,
            GetPetByIdResponse::InternalServerError(e) if e.code == 500
        ));
        assert!(matches!(
            service
                .update_pet(UpdatePetParams {
                    pet_id: 1,
                    name: Some("Max".to_string()),
                    status: None,
                })
                .await,
            UpdatePetResponse::InternalServerError(_)
        ));
        assert!(matches!(
            service.delete_pet(1).await,
            DeletePetResponse::InternalServerError(_)
        ));
        assert!(matches!(
            service.list_pets().await,
            ListPetsResponse::InternalServerError(_)
        ));
        assert!(!service.health().await);
    }

    #[tokio::test]
    async fn test_health() {
        assert!(service().health().await);
    }
}
