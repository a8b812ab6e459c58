//! # API Contract
//!
//! Request/response shapes of the pet HTTP API and one response enum per
//! operation. Each enum lists every outcome its operation can have, and its
//! `IntoResponse` impl fixes the status code for each.
//!
//! ## Operations
//! ```text
//! ┌──────────────┬────────────────────────┬──────────────────────────────────┐
//! │ Operation    │ Route                  │ Variants                         │
//! ├──────────────┼────────────────────────┼──────────────────────────────────┤
//! │ addPet       │ POST   /pets           │ Ok(Pet) BadRequest Internal      │
//! │ listPets     │ GET    /pets           │ Ok([Pet]) Internal               │
//! │ getPetById   │ GET    /pets/{petId}   │ Ok(Pet) NotFound Internal        │
//! │ updatePet    │ PUT    /pets/{petId}   │ Ok BadRequest NotFound Internal  │
//! │ deletePet    │ DELETE /pets/{petId}   │ Ok NotFound Internal             │
//! └──────────────┴────────────────────────┴──────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use petstore_core::PetStatus;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// =============================================================================
// Schemas
// =============================================================================

/// Pet as it appears on the wire.
///
/// `id` is absent in create requests and always present in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PetStatus>,
}

impl From<petstore_core::Pet> for Pet {
    fn from(pet: petstore_core::Pet) -> Self {
        Pet {
            id: Some(pet.id),
            name: pet.name,
            status: Some(pet.status),
        }
    }
}

/// Query string of `PUT /pets/{petId}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePetQuery {
    pub name: Option<String>,
    pub status: Option<PetStatus>,
}

/// Parameters of the updatePet operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePetParams {
    pub pet_id: i64,
    pub name: Option<String>,
    pub status: Option<PetStatus>,
}

impl UpdatePetParams {
    /// Combines the path id with the query string.
    pub fn new(pet_id: i64, query: UpdatePetQuery) -> Self {
        UpdatePetParams {
            pet_id,
            name: query.name,
            status: query.status,
        }
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Outcome of addPet.
#[derive(Debug, PartialEq, Eq)]
pub enum AddPetResponse {
    Ok(Pet),
    BadRequest(ApiError),
    InternalServerError(ApiError),
}

/// Outcome of listPets.
#[derive(Debug, PartialEq, Eq)]
pub enum ListPetsResponse {
    Ok(Vec<Pet>),
    InternalServerError(ApiError),
}

/// Outcome of getPetById.
#[derive(Debug, PartialEq, Eq)]
pub enum GetPetByIdResponse {
    Ok(Pet),
    NotFound(ApiError),
    InternalServerError(ApiError),
}

/// Outcome of updatePet. Success has no body.
#[derive(Debug, PartialEq, Eq)]
pub enum UpdatePetResponse {
    Ok,
    BadRequest(ApiError),
    NotFound(ApiError),
    InternalServerError(ApiError),
}

/// Outcome of deletePet. Success has no body.
#[derive(Debug, PartialEq, Eq)]
pub enum DeletePetResponse {
    Ok,
    NotFound(ApiError),
    InternalServerError(ApiError),
}

impl IntoResponse for AddPetResponse {
    fn into_response(self) -> Response {
        match self {
            AddPetResponse::Ok(pet) => (StatusCode::OK, Json(pet)).into_response(),
            AddPetResponse::BadRequest(e) | AddPetResponse::InternalServerError(e) => {
                e.into_response()
            }
        }
    }
}

impl IntoResponse for ListPetsResponse {
    fn into_response(self) -> Response {
        match self {
            ListPetsResponse::Ok(pets) => (StatusCode::OK, Json(pets)).into_response(),
            ListPetsResponse::InternalServerError(e) => e.into_response(),
        }
    }
}

impl IntoResponse for GetPetByIdResponse {
    fn into_response(self) -> Response {
        match self {
            GetPetByIdResponse::Ok(pet) => (StatusCode::OK, Json(pet)).into_response(),
            GetPetByIdResponse::NotFound(e) | GetPetByIdResponse::InternalServerError(e) => {
                e.into_response()
            }
        }
    }
}

impl IntoResponse for UpdatePetResponse {
    fn into_response(self) -> Response {
        match self {
            UpdatePetResponse::Ok => StatusCode::OK.into_response(),
            UpdatePetResponse::BadRequest(e)
            | UpdatePetResponse::NotFound(e)
            | UpdatePetResponse::InternalServerError(e) => e.into_response(),
        }
    }
}

impl IntoResponse for DeletePetResponse {
    fn into_response(self) -> Response {
        match self {
            DeletePetResponse::Ok => StatusCode::OK.into_response(),
            DeletePetResponse::NotFound(e) | DeletePetResponse::InternalServerError(e) => {
                e.into_response()
            }
        }
    }
}
