//! # HTTP Routes
//!
//! Axum handlers for the pet API and the router that wires them together.
//!
//! ## Router Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TraceLayer                                                             │
//! │  └── cors                                                               │
//! │      ├── GET    /health                                                 │
//! │      └── require_auth (only when an identity provider is configured)    │
//! │          ├── POST   /pets                 add_pet                       │
//! │          ├── GET    /pets                 list_pets                     │
//! │          ├── GET    /pets/{pet_id}        get_pet_by_id                 │
//! │          ├── PUT    /pets/{pet_id}?name=&status=   update_pet           │
//! │          └── DELETE /pets/{pet_id}        delete_pet                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Extractor failures (malformed JSON, non-integer id, unknown status) are
//! answered with a 400 carrying the usual `{ code, message }` body.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::api::{Pet, UpdatePetParams, UpdatePetQuery};
use crate::error::ApiError;
use crate::middleware::{cors, require_auth};
use crate::AppState;

/// Builds the application router over the given state.
pub fn build_router(state: AppState) -> Router {
    let mut pets = Router::new()
        .route("/pets", get(list_pets).post(add_pet))
        .route(
            "/pets/{pet_id}",
            get(get_pet_by_id).put(update_pet).delete(delete_pet),
        );

    if let Some(identity) = state.identity.clone() {
        pets = pets.route_layer(axum::middleware::from_fn_with_state(identity, require_auth));
    }

    Router::new()
        .route("/health", get(health))
        .merge(pets)
        .with_state(state)
        .layer(axum::middleware::from_fn(cors))
        .layer(TraceLayer::new_for_http())
}

fn rejected(rejection: impl std::fmt::Display) -> Response {
    debug!(%rejection, "Rejected malformed request");
    ApiError::bad_request(rejection.to_string()).into_response()
}

async fn add_pet(
    State(state): State<AppState>,
    body: Result<Json<Pet>, JsonRejection>,
) -> Response {
    match body {
        Ok(Json(pet)) => state.service.add_pet(pet).await.into_response(),
        Err(rejection) => rejected(rejection.body_text()),
    }
}

async fn list_pets(State(state): State<AppState>) -> Response {
    state.service.list_pets().await.into_response()
}

async fn get_pet_by_id(
    State(state): State<AppState>,
    pet_id: Result<Path<i64>, PathRejection>,
) -> Response {
    match pet_id {
        Ok(Path(pet_id)) => state.service.get_pet_by_id(pet_id).await.into_response(),
        Err(rejection) => rejected(rejection.body_text()),
    }
}

async fn update_pet(
    State(state): State<AppState>,
    pet_id: Result<Path<i64>, PathRejection>,
    query: Result<Query<UpdatePetQuery>, QueryRejection>,
) -> Response {
    let pet_id = match pet_id {
        Ok(Path(pet_id)) => pet_id,
        Err(rejection) => return rejected(rejection.body_text()),
    };
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return rejected(rejection.body_text()),
    };

    state
        .service
        .update_pet(UpdatePetParams::new(pet_id, query))
        .await
        .into_response()
}

async fn delete_pet(
    State(state): State<AppState>,
    pet_id: Result<Path<i64>, PathRejection>,
) -> Response {
    match pet_id {
        Ok(Path(pet_id)) => state.service.delete_pet(pet_id).await.into_response(),
        Err(rejection) => rejected(rejection.body_text()),
    }
}

async fn health(State(state): State<AppState>) -> Response {
    if state.service.health().await {
        (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable" })),
        )
            .into_response()
    }
}
