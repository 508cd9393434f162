//! Handlers for the `/services` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utalii_core::error::CoreError;
use utalii_core::relations::EntityKind;
use utalii_core::types::DbId;
use utalii_core::validation::{non_blank_if_present, required_non_blank};
use utalii_db::graph::EntityGraph;
use utalii_db::models::service::{CreateService, UpdateService};
use utalii_db::repositories::ServiceRepo;
use utalii_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for `POST /services`.
#[derive(Debug, Deserialize)]
pub struct CreateServiceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub location: Option<String>,
}

/// `{ "services": [...] }` wrapper for `GET /services`.
#[derive(Debug, Serialize)]
pub struct ServiceList {
    pub services: Vec<Value>,
}

fn service_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Service",
        id,
    })
}

/// A service with its owning user nested.
async fn render_service(pool: &DbPool, id: DbId) -> AppResult<Value> {
    EntityGraph::load(pool)
        .await?
        .serialize(EntityKind::Service, id)
        .ok_or_else(|| service_not_found(id))
}

/// GET /services
pub async fn list_services(State(state): State<AppState>) -> AppResult<Json<ServiceList>> {
    let services = EntityGraph::load(&state.pool)
        .await?
        .serialize_all(EntityKind::Service);
    Ok(Json(ServiceList { services }))
}

/// POST /services
///
/// `name` and `description` are required and must not be blank.
pub async fn create_service(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateServiceRequest>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let name = required_non_blank(input.name, "name")?;
    let description = required_non_blank(input.description, "description")?;

    let service = ServiceRepo::create(
        &state.pool,
        &CreateService {
            name,
            description,
            image: input.image,
            location: input.location,
            user_id: None,
        },
    )
    .await?;

    tracing::info!(service_id = service.id, "Service created");

    let body = render_service(&state.pool, service.id).await?;
    Ok((StatusCode::CREATED, Json(body)))
}

/// PUT /services/{id}
///
/// Partial update: absent or null fields keep their stored value.
pub async fn update_service(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateService>,
) -> AppResult<Json<Value>> {
    non_blank_if_present(input.name.as_deref(), "name")?;
    non_blank_if_present(input.description.as_deref(), "description")?;

    ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| service_not_found(id))?;

    tracing::info!(service_id = id, "Service updated");

    Ok(Json(render_service(&state.pool, id).await?))
}

/// DELETE /services/{id}
pub async fn delete_service(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ServiceRepo::delete(&state.pool, id).await? {
        return Err(service_not_found(id));
    }

    tracing::info!(service_id = id, "Service deleted");

    Ok(Json(MessageResponse::new("Service deleted successfully!")))
}
