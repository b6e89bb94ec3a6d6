use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::handlers::EndpointResponse;
use crate::models::{ApiInterface, InterfaceFields};
use crate::state::AppState;

// ============ Request/Response DTOs ============

/// Body for create and full update. Every field is optional; unknown fields
/// (id, timestamps) are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct InterfaceRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub interface_type: Option<String>,
    pub base_url: Option<String>,
    pub description: Option<String>,
    pub auth_type: Option<String>,
    /// Defaults to true when omitted
    pub is_active: Option<bool>,
}

impl From<InterfaceRequest> for InterfaceFields {
    fn from(r: InterfaceRequest) -> Self {
        Self {
            name: r.name,
            interface_type: r.interface_type,
            base_url: r.base_url,
            description: r.description,
            auth_type: r.auth_type,
            is_active: r.is_active.unwrap_or(true),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InterfaceResponse {
    pub id: i64,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub interface_type: Option<String>,
    pub base_url: Option<String>,
    pub description: Option<String>,
    pub auth_type: Option<String>,
    pub is_active: bool,
    #[schema(value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[schema(value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<ApiInterface> for InterfaceResponse {
    fn from(i: ApiInterface) -> Self {
        Self {
            id: i.id,
            name: i.name,
            interface_type: i.interface_type,
            base_url: i.base_url,
            description: i.description,
            auth_type: i.auth_type,
            is_active: i.is_active,
            created_at: i.created_at,
            updated_at: i.updated_at,
        }
    }
}

fn interface_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Api interface {}", id))
}

// ============ Handlers ============

/// List all API interfaces
#[utoipa::path(
    get,
    path = "/api/interfaces",
    responses(
        (status = 200, description = "All API interfaces", body = [InterfaceResponse])
    ),
    tag = "Interfaces"
)]
pub async fn list_interfaces(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<InterfaceResponse>>> {
    let interfaces = state.catalog.list_interfaces().await?;
    Ok(Json(interfaces.into_iter().map(|i| i.into()).collect()))
}

/// List interfaces with more than five endpoints
#[utoipa::path(
    get,
    path = "/api/interfaces/large",
    responses(
        (status = 200, description = "Large API interfaces", body = [InterfaceResponse])
    ),
    tag = "Interfaces"
)]
pub async fn list_large_interfaces(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<InterfaceResponse>>> {
    let interfaces = state.catalog.list_large_interfaces().await?;
    Ok(Json(interfaces.into_iter().map(|i| i.into()).collect()))
}

/// Get an API interface by ID
#[utoipa::path(
    get,
    path = "/api/interfaces/{id}",
    params(
        ("id" = i64, Path, description = "Interface ID")
    ),
    responses(
        (status = 200, description = "Interface details", body = InterfaceResponse),
        (status = 404, description = "Interface not found")
    ),
    tag = "Interfaces"
)]
pub async fn get_interface(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<InterfaceResponse>> {
    let interface = state
        .catalog
        .get_interface(id)
        .await?
        .ok_or_else(|| interface_not_found(id))?;

    Ok(Json(interface.into()))
}

/// Get an API interface by its exact name
#[utoipa::path(
    get,
    path = "/api/interfaces/name/{name}",
    params(
        ("name" = String, Path, description = "Interface name (case-sensitive)")
    ),
    responses(
        (status = 200, description = "Interface details", body = InterfaceResponse),
        (status = 404, description = "Interface not found")
    ),
    tag = "Interfaces"
)]
pub async fn get_interface_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<InterfaceResponse>> {
    let interface = state
        .catalog
        .get_interface_by_name(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Api interface '{}'", name)))?;

    Ok(Json(interface.into()))
}

/// List the endpoints of an API interface
#[utoipa::path(
    get,
    path = "/api/interfaces/{id}/endpoints",
    params(
        ("id" = i64, Path, description = "Interface ID")
    ),
    responses(
        (status = 200, description = "Endpoints of the interface (empty if unknown)", body = [EndpointResponse])
    ),
    tag = "Interfaces"
)]
pub async fn list_interface_endpoints(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<EndpointResponse>>> {
    let endpoints = state.catalog.list_endpoints(id).await?;
    Ok(Json(endpoints.into_iter().map(|e| e.into()).collect()))
}

/// Register a new API interface
#[utoipa::path(
    post,
    path = "/api/interfaces",
    request_body = InterfaceRequest,
    responses(
        (status = 201, description = "Interface created", body = InterfaceResponse),
        (status = 400, description = "An interface with this name already exists")
    ),
    tag = "Interfaces"
)]
pub async fn create_interface(
    State(state): State<AppState>,
    Json(payload): Json<InterfaceRequest>,
) -> AppResult<(StatusCode, Json<InterfaceResponse>)> {
    let fields: InterfaceFields = payload.into();
    let interface = state.catalog.create_interface(&fields).await?;
    Ok((StatusCode::CREATED, Json(interface.into())))
}

/// Replace the attributes of an API interface
#[utoipa::path(
    put,
    path = "/api/interfaces/{id}",
    params(
        ("id" = i64, Path, description = "Interface ID")
    ),
    request_body = InterfaceRequest,
    responses(
        (status = 200, description = "Interface updated", body = InterfaceResponse),
        (status = 404, description = "Interface not found")
    ),
    tag = "Interfaces"
)]
pub async fn update_interface(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<InterfaceRequest>,
) -> AppResult<Json<InterfaceResponse>> {
    let fields: InterfaceFields = payload.into();
    let interface = state.catalog.update_interface(id, &fields).await?;
    Ok(Json(interface.into()))
}

/// Delete an API interface and all of its endpoints
#[utoipa::path(
    delete,
    path = "/api/interfaces/{id}",
    params(
        ("id" = i64, Path, description = "Interface ID")
    ),
    responses(
        (status = 204, description = "Interface deleted"),
        (status = 404, description = "Interface not found")
    ),
    tag = "Interfaces"
)]
pub async fn delete_interface(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.catalog.delete_interface(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
