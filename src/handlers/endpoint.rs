use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::models::{ApiEndpoint, EndpointFields};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EndpointRequest {
    pub http_method: Option<String>,
    pub path: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub request_example: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub response_example: Option<Value>,
    pub is_active: Option<bool>,
}

impl From<EndpointRequest> for EndpointFields {
    fn from(r: EndpointRequest) -> Self {
        Self {
            http_method: r.http_method,
            path: r.path,
            description: r.description,
            request_example: r.request_example,
            response_example: r.response_example,
            is_active: r.is_active.unwrap_or(true),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EndpointResponse {
    pub id: i64,
    /// ID of the owning interface
    pub api_interface: i64,
    pub http_method: Option<String>,
    pub path: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub request_example: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub response_example: Option<Value>,
    pub is_active: bool,
    #[schema(value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[schema(value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<ApiEndpoint> for EndpointResponse {
    fn from(e: ApiEndpoint) -> Self {
        Self {
            id: e.id,
            api_interface: e.api_interface_id,
            http_method: e.http_method,
            path: e.path,
            description: e.description,
            request_example: e.request_example,
            response_example: e.response_example,
            is_active: e.is_active,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

// ============ Handlers ============

/// Add an endpoint to an API interface
#[utoipa::path(
    post,
    path = "/api/interfaces/{id}/endpoints",
    params(
        ("id" = i64, Path, description = "Owning interface ID")
    ),
    request_body = EndpointRequest,
    responses(
        (status = 201, description = "Endpoint created", body = EndpointResponse),
        (status = 404, description = "Interface not found")
    ),
    tag = "Endpoints"
)]
pub async fn create_endpoint(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EndpointRequest>,
) -> AppResult<(StatusCode, Json<EndpointResponse>)> {
    let fields: EndpointFields = payload.into();
    let endpoint = state.endpoints.create_endpoint(id, &fields).await?;
    Ok((StatusCode::CREATED, Json(endpoint.into())))
}

/// Get an endpoint by ID
#[utoipa::path(
    get,
    path = "/api/endpoints/{id}",
    params(
        ("id" = i64, Path, description = "Endpoint ID")
    ),
    responses(
        (status = 200, description = "Endpoint details", body = EndpointResponse),
        (status = 404, description = "Endpoint not found")
    ),
    tag = "Endpoints"
)]
pub async fn get_endpoint(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<EndpointResponse>> {
    let endpoint = state
        .endpoints
        .get_endpoint(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Api endpoint {}", id)))?;

    Ok(Json(endpoint.into()))
}

/// Replace the attributes of an endpoint
#[utoipa::path(
    put,
    path = "/api/endpoints/{id}",
    params(
        ("id" = i64, Path, description = "Endpoint ID")
    ),
    request_body = EndpointRequest,
    responses(
        (status = 200, description = "Endpoint updated", body = EndpointResponse),
        (status = 404, description = "Endpoint not found")
    ),
    tag = "Endpoints"
)]
pub async fn update_endpoint(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EndpointRequest>,
) -> AppResult<Json<EndpointResponse>> {
    let fields: EndpointFields = payload.into();
    let endpoint = state.endpoints.update_endpoint(id, &fields).await?;
    Ok(Json(endpoint.into()))
}

/// Delete an endpoint
#[utoipa::path(
    delete,
    path = "/api/endpoints/{id}",
    params(
        ("id" = i64, Path, description = "Endpoint ID")
    ),
    responses(
        (status = 204, description = "Endpoint deleted"),
        (status = 404, description = "Endpoint not found")
    ),
    tag = "Endpoints"
)]
pub async fn delete_endpoint(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.endpoints.delete_endpoint(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
