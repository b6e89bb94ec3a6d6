use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpoints {
    pub api_interfaces: String,
    pub documentation: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: ServiceEndpoints,
}

/// Static service information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service name, version and entry points", body = ServiceInfo)
    ),
    tag = "Health"
)]
pub async fn home() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Mini API Hub Backend API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ServiceEndpoints {
            api_interfaces: "/api/interfaces".to_string(),
            documentation: "API endpoints are available at /api/interfaces".to_string(),
        },
    })
}
