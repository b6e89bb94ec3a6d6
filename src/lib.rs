// Library crate for the API Hub catalog service
// Exports modules for use by the server binary and tests

pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;

use axum::{
    http::HeaderValue,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_endpoint, create_interface, delete_endpoint, delete_interface, get_endpoint,
    get_interface, get_interface_by_name, home, list_interface_endpoints, list_interfaces,
    list_large_interfaces, update_endpoint, update_interface,
};
use crate::state::AppState;

/// CORS for the configured frontend origins, credentials allowed
pub fn build_cors(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors(&state.config.cors_allowed_origins);

    Router::new()
        .route("/", get(home))
        // Interface routes
        .route("/api/interfaces", get(list_interfaces))
        .route("/api/interfaces", post(create_interface))
        .route("/api/interfaces/large", get(list_large_interfaces))
        .route("/api/interfaces/name/{name}", get(get_interface_by_name))
        .route("/api/interfaces/{id}", get(get_interface))
        .route("/api/interfaces/{id}", put(update_interface))
        .route("/api/interfaces/{id}", delete(delete_interface))
        // Endpoint routes (nested under interfaces)
        .route(
            "/api/interfaces/{id}/endpoints",
            get(list_interface_endpoints),
        )
        .route("/api/interfaces/{id}/endpoints", post(create_endpoint))
        // Endpoint routes (direct access)
        .route("/api/endpoints/{id}", get(get_endpoint))
        .route("/api/endpoints/{id}", put(update_endpoint))
        .route("/api/endpoints/{id}", delete(delete_endpoint))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
