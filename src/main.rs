use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_hub::config::Config;
use api_hub::handlers::{
    EndpointRequest, EndpointResponse, InterfaceRequest, InterfaceResponse, ServiceEndpoints,
    ServiceInfo,
};
use api_hub::state::AppState;
use api_hub::{build_router, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::home::home,
        handlers::interface::list_interfaces,
        handlers::interface::list_large_interfaces,
        handlers::interface::get_interface,
        handlers::interface::get_interface_by_name,
        handlers::interface::list_interface_endpoints,
        handlers::interface::create_interface,
        handlers::interface::update_interface,
        handlers::interface::delete_interface,
        handlers::endpoint::create_endpoint,
        handlers::endpoint::get_endpoint,
        handlers::endpoint::update_endpoint,
        handlers::endpoint::delete_endpoint,
    ),
    components(schemas(
        ServiceInfo,
        ServiceEndpoints,
        InterfaceRequest,
        InterfaceResponse,
        EndpointRequest,
        EndpointResponse,
    )),
    tags(
        (name = "Health", description = "Service information"),
        (name = "Interfaces", description = "API interface catalog"),
        (name = "Endpoints", description = "Endpoints of cataloged interfaces")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    let addr = config.server_addr();

    // Initialize application state (runs migrations, opens the pool)
    tracing::info!("Connecting to database...");
    let state = AppState::new(config)
        .await
        .expect("Failed to initialize application state");
    tracing::info!("Database connection established");

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app)
        .await
        .expect("Server error");
}
