use api_hub::models::{ApiEndpoint, ApiInterface, EndpointFields, InterfaceFields};
use api_hub::state::AppState;
use std::sync::atomic::{AtomicU64, Ordering};

static NAME_COUNTER: AtomicU64 = AtomicU64::new(1);

/// A name unique to this test run, also across runs sharing one database
pub fn unique_name(prefix: &str) -> String {
    format!(
        "{} {}-{}",
        prefix,
        time::OffsetDateTime::now_utc().unix_timestamp_nanos(),
        NAME_COUNTER.fetch_add(1, Ordering::Relaxed)
    )
}

/// Factory for creating test data
pub struct Factory<'a> {
    state: &'a AppState,
}

impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Create an interface with a unique name
    pub async fn create_interface(&self) -> ApiInterface {
        self.create_interface_with_name(&unique_name("Test API"))
            .await
    }

    /// Create an interface with a specific name
    pub async fn create_interface_with_name(&self, name: &str) -> ApiInterface {
        let fields = InterfaceFields {
            name: Some(name.to_string()),
            interface_type: Some("REST".to_string()),
            base_url: Some("https://api.test.example".to_string()),
            description: Some("Test interface description".to_string()),
            auth_type: Some("NONE".to_string()),
            is_active: true,
        };

        self.state.catalog.create_interface(&fields).await.unwrap()
    }

    /// Create a GET endpoint under an interface
    pub async fn create_endpoint(&self, interface_id: i64, path: &str) -> ApiEndpoint {
        self.state
            .endpoints
            .create_endpoint(interface_id, &EndpointFields::new("GET", path))
            .await
            .unwrap()
    }

    /// Create `count` endpoints under an interface
    pub async fn create_endpoints(&self, interface_id: i64, count: usize) -> Vec<ApiEndpoint> {
        let mut endpoints = Vec::with_capacity(count);
        for n in 0..count {
            endpoints.push(
                self.create_endpoint(interface_id, &format!("/resource/{}", n))
                    .await,
            );
        }
        endpoints
    }
}
