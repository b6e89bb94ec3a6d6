pub mod api_endpoint;
pub mod api_interface;
pub mod memory;
pub mod postgres;

pub use api_endpoint::ApiEndpointRepository;
pub use api_interface::ApiInterfaceRepository;
pub use memory::InMemoryCatalogStore;
pub use postgres::PgCatalogStore;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{ApiEndpoint, ApiInterface, EndpointFields, InterfaceFields};

/// Storage backend for interfaces and their endpoints.
///
/// Every call is atomic on its own. Name uniqueness is not enforced here.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Insert (`id == None`) or overwrite the mutable fields of an interface.
    /// Both paths stamp `updated_at`; an update of a missing id is `NotFound`.
    async fn save_interface(
        &self,
        id: Option<i64>,
        fields: &InterfaceFields,
    ) -> AppResult<ApiInterface>;

    /// All interfaces, ascending id
    async fn find_all_interfaces(&self) -> AppResult<Vec<ApiInterface>>;

    async fn find_interface_by_id(&self, id: i64) -> AppResult<Option<ApiInterface>>;

    /// Exact, case-sensitive match. Lowest id wins if the name is duplicated.
    /// `None` matches interfaces stored without a name.
    async fn find_interface_by_name(&self, name: Option<&str>)
        -> AppResult<Option<ApiInterface>>;

    /// Interfaces whose current endpoint count exceeds the large threshold
    async fn find_large_interfaces(&self) -> AppResult<Vec<ApiInterface>>;

    /// Delete the interface and every endpoint it owns as one unit.
    /// Returns `false` (and removes nothing) when the interface does not exist.
    async fn delete_interface_by_id(&self, id: i64) -> AppResult<bool>;

    async fn exists_interface_by_id(&self, id: i64) -> AppResult<bool>;

    /// Endpoints owned by an interface, ascending id
    async fn find_endpoints_by_interface_id(&self, interface_id: i64)
        -> AppResult<Vec<ApiEndpoint>>;

    async fn find_endpoint_by_id(&self, id: i64) -> AppResult<Option<ApiEndpoint>>;

    /// Attach a new endpoint to an existing interface
    async fn insert_endpoint(
        &self,
        interface_id: i64,
        fields: &EndpointFields,
    ) -> AppResult<ApiEndpoint>;

    async fn update_endpoint(&self, id: i64, fields: &EndpointFields) -> AppResult<ApiEndpoint>;

    async fn delete_endpoint_by_id(&self, id: i64) -> AppResult<bool>;
}
