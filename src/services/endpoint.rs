use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{ApiEndpoint, EndpointFields};
use crate::repositories::CatalogStore;

/// Endpoint lifecycle, following the same rules as interface CRUD
#[derive(Clone)]
pub struct EndpointService {
    store: Arc<dyn CatalogStore>,
}

impl EndpointService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub async fn get_endpoint(&self, id: i64) -> AppResult<Option<ApiEndpoint>> {
        self.store.find_endpoint_by_id(id).await
    }

    /// Attach a new endpoint to an existing interface
    pub async fn create_endpoint(
        &self,
        interface_id: i64,
        fields: &EndpointFields,
    ) -> AppResult<ApiEndpoint> {
        if !self.store.exists_interface_by_id(interface_id).await? {
            tracing::warn!(interface_id, "Endpoint for unknown interface");
            return Err(AppError::NotFound(format!("Api interface {}", interface_id)));
        }

        let created = self.store.insert_endpoint(interface_id, fields).await?;
        tracing::info!(
            interface_id,
            endpoint_id = created.id,
            "Endpoint created"
        );
        Ok(created)
    }

    /// Replace the mutable attributes of an endpoint; its owner never changes
    pub async fn update_endpoint(&self, id: i64, fields: &EndpointFields) -> AppResult<ApiEndpoint> {
        if self.store.find_endpoint_by_id(id).await?.is_none() {
            tracing::warn!(endpoint_id = id, "Update of unknown endpoint");
            return Err(AppError::NotFound(format!("Api endpoint {}", id)));
        }

        let updated = self.store.update_endpoint(id, fields).await?;
        tracing::info!(endpoint_id = id, "Endpoint updated");
        Ok(updated)
    }

    pub async fn delete_endpoint(&self, id: i64) -> AppResult<()> {
        if !self.store.delete_endpoint_by_id(id).await? {
            tracing::warn!(endpoint_id = id, "Delete of unknown endpoint");
            return Err(AppError::NotFound(format!("Api endpoint {}", id)));
        }

        tracing::info!(endpoint_id = id, "Endpoint deleted");
        Ok(())
    }
}
