use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::error::AppResult;
use crate::models::{ApiEndpoint, ApiInterface, EndpointFields, InterfaceFields};
use crate::repositories::{ApiEndpointRepository, ApiInterfaceRepository, CatalogStore};

/// PostgreSQL-backed catalog store (SeaORM)
#[derive(Clone)]
pub struct PgCatalogStore {
    db: DatabaseConnection,
}

impl PgCatalogStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn save_interface(
        &self,
        id: Option<i64>,
        fields: &InterfaceFields,
    ) -> AppResult<ApiInterface> {
        let Some(id) = id else {
            return ApiInterfaceRepository::create(&self.db, fields).await;
        };

        // Read-modify-write in one transaction; an early return drops `txn`, which rolls back
        let txn = self.db.begin().await?;
        let updated = ApiInterfaceRepository::update(&txn, id, fields).await?;
        txn.commit().await?;

        Ok(updated)
    }

    async fn find_all_interfaces(&self) -> AppResult<Vec<ApiInterface>> {
        ApiInterfaceRepository::list(&self.db).await
    }

    async fn find_interface_by_id(&self, id: i64) -> AppResult<Option<ApiInterface>> {
        ApiInterfaceRepository::find_by_id(&self.db, id).await
    }

    async fn find_interface_by_name(
        &self,
        name: Option<&str>,
    ) -> AppResult<Option<ApiInterface>> {
        ApiInterfaceRepository::find_by_name(&self.db, name).await
    }

    async fn find_large_interfaces(&self) -> AppResult<Vec<ApiInterface>> {
        ApiInterfaceRepository::list_large(&self.db).await
    }

    async fn delete_interface_by_id(&self, id: i64) -> AppResult<bool> {
        let txn = self.db.begin().await?;

        if !ApiInterfaceRepository::exists(&txn, id).await? {
            txn.rollback().await?;
            return Ok(false);
        }

        // Endpoints first, then the owner, committed together
        let removed_endpoints = ApiEndpointRepository::delete_by_interface(&txn, id).await?;
        let deleted = ApiInterfaceRepository::delete(&txn, id).await?;
        txn.commit().await?;

        tracing::debug!(interface_id = id, removed_endpoints, "Interface delete committed");
        Ok(deleted)
    }

    async fn exists_interface_by_id(&self, id: i64) -> AppResult<bool> {
        ApiInterfaceRepository::exists(&self.db, id).await
    }

    async fn find_endpoints_by_interface_id(
        &self,
        interface_id: i64,
    ) -> AppResult<Vec<ApiEndpoint>> {
        ApiEndpointRepository::list_by_interface(&self.db, interface_id).await
    }

    async fn find_endpoint_by_id(&self, id: i64) -> AppResult<Option<ApiEndpoint>> {
        ApiEndpointRepository::find_by_id(&self.db, id).await
    }

    async fn insert_endpoint(
        &self,
        interface_id: i64,
        fields: &EndpointFields,
    ) -> AppResult<ApiEndpoint> {
        ApiEndpointRepository::create(&self.db, interface_id, fields).await
    }

    async fn update_endpoint(&self, id: i64, fields: &EndpointFields) -> AppResult<ApiEndpoint> {
        let txn = self.db.begin().await?;
        let updated = ApiEndpointRepository::update(&txn, id, fields).await?;
        txn.commit().await?;

        Ok(updated)
    }

    async fn delete_endpoint_by_id(&self, id: i64) -> AppResult<bool> {
        ApiEndpointRepository::delete(&self.db, id).await
    }
}
