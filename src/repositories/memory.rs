use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;

use crate::error::{AppError, AppResult};
use crate::models::{
    ApiEndpoint, ApiInterface, EndpointFields, InterfaceFields, LARGE_INTERFACE_THRESHOLD,
};
use crate::repositories::CatalogStore;

/// In-memory catalog store for tests and local runs.
///
/// Each operation holds the lock for its whole duration, which gives the same
/// per-call atomicity as a database transaction.
#[derive(Clone)]
pub struct InMemoryCatalogStore {
    inner: Arc<Mutex<InMemoryCatalogInner>>,
}

struct InMemoryCatalogInner {
    next_interface_id: i64,
    next_endpoint_id: i64,
    interfaces: BTreeMap<i64, ApiInterface>,
    endpoints: BTreeMap<i64, ApiEndpoint>,
}

impl InMemoryCatalogInner {
    fn endpoint_count(&self, interface_id: i64) -> u64 {
        self.endpoints
            .values()
            .filter(|e| e.api_interface_id == interface_id)
            .count() as u64
    }
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(InMemoryCatalogInner {
                next_interface_id: 1,
                next_endpoint_id: 1,
                interfaces: BTreeMap::new(),
                endpoints: BTreeMap::new(),
            })),
        }
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn save_interface(
        &self,
        id: Option<i64>,
        fields: &InterfaceFields,
    ) -> AppResult<ApiInterface> {
        let now = OffsetDateTime::now_utc();
        let mut inner = self.inner.lock().await;

        match id {
            None => {
                let id = inner.next_interface_id;
                inner.next_interface_id += 1;
                let interface = ApiInterface::from_fields(id, fields, now);
                inner.interfaces.insert(id, interface.clone());
                Ok(interface)
            }
            Some(id) => {
                let interface = inner
                    .interfaces
                    .get_mut(&id)
                    .ok_or_else(|| AppError::NotFound(format!("Api interface {}", id)))?;
                interface.apply(fields, now);
                Ok(interface.clone())
            }
        }
    }

    async fn find_all_interfaces(&self) -> AppResult<Vec<ApiInterface>> {
        let inner = self.inner.lock().await;
        Ok(inner.interfaces.values().cloned().collect())
    }

    async fn find_interface_by_id(&self, id: i64) -> AppResult<Option<ApiInterface>> {
        let inner = self.inner.lock().await;
        Ok(inner.interfaces.get(&id).cloned())
    }

    async fn find_interface_by_name(
        &self,
        name: Option<&str>,
    ) -> AppResult<Option<ApiInterface>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .interfaces
            .values()
            .find(|i| i.name.as_deref() == name)
            .cloned())
    }

    async fn find_large_interfaces(&self) -> AppResult<Vec<ApiInterface>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .interfaces
            .values()
            .filter(|i| inner.endpoint_count(i.id) > LARGE_INTERFACE_THRESHOLD)
            .cloned()
            .collect())
    }

    async fn delete_interface_by_id(&self, id: i64) -> AppResult<bool> {
        let mut inner = self.inner.lock().await;

        if !inner.interfaces.contains_key(&id) {
            return Ok(false);
        }

        inner.endpoints.retain(|_, e| e.api_interface_id != id);
        inner.interfaces.remove(&id);
        Ok(true)
    }

    async fn exists_interface_by_id(&self, id: i64) -> AppResult<bool> {
        let inner = self.inner.lock().await;
        Ok(inner.interfaces.contains_key(&id))
    }

    async fn find_endpoints_by_interface_id(
        &self,
        interface_id: i64,
    ) -> AppResult<Vec<ApiEndpoint>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .endpoints
            .values()
            .filter(|e| e.api_interface_id == interface_id)
            .cloned()
            .collect())
    }

    async fn find_endpoint_by_id(&self, id: i64) -> AppResult<Option<ApiEndpoint>> {
        let inner = self.inner.lock().await;
        Ok(inner.endpoints.get(&id).cloned())
    }

    async fn insert_endpoint(
        &self,
        interface_id: i64,
        fields: &EndpointFields,
    ) -> AppResult<ApiEndpoint> {
        let now = OffsetDateTime::now_utc();
        let mut inner = self.inner.lock().await;

        // Same outcome as the foreign key on api_endpoints.api_id
        if !inner.interfaces.contains_key(&interface_id) {
            return Err(AppError::Database(format!(
                "foreign key violation: api interface {} does not exist",
                interface_id
            )));
        }

        let id = inner.next_endpoint_id;
        inner.next_endpoint_id += 1;
        let endpoint = ApiEndpoint::from_fields(id, interface_id, fields, now);
        inner.endpoints.insert(id, endpoint.clone());
        Ok(endpoint)
    }

    async fn update_endpoint(&self, id: i64, fields: &EndpointFields) -> AppResult<ApiEndpoint> {
        let now = OffsetDateTime::now_utc();
        let mut inner = self.inner.lock().await;

        let endpoint = inner
            .endpoints
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Api endpoint {}", id)))?;
        endpoint.apply(fields, now);
        Ok(endpoint.clone())
    }

    async fn delete_endpoint_by_id(&self, id: i64) -> AppResult<bool> {
        let mut inner = self.inner.lock().await;
        Ok(inner.endpoints.remove(&id).is_some())
    }
}
