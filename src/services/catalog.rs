use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{ApiEndpoint, ApiInterface, InterfaceFields};
use crate::repositories::CatalogStore;

/// Business rules for API interfaces on top of a `CatalogStore`
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// All registered interfaces. Ordering is not part of the contract.
    pub async fn list_interfaces(&self) -> AppResult<Vec<ApiInterface>> {
        self.store.find_all_interfaces().await
    }

    pub async fn get_interface(&self, id: i64) -> AppResult<Option<ApiInterface>> {
        self.store.find_interface_by_id(id).await
    }

    pub async fn get_interface_by_name(&self, name: &str) -> AppResult<Option<ApiInterface>> {
        self.store.find_interface_by_name(Some(name)).await
    }

    /// Endpoints of an interface; empty when it has none or does not exist
    pub async fn list_endpoints(&self, interface_id: i64) -> AppResult<Vec<ApiEndpoint>> {
        self.store.find_endpoints_by_interface_id(interface_id).await
    }

    /// Interfaces with more than five endpoints
    pub async fn list_large_interfaces(&self) -> AppResult<Vec<ApiInterface>> {
        self.store.find_large_interfaces().await
    }

    /// Register a new interface.
    ///
    /// Fails with `Conflict` when the name is already taken (exact,
    /// case-sensitive; an absent name collides with another nameless
    /// interface). The lookup and the insert are two separate store calls,
    /// so concurrent creates with one name can both get through.
    pub async fn create_interface(&self, fields: &InterfaceFields) -> AppResult<ApiInterface> {
        let name = fields.name.as_deref();
        if self.store.find_interface_by_name(name).await?.is_some() {
            tracing::warn!(name = ?name, "Rejected interface with duplicate name");
            return Err(AppError::Conflict(match name {
                Some(name) => format!("Api interface '{}'", name),
                None => "Api interface without a name".to_string(),
            }));
        }

        let created = self.store.save_interface(None, fields).await?;
        tracing::info!(interface_id = created.id, name = ?created.name, "Interface created");
        Ok(created)
    }

    /// Replace every mutable attribute of an existing interface.
    /// Its endpoints and id are left as they are.
    pub async fn update_interface(
        &self,
        id: i64,
        fields: &InterfaceFields,
    ) -> AppResult<ApiInterface> {
        if self.store.find_interface_by_id(id).await?.is_none() {
            tracing::warn!(interface_id = id, "Update of unknown interface");
            return Err(AppError::NotFound(format!("Api interface {}", id)));
        }

        let updated = self.store.save_interface(Some(id), fields).await?;
        tracing::info!(interface_id = id, "Interface updated");
        Ok(updated)
    }

    /// Delete an interface together with all of its endpoints
    pub async fn delete_interface(&self, id: i64) -> AppResult<()> {
        if !self.store.exists_interface_by_id(id).await? {
            tracing::warn!(interface_id = id, "Delete of unknown interface");
            return Err(AppError::NotFound(format!("Api interface {}", id)));
        }

        // Concurrently deleted between the check and here
        if !self.store.delete_interface_by_id(id).await? {
            return Err(AppError::NotFound(format!("Api interface {}", id)));
        }

        tracing::info!(interface_id = id, "Interface deleted with its endpoints");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EndpointFields;
    use crate::repositories::InMemoryCatalogStore;
    use async_trait::async_trait;
    use tokio::sync::Barrier;

    /// In-memory store whose name lookups wait at a barrier after reading,
    /// so concurrent creates all see the name as free before any inserts
    struct LookupBarrierStore {
        inner: InMemoryCatalogStore,
        barrier: Barrier,
    }

    #[async_trait]
    impl CatalogStore for LookupBarrierStore {
        async fn save_interface(
            &self,
            id: Option<i64>,
            fields: &InterfaceFields,
        ) -> AppResult<ApiInterface> {
            self.inner.save_interface(id, fields).await
        }

        async fn find_all_interfaces(&self) -> AppResult<Vec<ApiInterface>> {
            self.inner.find_all_interfaces().await
        }

        async fn find_interface_by_id(&self, id: i64) -> AppResult<Option<ApiInterface>> {
            self.inner.find_interface_by_id(id).await
        }

        async fn find_interface_by_name(
            &self,
            name: Option<&str>,
        ) -> AppResult<Option<ApiInterface>> {
            let found = self.inner.find_interface_by_name(name).await;
            self.barrier.wait().await;
            found
        }

        async fn find_large_interfaces(&self) -> AppResult<Vec<ApiInterface>> {
            self.inner.find_large_interfaces().await
        }

        async fn delete_interface_by_id(&self, id: i64) -> AppResult<bool> {
            self.inner.delete_interface_by_id(id).await
        }

        async fn exists_interface_by_id(&self, id: i64) -> AppResult<bool> {
            self.inner.exists_interface_by_id(id).await
        }

        async fn find_endpoints_by_interface_id(
            &self,
            interface_id: i64,
        ) -> AppResult<Vec<ApiEndpoint>> {
            self.inner.find_endpoints_by_interface_id(interface_id).await
        }

        async fn find_endpoint_by_id(&self, id: i64) -> AppResult<Option<ApiEndpoint>> {
            self.inner.find_endpoint_by_id(id).await
        }

        async fn insert_endpoint(
            &self,
            interface_id: i64,
            fields: &EndpointFields,
        ) -> AppResult<ApiEndpoint> {
            self.inner.insert_endpoint(interface_id, fields).await
        }

        async fn update_endpoint(
            &self,
            id: i64,
            fields: &EndpointFields,
        ) -> AppResult<ApiEndpoint> {
            self.inner.update_endpoint(id, fields).await
        }

        async fn delete_endpoint_by_id(&self, id: i64) -> AppResult<bool> {
            self.inner.delete_endpoint_by_id(id).await
        }
    }

    fn service() -> (CatalogService, Arc<InMemoryCatalogStore>) {
        let store = Arc::new(InMemoryCatalogStore::new());
        (CatalogService::new(store.clone()), store)
    }

    fn weather() -> InterfaceFields {
        InterfaceFields {
            name: Some("Weather API".to_string()),
            interface_type: Some("REST".to_string()),
            base_url: Some("https://api.weather.example".to_string()),
            description: None,
            auth_type: Some("API_KEY".to_string()),
            is_active: true,
        }
    }

    async fn add_endpoints(store: &InMemoryCatalogStore, interface_id: i64, count: usize) {
        for n in 0..count {
            store
                .insert_endpoint(
                    interface_id,
                    &EndpointFields::new("GET", format!("/forecast/{}", n)),
                )
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips_fields() {
        let (service, _) = service();

        let created = service.create_interface(&weather()).await.unwrap();
        let by_id = service.get_interface(created.id).await.unwrap().unwrap();
        let by_name = service
            .get_interface_by_name("Weather API")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(by_id.fields(), weather());
        assert_eq!(by_id, by_name);
        assert_eq!(by_id.created_at, by_id.updated_at);
    }

    #[tokio::test]
    async fn test_create_duplicate_name_conflicts_and_keeps_original() {
        let (service, _) = service();
        let original = service.create_interface(&weather()).await.unwrap();

        let mut duplicate = weather();
        duplicate.base_url = Some("https://evil.example".to_string());
        let result = service.create_interface(&duplicate).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        let stored = service.get_interface(original.id).await.unwrap().unwrap();
        assert_eq!(stored, original);
        assert_eq!(service.list_interfaces().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_name_uniqueness_is_case_sensitive() {
        let (service, _) = service();
        service.create_interface(&weather()).await.unwrap();

        let mut lower = weather();
        lower.name = Some("weather api".to_string());

        assert!(service.create_interface(&lower).await.is_ok());
    }

    // The store has no unique constraint on name; only the service-level
    // lookup rejects duplicates. Two creates that both pass the lookup before
    // either inserts will both succeed.
    #[tokio::test]
    async fn test_duplicate_names_only_guarded_by_service_lookup() {
        let (service, store) = service();

        store.save_interface(None, &weather()).await.unwrap();
        store.save_interface(None, &weather()).await.unwrap();
        assert_eq!(service.list_interfaces().await.unwrap().len(), 2);

        // Once a duplicate exists, lookups resolve to the oldest row
        let found = service
            .get_interface_by_name("Weather API")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_with_one_name_both_pass_the_lookup() {
        let store = Arc::new(LookupBarrierStore {
            inner: InMemoryCatalogStore::new(),
            barrier: Barrier::new(2),
        });
        let service = CatalogService::new(store.clone());

        let first_request = weather();
        let second_request = weather();
        let (first, second) = tokio::join!(
            service.create_interface(&first_request),
            service.create_interface(&second_request),
        );

        let first = first.unwrap();
        let second = second.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(first.name, second.name);
        assert_eq!(store.inner.find_all_interfaces().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_nameless_create_conflicts_with_nameless_interface() {
        let (service, _) = service();
        let created = service
            .create_interface(&InterfaceFields::default())
            .await
            .unwrap();
        assert_eq!(created.name, None);

        let result = service.create_interface(&InterfaceFields::default()).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert!(service.create_interface(&weather()).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_missing_interface_writes_nothing() {
        let (service, _) = service();

        let result = service.update_interface(99, &weather()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(service.list_interfaces().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields_and_keeps_endpoints() {
        let (service, store) = service();
        let created = service.create_interface(&weather()).await.unwrap();
        add_endpoints(&store, created.id, 2).await;

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let replacement = InterfaceFields::new("Climate API");
        let updated = service
            .update_interface(created.id, &replacement)
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.fields(), replacement);
        assert_eq!(updated.interface_type, None);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(service.list_endpoints(created.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_active_flag_toggles_freely() {
        let (service, _) = service();
        let created = service.create_interface(&weather()).await.unwrap();

        let mut fields = created.fields();
        fields.is_active = false;
        let off = service.update_interface(created.id, &fields).await.unwrap();
        fields.is_active = true;
        let on = service.update_interface(created.id, &fields).await.unwrap();

        assert!(!off.is_active);
        assert!(on.is_active);
    }

    #[tokio::test]
    async fn test_delete_cascades_to_endpoints() {
        let (service, store) = service();
        let created = service.create_interface(&weather()).await.unwrap();
        add_endpoints(&store, created.id, 4).await;

        service.delete_interface(created.id).await.unwrap();

        assert!(service.get_interface(created.id).await.unwrap().is_none());
        assert!(service.list_endpoints(created.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_interface() {
        let (service, _) = service();

        let result = service.delete_interface(1).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_endpoints_of_unknown_interface_is_empty() {
        let (service, _) = service();

        assert!(service.list_endpoints(12345).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_large_interfaces_follow_endpoint_count() {
        let (service, store) = service();
        let created = service.create_interface(&weather()).await.unwrap();
        add_endpoints(&store, created.id, 5).await;

        assert!(service.list_large_interfaces().await.unwrap().is_empty());

        let sixth = store
            .insert_endpoint(created.id, &EndpointFields::new("POST", "/alerts"))
            .await
            .unwrap();
        let large = service.list_large_interfaces().await.unwrap();
        assert_eq!(large.len(), 1);
        assert_eq!(large[0].id, created.id);

        store.delete_endpoint_by_id(sixth.id).await.unwrap();
        assert!(service.list_large_interfaces().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_creates_with_distinct_names() {
        let (service, _) = service();

        let creates = (0..8).map(|n| {
            let service = service.clone();
            async move {
                service
                    .create_interface(&InterfaceFields::new(format!("Api {}", n)))
                    .await
            }
        });
        let created = futures::future::try_join_all(creates).await.unwrap();

        let mut ids: Vec<i64> = created.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }
}
