use std::sync::Arc;

use sea_orm::{ConnectOptions, Database};
use sqlx::postgres::PgPool;

use crate::config::Config;
use crate::repositories::{CatalogStore, PgCatalogStore};
use crate::services::{CatalogService, EndpointService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub endpoints: EndpointService,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState backed by PostgreSQL, applying migrations first
    pub async fn new(config: Config) -> Result<Self, AppStateError> {
        let store = connect_postgres(&config).await?;
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Create AppState over any catalog store (for testing)
    pub fn with_store(config: Config, store: Arc<dyn CatalogStore>) -> Self {
        Self {
            catalog: CatalogService::new(store.clone()),
            endpoints: EndpointService::new(store),
            config,
        }
    }
}

/// Run the embedded migrations, then open the SeaORM pool
pub async fn connect_postgres(config: &Config) -> Result<PgCatalogStore, AppStateError> {
    // Connect to PostgreSQL with SQLx (for migrations)
    let pg_pool = PgPool::connect(&config.database_url)
        .await
        .map_err(|e| AppStateError::Postgres(e.to_string()))?;

    sqlx::migrate!("./migrations")
        .run(&pg_pool)
        .await
        .map_err(|e| AppStateError::Migration(e.to_string()))?;
    pg_pool.close().await;

    // Connect to PostgreSQL with SeaORM
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .sqlx_logging(true);

    let db = Database::connect(opt)
        .await
        .map_err(|e| AppStateError::Postgres(e.to_string()))?;

    Ok(PgCatalogStore::new(db))
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("PostgreSQL connection error: {0}")]
    Postgres(String),

    #[error("Migration error: {0}")]
    Migration(String),
}
