// storefront/src/catalog/mod.rs

//! Read side of the product collection.

pub mod fallback;
pub mod postgres;

use crate::config::AppConfig;
use crate::errors::{AppError, Result as AppResult};
use crate::models::{Product, ProductId};
pub use postgres::PgCatalog;

use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::{error, info, instrument, warn};

pub enum CatalogStore {
  Postgres(PgCatalog),
  Fallback,
}

impl CatalogStore {
  /// Connects, migrates and seeds the database named in the config.
  /// Without a database, or on any bootstrap failure, the built-in list is used.
  pub async fn connect(config: &AppConfig) -> Self {
    let Some(database_url) = config.database_url.as_deref() else {
      info!("DATABASE_URL not set, serving the built-in product list.");
      return CatalogStore::Fallback;
    };

    match Self::bootstrap(config, database_url).await {
      Ok(catalog) => {
        info!("Catalog backed by Postgres.");
        CatalogStore::Postgres(catalog)
      }
      Err(e) => {
        error!(error = %e, "Database bootstrap failed, serving the built-in product list.");
        CatalogStore::Fallback
      }
    }
  }

  async fn bootstrap(config: &AppConfig, database_url: &str) -> AppResult<PgCatalog> {
    let timeout = Duration::from_secs(config.db_connect_timeout_secs);
    let connect = PgPoolOptions::new()
      .max_connections(config.db_max_connections)
      .acquire_timeout(timeout)
      .connect(database_url);
    let pool = tokio::time::timeout(timeout, connect)
      .await
      .map_err(|_| AppError::Internal(format!("Database connection timed out after {}s", timeout.as_secs())))??;

    let catalog = PgCatalog::new(pool);
    catalog.migrate().await?;
    if config.seed_db {
      catalog.seed_if_empty().await?;
    }
    Ok(catalog)
  }

  pub fn backend(&self) -> &'static str {
    match self {
      CatalogStore::Postgres(_) => "postgres",
      CatalogStore::Fallback => "fallback",
    }
  }

  /// Never fails: a database error degrades to the built-in list.
  #[instrument(name = "catalog::list", skip(self), fields(backend = self.backend()))]
  pub async fn list(&self) -> Vec<Product> {
    match self {
      CatalogStore::Postgres(pg) => match pg.list().await {
        Ok(products) => products,
        Err(e) => {
          error!(error = %e, "Failed to list products, using the built-in list.");
          fallback::products()
        }
      },
      CatalogStore::Fallback => fallback::products(),
    }
  }

  pub async fn find(&self, id: &ProductId) -> AppResult<Option<Product>> {
    let found = match self {
      CatalogStore::Postgres(pg) => pg.find(id).await?,
      CatalogStore::Fallback => fallback::find(id),
    };
    if found.is_none() {
      warn!(product_id = %id, "Product not found in catalog.");
    }
    Ok(found)
  }
}
