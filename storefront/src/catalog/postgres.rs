// storefront/src/catalog/postgres.rs

use super::fallback::SEED_PRODUCTS;
use crate::errors::Result as AppResult;
use crate::models::{Product, ProductId};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Debug, FromRow)]
struct ProductRow {
  id: Uuid,
  name: String,
  price: Decimal,
  description: String,
  image: String,
  category: String,
}

impl From<ProductRow> for Product {
  fn from(row: ProductRow) -> Self {
    Product {
      id: ProductId::new(row.id.to_string()),
      name: row.name,
      price: row.price,
      description: row.description,
      image: row.image,
      category: row.category,
    }
  }
}

#[derive(Clone)]
pub struct PgCatalog {
  pool: PgPool,
}

impl PgCatalog {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  pub async fn migrate(&self) -> AppResult<()> {
    sqlx::migrate!("./migrations").run(&self.pool).await?;
    info!("Database migrations applied.");
    Ok(())
  }

  /// Inserts the built-in products if the table holds none. Returns the number inserted.
  #[instrument(name = "catalog::seed_if_empty", skip(self))]
  pub async fn seed_if_empty(&self) -> AppResult<usize> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
      .fetch_one(&self.pool)
      .await?;
    if existing > 0 {
      info!(existing, "Products table already populated, skipping seed.");
      return Ok(0);
    }

    let mut tx = self.pool.begin().await?;
    for seed in SEED_PRODUCTS {
      sqlx::query(
        "INSERT INTO products (id, name, price, description, image, category) VALUES ($1, $2, $3, $4, $5, $6)",
      )
      .bind(Uuid::new_v4())
      .bind(seed.name)
      .bind(seed.price())
      .bind(seed.description)
      .bind(seed.image)
      .bind(seed.category)
      .execute(&mut *tx)
      .await?;
    }
    tx.commit().await?;

    info!(inserted = SEED_PRODUCTS.len(), "Seeded products table.");
    Ok(SEED_PRODUCTS.len())
  }

  pub async fn list(&self) -> AppResult<Vec<Product>> {
    let rows: Vec<ProductRow> =
      sqlx::query_as("SELECT id, name, price, description, image, category FROM products ORDER BY name ASC")
        .fetch_all(&self.pool)
        .await?;
    Ok(rows.into_iter().map(Product::from).collect())
  }

  /// Ids that are not UUIDs cannot name a database product and resolve to `None`.
  pub async fn find(&self, id: &ProductId) -> AppResult<Option<Product>> {
    let Ok(uuid) = Uuid::parse_str(id.as_str()) else {
      return Ok(None);
    };
    let row: Option<ProductRow> =
      sqlx::query_as("SELECT id, name, price, description, image, category FROM products WHERE id = $1")
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await?;
    Ok(row.map(Product::from))
  }
}
