// storefront/src/models/product.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog identifier as the client sees it.
///
/// Fallback products use `"1"`..`"8"`, database products use their UUID text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
  pub fn new(raw: impl Into<String>) -> Self {
    ProductId(raw.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl fmt::Display for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for ProductId {
  fn from(raw: &str) -> Self {
    ProductId::new(raw)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
  pub id: ProductId,
  pub name: String,
  #[serde(with = "rust_decimal::serde::float")]
  pub price: Decimal,
  pub description: String,
  pub image: String,
  pub category: String,
}
