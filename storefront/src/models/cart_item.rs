// storefront/src/models/cart_item.rs

use super::product::{Product, ProductId};
use rust_decimal::Decimal;
use serde::Serialize;

/// One line of the shared cart. Holds a reference to the product, never a copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
  pub id: String,
  pub product_id: ProductId,
  pub quantity: i64,
}

/// A cart item joined with its resolved product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
  pub id: String,
  pub product_id: ProductId,
  pub quantity: i64,
  pub product: Product,
  #[serde(with = "rust_decimal::serde::float")]
  pub total: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct CartView {
  pub items: Vec<CartLine>,
  #[serde(with = "rust_decimal::serde::float")]
  pub total: Decimal,
}
