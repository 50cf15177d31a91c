// storefront/src/models/receipt.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Checkout request body. Every field is optional at the parsing level;
/// the checkout service decides which ones are required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
  pub name: Option<String>,
  pub email: Option<String>,
  pub phone: Option<String>,
  pub address: Option<String>,
  pub city: Option<String>,
  pub state: Option<String>,
  pub zip: Option<String>,
  pub country: Option<String>,
  pub payment_method: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReceiptLine {
  /// Product name at the time of checkout.
  pub product: String,
  pub quantity: i64,
  #[serde(with = "rust_decimal::serde::float")]
  pub price: Decimal,
  #[serde(with = "rust_decimal::serde::float")]
  pub total: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
  pub id: String,
  pub name: String,
  pub email: String,
  pub phone: String,
  pub address: String,
  pub city: String,
  pub state: String,
  pub zip: String,
  pub country: String,
  pub payment_method: String,
  pub items: Vec<ReceiptLine>,
  #[serde(with = "rust_decimal::serde::float")]
  pub total: Decimal,
  pub timestamp: String,
}
