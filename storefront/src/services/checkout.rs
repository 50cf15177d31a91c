// storefront/src/services/checkout.rs

use crate::catalog::CatalogStore;
use crate::errors::{AppError, Result as AppResult};
use crate::models::{CartItem, CustomerDetails, Receipt, ReceiptLine};
use crate::services::pricing::{line_total, round_money};
use chrono::{SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

pub struct CheckoutService {
  catalog: Arc<CatalogStore>,
}

impl CheckoutService {
  pub fn new(catalog: Arc<CatalogStore>) -> Self {
    Self { catalog }
  }

  /// Contact and address checks, first failure wins. The empty-cart check is separate.
  pub fn validate(details: &CustomerDetails) -> AppResult<()> {
    let name = non_empty(&details.name);
    let email = non_empty(&details.email);
    let (Some(_), Some(email)) = (name, email) else {
      return Err(AppError::Validation("Name and email are required".to_string()));
    };

    if !EMAIL_RE.is_match(email) {
      return Err(AppError::Validation("Invalid email format".to_string()));
    }

    if let Some(phone) = non_blank(&details.phone) {
      if digit_count(phone) != 10 {
        return Err(AppError::Validation("Phone number must be 10 digits".to_string()));
      }
    }

    if let Some(zip) = non_blank(&details.zip) {
      if digit_count(zip) != 6 {
        return Err(AppError::Validation("ZIP code must be 6 digits".to_string()));
      }
    }

    Ok(())
  }

  pub fn ensure_not_empty(items: &[CartItem]) -> AppResult<()> {
    if items.is_empty() {
      return Err(AppError::Validation("Cart is empty".to_string()));
    }
    Ok(())
  }

  /// Prices each item against the catalog. Items whose product is gone are skipped.
  #[instrument(name = "checkout::price_lines", skip(self, items), fields(num_items = items.len()))]
  pub async fn price_lines(&self, items: &[CartItem]) -> AppResult<(Vec<ReceiptLine>, Decimal)> {
    let mut lines = Vec::with_capacity(items.len());
    let mut total = Decimal::ZERO;

    for item in items {
      let Some(product) = self.catalog.find(&item.product_id).await? else {
        continue;
      };
      let line_sum = product.price * Decimal::from(item.quantity);
      total += line_sum;
      lines.push(ReceiptLine {
        product: product.name,
        quantity: item.quantity,
        price: product.price,
        total: line_total(product.price, item.quantity),
      });
    }

    Ok((lines, round_money(total)))
  }

  pub fn issue_receipt(details: &CustomerDetails, items: Vec<ReceiptLine>, total: Decimal) -> Receipt {
    let field = |value: &Option<String>| value.clone().unwrap_or_default();
    Receipt {
      id: Uuid::new_v4().simple().to_string(),
      name: field(&details.name),
      email: field(&details.email),
      phone: field(&details.phone),
      address: field(&details.address),
      city: field(&details.city),
      state: field(&details.state),
      zip: field(&details.zip),
      country: field(&details.country),
      payment_method: non_blank(&details.payment_method).unwrap_or("card").to_string(),
      items,
      total,
      timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
  }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|v| !v.is_empty())
}

fn non_blank(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|v| !v.trim().is_empty())
}

fn digit_count(raw: &str) -> usize {
  raw.chars().filter(|c| c.is_ascii_digit()).count()
}
