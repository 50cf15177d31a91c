// storefront/src/services/cart.rs

use crate::catalog::CatalogStore;
use crate::errors::{AppError, Result as AppResult};
use crate::models::{CartItem, CartLine, CartView, Product, ProductId};
use crate::services::cart_store::CartStore;
use crate::services::pricing::{line_total, round_money};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub struct CartService {
  catalog: Arc<CatalogStore>,
  cart: CartStore,
}

impl CartService {
  pub fn new(catalog: Arc<CatalogStore>, cart: CartStore) -> Self {
    Self { catalog, cart }
  }

  /// Joins every item with its product. Items whose product no longer resolves,
  /// or cannot be looked up right now, are left out of both the lines and the total.
  #[instrument(name = "cart::list", skip(self))]
  pub async fn list(&self) -> CartView {
    let mut items = Vec::new();
    let mut total = Decimal::ZERO;

    for item in self.cart.items() {
      let product = match self.catalog.find(&item.product_id).await {
        Ok(Some(product)) => product,
        Ok(None) => continue,
        Err(e) => {
          warn!(item_id = %item.id, product_id = %item.product_id, error = %e, "Dropping cart item from listing.");
          continue;
        }
      };
      let line = Self::join(item, product);
      total += line.total;
      items.push(line);
    }

    CartView {
      items,
      total: round_money(total),
    }
  }

  pub async fn resolve_product(&self, product_id: &ProductId) -> AppResult<Product> {
    self
      .catalog
      .find(product_id)
      .await?
      .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
  }

  /// Last write wins: adding a product already in the cart replaces its quantity.
  #[instrument(name = "cart::put", skip(self, product), fields(product_id = %product.id))]
  pub fn put(&self, product: Product, quantity: i64) -> CartLine {
    let item = self.cart.upsert(&product.id, quantity);
    info!(item_id = %item.id, quantity, "Cart line stored.");
    Self::join(item, product)
  }

  pub fn update(&self, item_id: &str, quantity: i64) -> AppResult<CartItem> {
    self
      .cart
      .update_quantity(item_id, quantity)
      .ok_or_else(|| AppError::NotFound("Item not found in cart".to_string()))
  }

  pub fn remove(&self, item_id: &str) -> AppResult<()> {
    if self.cart.remove(item_id) {
      Ok(())
    } else {
      Err(AppError::NotFound("Item not found in cart".to_string()))
    }
  }

  fn join(item: CartItem, product: Product) -> CartLine {
    CartLine {
      total: line_total(product.price, item.quantity),
      id: item.id,
      product_id: item.product_id,
      quantity: item.quantity,
      product,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn service() -> (CartService, CartStore) {
    let cart = CartStore::new();
    (CartService::new(Arc::new(CatalogStore::Fallback), cart.clone()), cart)
  }

  #[tokio::test]
  async fn list_totals_resolved_items_only() {
    let (svc, cart) = service();
    let headphones = svc.resolve_product(&ProductId::from("1")).await.unwrap();
    let hub = svc.resolve_product(&ProductId::from("6")).await.unwrap();
    svc.put(headphones, 2);
    svc.put(hub, 1);
    cart.upsert(&ProductId::from("999"), 3);

    let view = svc.list().await;
    assert_eq!(view.items.len(), 2);
    assert_eq!(view.total, Decimal::new(23997, 2));
  }

  #[tokio::test]
  async fn unknown_product_is_not_found() {
    let (svc, _) = service();
    let err = svc.resolve_product(&ProductId::from("42")).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref m) if m == "Product not found"));
  }

  #[tokio::test]
  async fn update_and_remove_unknown_items_fail() {
    let (svc, _) = service();
    assert!(matches!(svc.update("nope", 1), Err(AppError::NotFound(_))));
    assert!(matches!(svc.remove("nope"), Err(AppError::NotFound(_))));
  }
}
