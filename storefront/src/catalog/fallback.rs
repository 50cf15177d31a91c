// storefront/src/catalog/fallback.rs

//! The built-in product list. Served when no database is reachable and used to
//! seed an empty products table.

use crate::models::{Product, ProductId};
use rust_decimal::Decimal;

pub(crate) struct SeedProduct {
  pub name: &'static str,
  pub price_cents: i64,
  pub description: &'static str,
  pub image: &'static str,
  pub category: &'static str,
}

impl SeedProduct {
  pub fn price(&self) -> Decimal {
    Decimal::new(self.price_cents, 2)
  }
}

pub(crate) const SEED_PRODUCTS: &[SeedProduct] = &[
  SeedProduct {
    name: "Wireless Headphones",
    price_cents: 9999,
    description: "High-quality wireless headphones with noise cancellation",
    image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?auto=format&fit=crop&w=600&h=600",
    category: "Electronics",
  },
  SeedProduct {
    name: "Smart Watch",
    price_cents: 19999,
    description: "Feature-rich smartwatch with health monitoring",
    image: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?auto=format&fit=crop&w=600&h=600",
    category: "Electronics",
  },
  SeedProduct {
    name: "Bluetooth Speaker",
    price_cents: 7999,
    description: "Portable Bluetooth speaker with excellent sound",
    image: "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?auto=format&fit=crop&w=600&h=600",
    category: "Electronics",
  },
  SeedProduct {
    name: "Gaming Mouse",
    price_cents: 4999,
    description: "Ergonomic gaming mouse with customizable buttons",
    image: "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?auto=format&fit=crop&w=600&h=600",
    category: "Accessories",
  },
  SeedProduct {
    name: "Mechanical Keyboard",
    price_cents: 12999,
    description: "RGB mechanical keyboard with tactile switches",
    image: "https://images.unsplash.com/photo-1595225476202-1e6433f609d5?auto=format&fit=crop&w=600&h=600",
    category: "Accessories",
  },
  SeedProduct {
    name: "USB-C Hub",
    price_cents: 3999,
    description: "Multi-port USB-C hub for laptops",
    image: "https://images.unsplash.com/photo-1593642632823-8f785ba67e45?auto=format&fit=crop&w=600&h=600",
    category: "Accessories",
  },
  SeedProduct {
    name: "Wireless Charger",
    price_cents: 2999,
    description: "Fast wireless charging pad for all devices",
    image: "https://images.unsplash.com/photo-1606220588911-4a0f7f8e0d3f?auto=format&fit=crop&w=600&h=600",
    category: "Accessories",
  },
  SeedProduct {
    name: "Noise Cancelling Earbuds",
    price_cents: 14999,
    description: "True wireless earbuds with active noise cancellation",
    image: "https://images.unsplash.com/photo-1572536147248-ac59a8abfa4b?auto=format&fit=crop&w=600&h=600",
    category: "Electronics",
  },
];

/// Fallback products, numbered `"1"`.. in list order.
pub fn products() -> Vec<Product> {
  SEED_PRODUCTS
    .iter()
    .enumerate()
    .map(|(idx, seed)| Product {
      id: ProductId::new((idx + 1).to_string()),
      name: seed.name.to_string(),
      price: seed.price(),
      description: seed.description.to_string(),
      image: seed.image.to_string(),
      category: seed.category.to_string(),
    })
    .collect()
}

pub fn find(id: &ProductId) -> Option<Product> {
  products().into_iter().find(|p| &p.id == id)
}
