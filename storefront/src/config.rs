// storefront/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  // Absent means the catalog runs from the built-in product list.
  pub database_url: Option<String>,
  pub db_max_connections: u32,
  pub db_connect_timeout_secs: u64,

  // Insert the default catalog when the products table is empty.
  pub seed_db: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from an arbitrary variable source. `from_env` passes the process environment.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get_or = |var_name: &str, default: &str| {
      lookup(var_name)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
    };

    let server_host = get_or("SERVER_HOST", "127.0.0.1");
    let server_port = get_or("SERVER_PORT", "5000")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty());
    let db_max_connections = get_or("DB_MAX_CONNECTIONS", "5")
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DB_MAX_CONNECTIONS: {}", e)))?;
    let db_connect_timeout_secs = get_or("DB_CONNECT_TIMEOUT_SECS", "5")
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid DB_CONNECT_TIMEOUT_SECS: {}", e)))?;
    let seed_db = get_or("SEED_DB", "true")
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    tracing::info!(
      database_configured = database_url.is_some(),
      "Application configuration loaded successfully."
    );

    Ok(Self {
      server_host,
      server_port,
      database_url,
      db_max_connections,
      db_connect_timeout_secs,
      seed_db,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name| vars.get(name).cloned()
  }

  #[test]
  fn defaults_apply_when_nothing_is_set() {
    let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.bind_address(), "127.0.0.1:5000");
    assert!(config.database_url.is_none());
    assert_eq!(config.db_max_connections, 5);
    assert!(config.seed_db);
  }

  #[test]
  fn blank_database_url_means_no_database() {
    let config = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])).unwrap();
    assert!(config.database_url.is_none());
  }

  #[test]
  fn explicit_values_override_defaults() {
    let config = AppConfig::from_lookup(lookup_from(&[
      ("SERVER_HOST", "0.0.0.0"),
      ("SERVER_PORT", "8080"),
      ("DATABASE_URL", "postgres://shop@localhost/shop"),
      ("SEED_DB", "false"),
    ]))
    .unwrap();
    assert_eq!(config.bind_address(), "0.0.0.0:8080");
    assert_eq!(config.database_url.as_deref(), Some("postgres://shop@localhost/shop"));
    assert!(!config.seed_db);
  }

  #[test]
  fn invalid_port_is_a_config_error() {
    let err = AppConfig::from_lookup(lookup_from(&[("SERVER_PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, AppError::Config(msg) if msg.starts_with("Invalid SERVER_PORT")));
  }
}
