// storefront/src/lib.rs

//! Storefront service: product catalog, a shared in-memory cart and a mock checkout
//! behind a JSON API.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod pipelines;
pub mod services;
pub mod state;
pub mod web;
