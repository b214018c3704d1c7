//! Storefront API Client
//!
//! Typed access to the external REST services:
//! - products: product store CRUD and the reorder endpoint
//! - calculator: the remote arithmetic service
//! - config: base URL resolution

mod calculator;
mod config;
mod error;
mod models;
mod products;

pub use calculator::{CalculatorApi, Operation};
pub use config::{ApiConfig, DEFAULT_API_URL};
pub use error::{ApiError, CalculatorError};
pub use models::{sort_catalog, Product, ProductDraft, ProductId};
pub use products::ProductApi;
