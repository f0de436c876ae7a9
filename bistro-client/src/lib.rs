//! Bistro Client - HTTP client for the catalog REST API
//!
//! Provides network-based calls to the `/foods` and `/categories`
//! resources behind the [`CatalogApi`] trait.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::CatalogApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::NetworkHttpClient;

// Re-export shared types for convenience
pub use shared::models::{Category, CategoryCreate, Dish, DishCreate, ImageUpload};
