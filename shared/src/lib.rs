//! Shared types for the Bistro catalog
//!
//! Wire models exchanged with the catalog REST API and the error
//! taxonomy used by both the HTTP client and the catalog manager.

pub mod error;
pub mod models;

// Re-exports
pub use error::ErrorKind;
pub use models::{Category, CategoryCreate, Dish, DishCreate, ImageUpload};
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
