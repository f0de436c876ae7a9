//! Data models
//!
//! Shared between the HTTP client and the catalog manager.
//! Identifiers are server-assigned strings serialized as `_id`.

pub mod category;
pub mod dish;
pub mod image;

// Re-exports
pub use category::*;
pub use dish::*;
pub use image::*;
