//! Dish Model

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ImageUpload;

/// Dish entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// Server-assigned identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    /// Category reference (category name)
    pub category: String,
    /// Accepts a JSON number or numeric string; written as a number
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    /// Base64-encoded image as stored by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Dish {
    /// Price as shown on the menu, without trailing zeros (e.g. `$12.5`)
    pub fn price_label(&self) -> String {
        format!("${}", self.price.normalize())
    }

    /// Inline `data:` URL for the stored image
    pub fn image_data_url(&self) -> Option<String> {
        self.image
            .as_deref()
            .filter(|img| !img.is_empty())
            .map(|img| format!("data:image/png;base64,{}", img))
    }

    /// Decode the stored image
    ///
    /// Returns `None` when the dish has no image.
    pub fn image_bytes(&self) -> Option<Result<Vec<u8>, base64::DecodeError>> {
        self.image
            .as_deref()
            .filter(|img| !img.is_empty())
            .map(|img| STANDARD.decode(img))
    }
}

/// Create dish payload
///
/// Sent as a multipart body: `name`, `category`, `price` text fields and an
/// optional `image` file part.
#[derive(Debug, Clone, PartialEq)]
pub struct DishCreate {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub image: Option<ImageUpload>,
}

impl DishCreate {
    /// Text fields of the multipart body, in wire order
    pub fn text_fields(&self) -> [(&'static str, String); 3] {
        [
            ("name", self.name.clone()),
            ("category", self.category.clone()),
            ("price", self.price.normalize().to_string()),
        ]
    }
}
