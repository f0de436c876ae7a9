//! Food form

use std::path::Path;
use std::str::FromStr;

use shared::{Category, Decimal, DishCreate, ImageUpload};

use super::{Draft, FormController};
use crate::error::{CatalogError, CatalogResult};

/// Image picker label when no file is chosen
pub const IMAGE_PLACEHOLDER_LABEL: &str = "Upload or Drag image here";

/// Text fields of the food form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodField {
    Name,
    Category,
    Price,
}

/// Unsaved dish
///
/// `price` holds the raw input; it is parsed on submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodDraft {
    pub name: String,
    pub category: String,
    pub price: String,
    pub image: Option<ImageUpload>,
}

impl FoodDraft {
    pub fn set(&mut self, field: FoodField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FoodField::Name => self.name = value,
            FoodField::Category => self.category = value,
            FoodField::Price => self.price = value,
        }
    }

    pub fn image_label(&self) -> &str {
        self.image
            .as_ref()
            .map(|img| img.file_name.as_str())
            .unwrap_or(IMAGE_PLACEHOLDER_LABEL)
    }

    fn parse_price(&self) -> CatalogResult<Decimal> {
        let raw = self.price.trim();
        if raw.is_empty() {
            return Err(CatalogError::validation("price", "is required"));
        }
        let price = Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map_err(|_| CatalogError::validation("price", "must be a number"))?;
        if price.is_sign_negative() && !price.is_zero() {
            return Err(CatalogError::validation("price", "must not be negative"));
        }
        Ok(price)
    }
}

impl Draft for FoodDraft {
    type Payload = DishCreate;

    fn validate(&self, categories: &[Category]) -> CatalogResult<DishCreate> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CatalogError::validation("name", "is required"));
        }
        if self.category.is_empty() {
            return Err(CatalogError::validation("category", "is required"));
        }
        if !categories.iter().any(|cat| cat.name == self.category) {
            return Err(CatalogError::validation(
                "category",
                format!("'{}' does not exist", self.category),
            ));
        }
        let price = self.parse_price()?;

        Ok(DishCreate {
            name: name.to_string(),
            category: self.category.clone(),
            price,
            // An empty file is sent as no image
            image: self.image.clone().filter(|img| !img.is_empty()),
        })
    }
}

pub type FoodForm = FormController<FoodDraft>;

/// Load an image file for the draft
///
/// The MIME type is guessed from the file extension.
pub async fn read_image(path: impl AsRef<Path>) -> std::io::Result<ImageUpload> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image")
        .to_string();
    let content_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    let image = ImageUpload::new(file_name, content_type, bytes);
    tracing::debug!(file_name = %image.file_name, content_type = %image.content_type, len = image.len(), "Image loaded");
    Ok(image)
}
