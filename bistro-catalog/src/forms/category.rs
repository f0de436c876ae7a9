//! Category form

use shared::{Category, CategoryCreate};

use super::{Draft, FormController};
use crate::error::{CatalogError, CatalogResult};

/// Unsaved category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
}

impl Draft for CategoryDraft {
    type Payload = CategoryCreate;

    fn validate(&self, _categories: &[Category]) -> CatalogResult<CategoryCreate> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CatalogError::validation("name", "is required"));
        }
        Ok(CategoryCreate::new(name))
    }
}

pub type CategoryForm = FormController<CategoryDraft>;
