//! View models
//!
//! Plain data describing what the catalog section should render. Built
//! from a state snapshot on every call.

use serde::Serialize;
use shared::{Category, Dish};

use crate::forms::SubmitControl;

/// Rating strip shown on every card
pub const RATING: &str = "★★★★★";
/// Shown instead of a missing dish image
pub const NO_IMAGE_LABEL: &str = "No Image";
/// First option of the category select
pub const SELECT_CATEGORY_LABEL: &str = "Select Category";

/// Dish grid or the loading placeholder
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "cards", rename_all = "snake_case")]
pub enum CatalogView {
    Loading,
    Grid(Vec<DishCard>),
}

impl CatalogView {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn cards(&self) -> &[DishCard] {
        match self {
            Self::Loading => &[],
            Self::Grid(cards) => cards,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DishImage {
    DataUrl(String),
    Placeholder,
}

impl DishImage {
    pub fn placeholder_text(&self) -> Option<&'static str> {
        match self {
            Self::Placeholder => Some(NO_IMAGE_LABEL),
            Self::DataUrl(_) => None,
        }
    }
}

/// One card of the dish grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DishCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price_label: String,
    pub image: DishImage,
    pub rating: &'static str,
}

impl From<&Dish> for DishCard {
    fn from(dish: &Dish) -> Self {
        Self {
            id: dish.id.clone(),
            name: dish.name.clone(),
            category: dish.category.clone(),
            price_label: dish.price_label(),
            image: dish
                .image_data_url()
                .map(DishImage::DataUrl)
                .unwrap_or(DishImage::Placeholder),
            rating: RATING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Category select: placeholder followed by the current categories
pub fn category_options(categories: &[Category]) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: String::new(),
        label: SELECT_CATEGORY_LABEL.to_string(),
    })
    .chain(categories.iter().map(|cat| SelectOption {
        value: cat.name.clone(),
        label: cat.name.clone(),
    }))
    .collect()
}

/// Food modal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodFormView {
    pub visible: bool,
    pub name: String,
    pub category: String,
    pub price: String,
    pub image_label: String,
    pub has_image: bool,
    pub category_options: Vec<SelectOption>,
    pub submit: SubmitControl,
    pub cancel_enabled: bool,
    pub error: Option<String>,
}

/// Category modal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryFormView {
    pub visible: bool,
    pub name: String,
    pub submit: SubmitControl,
    pub cancel_enabled: bool,
    pub error: Option<String>,
}
