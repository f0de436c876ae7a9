//! bistro-catalog - restaurant catalog manager
//!
//! Loads dishes and categories from the catalog API, filters them by
//! category and drives the "add food" / "add category" forms. Outcomes
//! are reported through a [`Notifier`].

pub mod config;
pub mod error;
pub mod filter;
pub mod forms;
pub mod generation;
pub mod loader;
pub mod logger;
pub mod manager;
pub mod notify;
pub mod search;
pub mod view;

pub use config::{CancelPolicy, CatalogConfig};
pub use error::{CatalogError, CatalogResult};
pub use filter::{CategoryFilter, FilterOption};
pub use forms::{CategoryDraft, FoodDraft, FoodField, FormPhase, SubmitControl, read_image};
pub use manager::{CatalogManager, LoadOutcome, LoadState, SubmitOutcome};
pub use notify::{BroadcastNotifier, Notification, NotificationLevel, Notifier, Operation, TracingNotifier};
pub use search::SearchResults;
pub use view::{CatalogView, CategoryFormView, DishCard, DishImage, FoodFormView};
