//! Catalog API trait
//!
//! The seam between the catalog manager and the REST backend. The
//! network implementation is [`NetworkHttpClient`](crate::NetworkHttpClient);
//! tests provide scripted implementations.

use async_trait::async_trait;

use crate::{Category, CategoryCreate, ClientResult, Dish, DishCreate};

/// Operations exposed by the catalog REST API
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /foods`
    async fn list_dishes(&self) -> ClientResult<Vec<Dish>>;

    /// `GET /categories`
    async fn list_categories(&self) -> ClientResult<Vec<Category>>;

    /// `POST /foods` (multipart)
    ///
    /// Returns the created dish when the server echoes it back.
    async fn create_dish(&self, dish: &DishCreate) -> ClientResult<Option<Dish>>;

    /// `POST /categories` (JSON)
    ///
    /// Returns the created category when the server echoes it back.
    async fn create_category(&self, category: &CategoryCreate) -> ClientResult<Option<Category>>;
}

#[async_trait]
impl<T: CatalogApi + ?Sized> CatalogApi for std::sync::Arc<T> {
    async fn list_dishes(&self) -> ClientResult<Vec<Dish>> {
        (**self).list_dishes().await
    }

    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        (**self).list_categories().await
    }

    async fn create_dish(&self, dish: &DishCreate) -> ClientResult<Option<Dish>> {
        (**self).create_dish(dish).await
    }

    async fn create_category(&self, category: &CategoryCreate) -> ClientResult<Option<Category>> {
        (**self).create_category(category).await
    }
}
