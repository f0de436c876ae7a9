//! Catalog loader
//!
//! Fetches the dish and category collections. Every call is bounded by the
//! configured timeout regardless of the [`CatalogApi`] implementation.

use std::future::Future;
use std::time::Duration;

use bistro_client::{CatalogApi, ClientResult};
use shared::{Category, Dish};

use crate::error::{CatalogError, CatalogResult};

/// Both collections, fetched together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub dishes: Vec<Dish>,
    pub categories: Vec<Category>,
}

/// Run an API call under `timeout`; expiry is a failure
pub async fn bounded<T, F>(timeout: Duration, call: F) -> CatalogResult<T>
where
    F: Future<Output = ClientResult<T>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result.map_err(CatalogError::from),
        Err(_) => Err(CatalogError::Timeout(timeout)),
    }
}

/// Fetch dishes and categories concurrently
///
/// Fails as soon as either request fails.
pub async fn fetch_catalog<A>(api: &A, timeout: Duration) -> CatalogResult<CatalogSnapshot>
where
    A: CatalogApi + ?Sized,
{
    let (dishes, categories) = tokio::try_join!(
        bounded(timeout, api.list_dishes()),
        bounded(timeout, api.list_categories()),
    )?;
    tracing::debug!(
        dishes = dishes.len(),
        categories = categories.len(),
        "Catalog fetched"
    );
    Ok(CatalogSnapshot { dishes, categories })
}

pub async fn fetch_dishes<A>(api: &A, timeout: Duration) -> CatalogResult<Vec<Dish>>
where
    A: CatalogApi + ?Sized,
{
    bounded(timeout, api.list_dishes()).await
}

pub async fn fetch_categories<A>(api: &A, timeout: Duration) -> CatalogResult<Vec<Category>>
where
    A: CatalogApi + ?Sized,
{
    bounded(timeout, api.list_categories()).await
}
