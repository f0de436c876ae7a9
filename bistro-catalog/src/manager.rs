//! Catalog manager
//!
//! Owns the catalog state (collections, selected filter, both forms) and
//! runs every asynchronous operation against the [`CatalogApi`]:
//!
//! - `mount()` / `load()`: concurrent dish + category fetch
//! - `reload_dishes()` / `reload_categories()`: full re-fetch of one collection
//! - `submit_food()` / `submit_category()`: creation followed by a full reload
//!
//! The state lock is never held across a network call. Responses are
//! tagged with generation tokens and dropped when a newer request (or an
//! unmount) has superseded them. Each terminal outcome is reported once
//! through the [`Notifier`].

use std::future::Future;
use std::time::Duration;

use bistro_client::{CatalogApi, ClientResult};
use serde::Serialize;
use shared::{Category, Dish, ImageUpload};
use tokio::sync::RwLock;

use crate::config::{CancelPolicy, CatalogConfig};
use crate::error::{CatalogError, CatalogResult};
use crate::filter::{self, CategoryFilter, FilterOption};
use crate::forms::{
    CategoryDraft, CategoryForm, Draft, FoodDraft, FoodField, FoodForm, FormController, FormPhase,
};
use crate::generation::GenerationGate;
use crate::loader;
use crate::notify::{Notification, Notifier, Operation};
use crate::search::{self, SearchResults};
use crate::view::{self, CatalogView, CategoryFormView, DishCard, FoodFormView};

/// Whether the dish grid can be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Loading,
    Ready,
}

/// Result of a fetch that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Response written to state
    Applied,
    /// A newer request or an unmount took over; response dropped
    Superseded,
}

/// Result of a creation that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Created; `refreshed` tells whether the follow-up reload was applied
    Created { refreshed: bool },
    /// Settled after an unmount; nothing was applied or reported
    Detached,
}

enum Submitted {
    Attached,
    Detached,
}

struct CatalogState {
    load_state: LoadState,
    dishes: Vec<Dish>,
    categories: Vec<Category>,
    filter: CategoryFilter,
    food_form: FoodForm,
    category_form: CategoryForm,
    mounts: GenerationGate,
    loads: GenerationGate,
    dish_fetches: GenerationGate,
    category_fetches: GenerationGate,
}

impl CatalogState {
    fn new() -> Self {
        Self {
            load_state: LoadState::Loading,
            dishes: Vec::new(),
            categories: Vec::new(),
            filter: CategoryFilter::All,
            food_form: FoodForm::new(),
            category_form: CategoryForm::new(),
            mounts: GenerationGate::new(),
            loads: GenerationGate::new(),
            dish_fetches: GenerationGate::new(),
            category_fetches: GenerationGate::new(),
        }
    }

    fn food_form(&mut self) -> &mut FoodForm {
        &mut self.food_form
    }

    fn category_form(&mut self) -> &mut CategoryForm {
        &mut self.category_form
    }

    /// Replace the categories; a filter on a vanished category falls back to "All"
    fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
        if let CategoryFilter::Category(name) = &self.filter
            && !self.categories.iter().any(|cat| cat.name == *name)
        {
            tracing::debug!(category = %name, "Selected category gone, showing all");
            self.filter = CategoryFilter::All;
        }
    }

    fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|cat| cat.name == name)
    }
}

/// Client-side catalog: data loader, filter, forms and notifications
pub struct CatalogManager<A, N> {
    api: A,
    notifier: N,
    timeout: Duration,
    cancel_policy: CancelPolicy,
    state: RwLock<CatalogState>,
}

impl<A: CatalogApi, N: Notifier> CatalogManager<A, N> {
    pub fn new(api: A, notifier: N, config: &CatalogConfig) -> Self {
        Self {
            api,
            notifier,
            timeout: config.request_timeout(),
            cancel_policy: config.cancel_policy,
            state: RwLock::new(CatalogState::new()),
        }
    }

    pub fn cancel_policy(&self) -> CancelPolicy {
        self.cancel_policy
    }

    fn report<T>(&self, operation: Operation, result: &CatalogResult<T>) {
        if let Some(notification) = Notification::for_outcome(operation, result) {
            self.notifier.notify(notification);
        }
    }

    // ========== Lifecycle ==========

    /// Initial load when the catalog section appears
    pub async fn mount(&self) -> CatalogResult<LoadOutcome> {
        tracing::info!("Catalog mounted");
        self.load().await
    }

    /// Tear down: drop all state and supersede every outstanding request
    pub async fn unmount(&self) {
        let mut s = self.state.write().await;
        s.mounts.advance();
        s.loads.advance();
        s.dish_fetches.advance();
        s.category_fetches.advance();
        s.food_form.close();
        s.category_form.close();
        s.load_state = LoadState::Loading;
        s.dishes.clear();
        s.categories.clear();
        s.filter = CategoryFilter::All;
        tracing::info!("Catalog unmounted");
    }

    // ========== Data Loader ==========

    /// Fetch both collections and replace them together
    ///
    /// On failure both collections are emptied and the state is `Ready`;
    /// there is no automatic retry.
    pub async fn load(&self) -> CatalogResult<LoadOutcome> {
        let (load, dishes_gen, categories_gen) = {
            let mut s = self.state.write().await;
            s.load_state = LoadState::Loading;
            (
                s.loads.advance(),
                s.dish_fetches.advance(),
                s.category_fetches.advance(),
            )
        };
        tracing::debug!(generation = %load, "Loading catalog");

        let result = loader::fetch_catalog(&self.api, self.timeout).await;

        let mut s = self.state.write().await;
        if !s.loads.is_current(load) {
            tracing::debug!(generation = %load, "Discarding superseded catalog load");
            return Ok(LoadOutcome::Superseded);
        }
        s.load_state = LoadState::Ready;
        let dishes_current = s.dish_fetches.is_current(dishes_gen);
        let categories_current = s.category_fetches.is_current(categories_gen);

        let outcome = match result {
            Ok(snapshot) => {
                if dishes_current {
                    s.dishes = snapshot.dishes;
                }
                if categories_current {
                    s.set_categories(snapshot.categories);
                }
                tracing::info!(
                    dishes = s.dishes.len(),
                    categories = s.categories.len(),
                    "Catalog loaded"
                );
                Ok(LoadOutcome::Applied)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Catalog load failed");
                if dishes_current {
                    s.dishes.clear();
                }
                if categories_current {
                    s.set_categories(Vec::new());
                }
                Err(e)
            }
        };
        drop(s);

        self.report(Operation::LoadCatalog, &outcome);
        outcome
    }

    /// Re-fetch the full dish collection
    ///
    /// A failed refresh keeps the current dishes.
    pub async fn reload_dishes(&self) -> CatalogResult<LoadOutcome> {
        let generation = self.state.write().await.dish_fetches.advance();
        let result = loader::fetch_dishes(&self.api, self.timeout).await;

        let mut s = self.state.write().await;
        if !s.dish_fetches.is_current(generation) {
            tracing::debug!(generation = %generation, "Discarding superseded dish refresh");
            return Ok(LoadOutcome::Superseded);
        }
        let outcome = result.map(|dishes| {
            tracing::debug!(dishes = dishes.len(), "Dishes refreshed");
            s.dishes = dishes;
            LoadOutcome::Applied
        });
        drop(s);

        self.report(Operation::RefreshDishes, &outcome);
        outcome
    }

    /// Re-fetch the full category collection
    ///
    /// A failed refresh keeps the current categories.
    pub async fn reload_categories(&self) -> CatalogResult<LoadOutcome> {
        let generation = self.state.write().await.category_fetches.advance();
        let result = loader::fetch_categories(&self.api, self.timeout).await;

        let mut s = self.state.write().await;
        if !s.category_fetches.is_current(generation) {
            tracing::debug!(generation = %generation, "Discarding superseded category refresh");
            return Ok(LoadOutcome::Superseded);
        }
        let outcome = result.map(|categories| {
            tracing::debug!(categories = categories.len(), "Categories refreshed");
            s.set_categories(categories);
            LoadOutcome::Applied
        });
        drop(s);

        self.report(Operation::RefreshCategories, &outcome);
        outcome
    }

    pub async fn load_state(&self) -> LoadState {
        self.state.read().await.load_state
    }

    pub async fn dishes(&self) -> Vec<Dish> {
        self.state.read().await.dishes.clone()
    }

    pub async fn categories(&self) -> Vec<Category> {
        self.state.read().await.categories.clone()
    }

    // ========== Filter Engine ==========

    /// Select the category filter
    ///
    /// Only "All" or a category from the current collection is accepted.
    pub async fn select_category(&self, filter: CategoryFilter) -> CatalogResult<()> {
        let mut s = self.state.write().await;
        if let CategoryFilter::Category(name) = &filter
            && !s.has_category(name)
        {
            return Err(CatalogError::validation(
                "category",
                format!("'{}' does not exist", name),
            ));
        }
        s.filter = filter;
        Ok(())
    }

    pub async fn selected_filter(&self) -> CategoryFilter {
        self.state.read().await.filter.clone()
    }

    /// Dishes matching the selected filter, derived on every call
    pub async fn visible_dishes(&self) -> Vec<Dish> {
        let s = self.state.read().await;
        filter::visible_dishes(&s.dishes, &s.filter)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn filter_options(&self) -> Vec<FilterOption> {
        let s = self.state.read().await;
        filter::filter_options(&s.categories, &s.filter)
    }

    /// Loading placeholder or the filtered dish grid
    pub async fn view(&self) -> CatalogView {
        let s = self.state.read().await;
        match s.load_state {
            LoadState::Loading => CatalogView::Loading,
            LoadState::Ready => CatalogView::Grid(
                filter::visible_dishes(&s.dishes, &s.filter)
                    .into_iter()
                    .map(DishCard::from)
                    .collect(),
            ),
        }
    }

    pub async fn search(&self, query: &str) -> SearchResults {
        search::search_dishes(&self.state.read().await.dishes, query)
    }

    // ========== Form Submission ==========

    /// Validate, send and settle one form submission
    async fn submit<D, F, Fut, T>(
        &self,
        operation: Operation,
        form: fn(&mut CatalogState) -> &mut FormController<D>,
        send: F,
    ) -> CatalogResult<Submitted>
    where
        D: Draft,
        F: FnOnce(D::Payload) -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        let (mount, session, payload) = {
            let mut guard = self.state.write().await;
            let s = &mut *guard;
            let mount = s.mounts.current();
            let categories = s.categories.clone();
            let (session, payload) = form(s).begin_submit(&categories)?;
            (mount, session, payload)
        };
        tracing::debug!(?operation, session = %session, "Submitting");

        let result = loader::bounded(self.timeout, send(payload))
            .await
            .map(|_| ());

        let attached = {
            let mut s = self.state.write().await;
            if s.mounts.is_current(mount) {
                if !form(&mut *s).complete(session, &result) {
                    tracing::debug!(?operation, session = %session, "Form moved on; result not shown in form");
                }
                true
            } else {
                false
            }
        };

        if !attached {
            tracing::debug!(?operation, "Submission settled after unmount; result dropped");
            return result.map(|_| Submitted::Detached);
        }
        match &result {
            Ok(()) => tracing::info!(?operation, "Submission succeeded"),
            Err(e) => tracing::warn!(?operation, error = %e, "Submission failed"),
        }
        self.report(operation, &result);
        result.map(|_| Submitted::Attached)
    }

    // ========== Food Form ==========

    pub async fn open_food_form(&self) {
        self.state.write().await.food_form.open();
    }

    pub async fn cancel_food_form(&self) -> CatalogResult<()> {
        self.state.write().await.food_form.cancel(self.cancel_policy)
    }

    /// Edit the open food draft
    pub async fn edit_food<F>(&self, edit: F) -> CatalogResult<()>
    where
        F: FnOnce(&mut FoodDraft),
    {
        let mut s = self.state.write().await;
        edit(s.food_form.draft_mut()?);
        Ok(())
    }

    pub async fn set_food_field(&self, field: FoodField, value: impl Into<String>) -> CatalogResult<()> {
        let value = value.into();
        self.edit_food(|draft| draft.set(field, value)).await
    }

    pub async fn set_food_image(&self, image: Option<ImageUpload>) -> CatalogResult<()> {
        self.edit_food(|draft| draft.image = image).await
    }

    pub async fn food_phase(&self) -> FormPhase {
        self.state.read().await.food_form.phase()
    }

    pub async fn food_draft(&self) -> FoodDraft {
        self.state.read().await.food_form.draft().clone()
    }

    /// Create the drafted dish, then reload all dishes
    pub async fn submit_food(&self) -> CatalogResult<SubmitOutcome> {
        let submitted = self
            .submit(Operation::AddFood, CatalogState::food_form, |payload| async move {
                self.api.create_dish(&payload).await
            })
            .await?;

        match submitted {
            Submitted::Detached => Ok(SubmitOutcome::Detached),
            Submitted::Attached => {
                // The dish exists on the server; a failed reload is reported as a refresh failure
                let refreshed = matches!(self.reload_dishes().await, Ok(LoadOutcome::Applied));
                Ok(SubmitOutcome::Created { refreshed })
            }
        }
    }

    pub async fn food_form_view(&self) -> FoodFormView {
        let s = self.state.read().await;
        let form = &s.food_form;
        let draft = form.draft();
        FoodFormView {
            visible: form.is_visible(),
            name: draft.name.clone(),
            category: draft.category.clone(),
            price: draft.price.clone(),
            image_label: draft.image_label().to_string(),
            has_image: draft.image.is_some(),
            category_options: view::category_options(&s.categories),
            submit: form.submit_control(),
            cancel_enabled: form.cancel_enabled(self.cancel_policy),
            error: form.last_error().map(ToString::to_string),
        }
    }

    // ========== Category Form ==========

    pub async fn open_category_form(&self) {
        self.state.write().await.category_form.open();
    }

    pub async fn cancel_category_form(&self) -> CatalogResult<()> {
        self.state
            .write()
            .await
            .category_form
            .cancel(self.cancel_policy)
    }

    pub async fn set_category_name(&self, name: impl Into<String>) -> CatalogResult<()> {
        let mut s = self.state.write().await;
        s.category_form.draft_mut()?.name = name.into();
        Ok(())
    }

    pub async fn category_phase(&self) -> FormPhase {
        self.state.read().await.category_form.phase()
    }

    pub async fn category_draft(&self) -> CategoryDraft {
        self.state.read().await.category_form.draft().clone()
    }

    /// Create the drafted category, then reload all categories
    pub async fn submit_category(&self) -> CatalogResult<SubmitOutcome> {
        let submitted = self
            .submit(
                Operation::AddCategory,
                CatalogState::category_form,
                |payload| async move { self.api.create_category(&payload).await },
            )
            .await?;

        match submitted {
            Submitted::Detached => Ok(SubmitOutcome::Detached),
            Submitted::Attached => {
                let refreshed =
                    matches!(self.reload_categories().await, Ok(LoadOutcome::Applied));
                Ok(SubmitOutcome::Created { refreshed })
            }
        }
    }

    pub async fn category_form_view(&self) -> CategoryFormView {
        let s = self.state.read().await;
        let form = &s.category_form;
        CategoryFormView {
            visible: form.is_visible(),
            name: form.draft().name.clone(),
            submit: form.submit_control(),
            cancel_enabled: form.cancel_enabled(self.cancel_policy),
            error: form.last_error().map(ToString::to_string),
        }
    }
}
