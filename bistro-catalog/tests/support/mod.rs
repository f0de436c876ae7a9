//! Scripted catalog API for manager tests
//!
//! Each endpoint plays queued replies in order; an empty queue answers
//! with an empty success. A reply can be held back until its gate is
//! released, or delayed.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::str::FromStr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use bistro_catalog::{BroadcastNotifier, CatalogConfig, CatalogManager, Notification};
use bistro_client::{CatalogApi, ClientError, ClientResult};
use shared::{Category, CategoryCreate, Decimal, Dish, DishCreate};
use std::sync::Arc;
use tokio::sync::{broadcast, oneshot};

pub type TestManager = CatalogManager<Arc<MockApi>, BroadcastNotifier>;

/// One scripted reply
pub struct Scripted<T> {
    result: ClientResult<T>,
    gate: Option<oneshot::Receiver<()>>,
    delay: Option<Duration>,
}

impl<T> Scripted<T> {
    pub fn ok(value: T) -> Self {
        Self {
            result: Ok(value),
            gate: None,
            delay: None,
        }
    }

    /// Server answered `status`
    pub fn rejected(status: u16) -> Self {
        Self {
            result: Err(ClientError::Rejected {
                status,
                message: "boom".into(),
            }),
            gate: None,
            delay: None,
        }
    }

    /// Server unreachable
    pub fn offline() -> Self {
        Self {
            result: Err(ClientError::Connection("connection refused".into())),
            gate: None,
            delay: None,
        }
    }

    /// Request could not be built on the client
    pub fn unbuildable() -> Self {
        Self {
            result: Err(ClientError::Config(
                "Failed to create multipart: invalid mime".into(),
            )),
            gate: None,
            delay: None,
        }
    }

    /// Hold the reply until the returned sender fires (or is dropped)
    pub fn gated(mut self) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        self.gate = Some(rx);
        (self, tx)
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    async fn play(self) -> ClientResult<T> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(gate) = self.gate {
            let _ = gate.await;
        }
        self.result
    }
}

/// Reply queue and call counter of one endpoint
pub struct Script<T> {
    replies: Mutex<VecDeque<Scripted<T>>>,
    calls: AtomicUsize,
}

impl<T> Default for Script<T> {
    fn default() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }
}

impl<T: Default> Script<T> {
    pub fn push(&self, reply: Scripted<T>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next(&self) -> Scripted<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Scripted::ok(T::default()))
    }
}

#[derive(Default)]
pub struct MockApi {
    pub dishes: Script<Vec<Dish>>,
    pub categories: Script<Vec<Category>>,
    pub create_dish: Script<Option<Dish>>,
    pub create_category: Script<Option<Category>>,
    pub created_dishes: Mutex<Vec<DishCreate>>,
    pub created_categories: Mutex<Vec<CategoryCreate>>,
}

impl MockApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue one successful catalog load
    pub fn serve(&self, dishes: Vec<Dish>, categories: Vec<Category>) {
        self.dishes.push(Scripted::ok(dishes));
        self.categories.push(Scripted::ok(categories));
    }
}

#[async_trait]
impl CatalogApi for MockApi {
    async fn list_dishes(&self) -> ClientResult<Vec<Dish>> {
        self.dishes.next().play().await
    }

    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.categories.next().play().await
    }

    async fn create_dish(&self, dish: &DishCreate) -> ClientResult<Option<Dish>> {
        self.created_dishes.lock().unwrap().push(dish.clone());
        self.create_dish.next().play().await
    }

    async fn create_category(&self, category: &CategoryCreate) -> ClientResult<Option<Category>> {
        self.created_categories
            .lock()
            .unwrap()
            .push(category.clone());
        self.create_category.next().play().await
    }
}

pub fn dish(id: &str, name: &str, category: &str, price: &str) -> Dish {
    Dish {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        price: Decimal::from_str(price).unwrap(),
        image: None,
    }
}

pub fn category(name: &str) -> Category {
    Category {
        id: Some(format!("cat-{}", name.to_lowercase())),
        name: name.into(),
    }
}

pub fn test_config() -> CatalogConfig {
    CatalogConfig::new("http://catalog.test").with_timeout(Duration::from_secs(2))
}

pub fn manager_with(
    api: &Arc<MockApi>,
    config: &CatalogConfig,
) -> (TestManager, broadcast::Receiver<Notification>) {
    let notifier = BroadcastNotifier::default();
    let rx = notifier.subscribe();
    (CatalogManager::new(api.clone(), notifier, config), rx)
}

pub fn manager(api: &Arc<MockApi>) -> (TestManager, broadcast::Receiver<Notification>) {
    manager_with(api, &test_config())
}

/// Notifications delivered so far
pub fn drain(rx: &mut broadcast::Receiver<Notification>) -> Vec<Notification> {
    let mut out = Vec::new();
    while let Ok(n) = rx.try_recv() {
        out.push(n);
    }
    out
}
