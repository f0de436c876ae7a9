//! Notification sink
//!
//! Catalog operations return plain results; [`Notification::for_outcome`]
//! turns a terminal result into the message the user sees, and a
//! [`Notifier`] presents it. Delivery is fire-and-forget.

use std::sync::Arc;

use serde::Serialize;
use shared::ErrorKind;
use tokio::sync::broadcast;

use crate::error::CatalogResult;

/// Asynchronous operation that produced a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    LoadCatalog,
    AddFood,
    AddCategory,
    RefreshDishes,
    RefreshCategories,
}

impl Operation {
    /// Message for a successful outcome; `None` stays silent
    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            Self::AddFood => Some("Food added successfully"),
            Self::AddCategory => Some("Category added successfully"),
            Self::LoadCatalog | Self::RefreshDishes | Self::RefreshCategories => None,
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::LoadCatalog => "Failed to load data",
            Self::AddFood => "Failed to add food",
            Self::AddCategory => "Failed to add category",
            Self::RefreshDishes => "Failed to refresh dishes",
            Self::RefreshCategories => "Failed to refresh categories",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub operation: Operation,
    pub message: String,
    /// Failure classification, for error notifications
    pub kind: Option<ErrorKind>,
}

impl Notification {
    pub fn success(operation: Operation, message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            operation,
            message: message.into(),
            kind: None,
        }
    }

    pub fn error(operation: Operation, kind: ErrorKind) -> Self {
        Self {
            level: NotificationLevel::Error,
            operation,
            message: operation.failure_message().to_string(),
            kind: Some(kind),
        }
    }

    /// Notification for the terminal result of `operation`
    ///
    /// Validation failures are reported on the form itself and produce none.
    pub fn for_outcome<T>(operation: Operation, result: &CatalogResult<T>) -> Option<Self> {
        match result {
            Ok(_) => operation
                .success_message()
                .map(|msg| Self::success(operation, msg)),
            Err(e) if e.kind() == ErrorKind::ValidationFailure => None,
            Err(e) => Some(Self::error(operation, e.kind())),
        }
    }
}

/// Presents notifications to the user
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Writes notifications to the tracing log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => {
                tracing::info!(operation = ?notification.operation, "{}", notification.message)
            }
            NotificationLevel::Error => tracing::warn!(
                operation = ?notification.operation,
                kind = ?notification.kind,
                "{}",
                notification.message
            ),
        }
    }
}

/// Fans notifications out to every subscriber
///
/// Sending with no subscribers drops the notification.
#[derive(Debug, Clone)]
pub struct BroadcastNotifier {
    sender: broadcast::Sender<Notification>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new(64)
    }
}

impl Notifier for BroadcastNotifier {
    fn notify(&self, notification: Notification) {
        if self.sender.send(notification).is_err() {
            tracing::trace!("Notification dropped: no subscribers");
        }
    }
}
