//! Notifier port for recalculation events.
//!
//! This module defines the trait for observing recompute outcomes: each
//! refreshed item announces itself, and every pass ends with a single
//! collection-level signal other order views synchronize on.

use crate::domain::LineItemId;

/// Events that can trigger notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// One line item's amounts were refreshed from the pricing service.
    ItemAmountsUpdated {
        /// The refreshed item.
        id: LineItemId,
    },
    /// A recompute pass settled: every request finished, results applied.
    ///
    /// Fires exactly once per pass, after all item-level events.
    AmountsUpdated {
        /// Items whose amounts were refreshed.
        updated: usize,
        /// Items whose requests failed and were left unchanged.
        failed: usize,
    },
}

/// Trait for notification handlers.
///
/// Implement this trait to receive events from a recompute pass.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - The `notify` method should not block or perform slow I/O synchronously
/// - Consider spawning async tasks for slow operations
pub trait Notifier: Send + Sync {
    /// Handle an event.
    fn notify(&self, event: Event);
}

/// Registry of notifiers (composite pattern).
///
/// Broadcasts events to all registered notifiers.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Notify all registered notifiers.
    pub fn notify_all(&self, event: Event) {
        for notifier in &self.notifiers {
            notifier.notify(event.clone());
        }
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: Event) {}
}

/// A logging notifier that logs events via tracing.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: Event) {
        use tracing::info;
        match event {
            Event::ItemAmountsUpdated { id } => {
                info!(item = %id, "Item amounts updated");
            }
            Event::AmountsUpdated { updated, failed } => {
                info!(updated, failed, "Amounts updated");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::notifier::RecordingNotifier;

    #[test]
    fn registry_broadcasts_to_every_notifier() {
        let first = RecordingNotifier::new();
        let second = RecordingNotifier::new();

        let mut registry = NotifierRegistry::new();
        registry.register(Box::new(first.clone()));
        registry.register(Box::new(second.clone()));
        assert_eq!(registry.len(), 2);

        registry.notify_all(Event::AmountsUpdated {
            updated: 2,
            failed: 0,
        });

        assert_eq!(first.len(), 1);
        assert_eq!(second.events(), first.events());
    }

    #[test]
    fn empty_registry_swallows_events() {
        let registry = NotifierRegistry::new();
        assert!(registry.is_empty());
        registry.notify_all(Event::ItemAmountsUpdated {
            id: LineItemId::from("item-1"),
        });
    }
}
