//! Listener registry and subscription handles

use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Zero-argument callback invoked after every committed transition
pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// Ordered set of listeners owned by a store
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(existing, _)| *existing != id);
        before != self.entries.len()
    }

    /// Listeners registered right now, in registration order
    ///
    /// Notification iterates over this copy, so listeners may subscribe,
    /// unsubscribe or dispatch without holding the registry lock.
    pub(crate) fn snapshot(&self) -> Vec<Listener> {
        self.entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Handle returned by `Store::subscribe`
///
/// Dropping the handle keeps the listener registered; call
/// [`Subscription::unsubscribe`] to remove it.
#[derive(Debug, Clone)]
pub struct Subscription {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
}

impl Subscription {
    pub(crate) fn new(id: u64, listeners: &Arc<Mutex<Listeners>>) -> Self {
        Self {
            id,
            listeners: Arc::downgrade(listeners),
        }
    }

    /// Remove exactly this listener
    ///
    /// Calling it again, or after the store is gone, does nothing.
    pub fn unsubscribe(&self) {
        if let Some(listeners) = self.listeners.upgrade() {
            let removed = listeners
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(self.id);
            if removed {
                log::trace!("Listener {} unsubscribed", self.id);
            }
        }
    }

    /// Whether the listener is still registered
    pub fn is_active(&self) -> bool {
        self.listeners.upgrade().is_some_and(|listeners| {
            listeners
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .entries
                .iter()
                .any(|(id, _)| *id == self.id)
        })
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
