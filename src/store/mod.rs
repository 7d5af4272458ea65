//! Shared configuration store
//!
//! Holds the current value of every form field, keyed by field id. The only
//! mutation is [`ConfigStore::set_value`]; every write is delivered to the
//! subscriptions registered for that id so editors can re-hydrate.

mod applet_config;

pub use applet_config::{AppletConfig, parse_bool};

use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};
use tokio::sync::mpsc;

/// Value record stored for one field id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreEntry {
    pub value: String,
}

/// Notification delivered to subscribers after a write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueChange {
    pub id: String,
    pub value: String,
}

struct Subscriber {
    token: u64,
    field_id: String,
    tx: mpsc::UnboundedSender<ValueChange>,
}

#[derive(Default)]
struct StoreInner {
    entries: HashMap<String, StoreEntry>,
    subscribers: Vec<Subscriber>,
    next_token: u64,
}

/// Thread-safe, process-wide config store
///
/// Cloning is cheap and every clone observes the same entries. Writes and
/// their notifications happen under a single write lock, so a write is atomic
/// per id and snapshots never see a half-applied update.
#[derive(Clone, Default)]
pub struct ConfigStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with values (e.g. from a saved values file)
    pub fn from_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        {
            let mut inner = store.write();
            for (id, value) in values {
                inner.entries.insert(
                    id.into(),
                    StoreEntry {
                        value: value.into(),
                    },
                );
            }
        }
        store
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every entry
    pub fn read_all(&self) -> HashMap<String, StoreEntry> {
        self.read().entries.clone()
    }

    /// Get the entry for a field id
    pub fn get(&self, id: &str) -> Option<StoreEntry> {
        self.read().entries.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read().entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().entries.is_empty()
    }

    /// Set the value for a field id, creating the entry on first write
    ///
    /// Last write wins. Subscribers for `id` are notified before the lock is
    /// released; subscribers whose receiving side is gone are pruned.
    pub fn set_value(&self, id: &str, value: impl Into<String>) {
        let value = value.into();
        let mut inner = self.write();
        inner.entries.insert(
            id.to_string(),
            StoreEntry {
                value: value.clone(),
            },
        );

        let mut notified = 0;
        inner.subscribers.retain(|sub| {
            if sub.field_id != id {
                return true;
            }
            let delivered = sub
                .tx
                .send(ValueChange {
                    id: id.to_string(),
                    value: value.clone(),
                })
                .is_ok();
            if delivered {
                notified += 1;
            }
            delivered
        });

        tracing::debug!(field = id, notified, "Config value set");
    }

    /// Register for change notifications on one field id
    ///
    /// Dropping the returned [`Subscription`] unregisters it.
    pub fn subscribe(&self, id: &str) -> Subscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.write();
        let token = inner.next_token;
        inner.next_token += 1;
        inner.subscribers.push(Subscriber {
            token,
            field_id: id.to_string(),
            tx,
        });

        Subscription {
            token,
            field_id: id.to_string(),
            rx,
            store: Arc::downgrade(&self.inner),
        }
    }

    /// Number of live subscriptions for a field id
    pub fn subscriber_count(&self, id: &str) -> usize {
        self.read()
            .subscribers
            .iter()
            .filter(|sub| sub.field_id == id)
            .count()
    }
}

/// Change stream for a single field id
pub struct Subscription {
    token: u64,
    field_id: String,
    rx: mpsc::UnboundedReceiver<ValueChange>,
    store: Weak<RwLock<StoreInner>>,
}

impl Subscription {
    pub fn field_id(&self) -> &str {
        &self.field_id
    }

    /// Take the next queued change without waiting
    pub fn try_next(&mut self) -> Option<ValueChange> {
        self.rx.try_recv().ok()
    }

    /// Take every queued change
    pub fn drain(&mut self) -> Vec<ValueChange> {
        let mut changes = Vec::new();
        while let Some(change) = self.try_next() {
            changes.push(change);
        }
        changes
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            let mut inner = inner.write().unwrap_or_else(PoisonError::into_inner);
            inner.subscribers.retain(|sub| sub.token != self.token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_new_is_empty() {
        let store = ConfigStore::new();
        assert!(store.is_empty());
        assert!(store.get("c1").is_none());
    }

    #[test]
    fn test_set_value_creates_entry() {
        let store = ConfigStore::new();
        store.set_value("c1", "aabbcc");

        assert!(store.contains("c1"));
        assert_eq!(store.get("c1").unwrap().value, "aabbcc");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_value_last_write_wins() {
        let store = ConfigStore::new();
        store.set_value("c1", "111111");
        store.set_value("c1", "222222");

        assert_eq!(store.get("c1").unwrap().value, "222222");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clones_share_entries() {
        let store = ConfigStore::new();
        let other = store.clone();
        other.set_value("c1", "abc");

        assert_eq!(store.get("c1").unwrap().value, "abc");
    }

    #[test]
    fn test_from_values() {
        let store = ConfigStore::from_values([("a", "1"), ("b", "2")]);
        let all = store.read_all();

        assert_eq!(all.len(), 2);
        assert_eq!(all["a"].value, "1");
        assert_eq!(all["b"].value, "2");
    }

    #[test]
    fn test_subscription_is_filtered_by_id() {
        let store = ConfigStore::new();
        let mut sub = store.subscribe("c1");

        store.set_value("c2", "ignored");
        store.set_value("c1", "seen");

        let changes = sub.drain();
        assert_eq!(
            changes,
            vec![ValueChange {
                id: "c1".to_string(),
                value: "seen".to_string(),
            }]
        );
        assert!(sub.try_next().is_none());
    }

    #[test]
    fn test_subscription_preserves_write_order() {
        let store = ConfigStore::new();
        let mut sub = store.subscribe("c1");

        store.set_value("c1", "first");
        store.set_value("c1", "second");

        let values: Vec<String> = sub.drain().into_iter().map(|c| c.value).collect();
        assert_eq!(values, vec!["first", "second"]);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let store = ConfigStore::new();
        let sub = store.subscribe("c1");
        let _other = store.subscribe("c1");
        assert_eq!(store.subscriber_count("c1"), 2);

        drop(sub);
        assert_eq!(store.subscriber_count("c1"), 1);

        // Writes after teardown still succeed
        store.set_value("c1", "value");
        assert_eq!(store.get("c1").unwrap().value, "value");
    }

    #[test]
    fn test_subscription_outliving_store() {
        let store = ConfigStore::new();
        let mut sub = store.subscribe("c1");
        store.set_value("c1", "last");
        drop(store);

        assert_eq!(sub.drain().len(), 1);
        drop(sub);
    }
}
