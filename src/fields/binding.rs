//! Store binding shared by every field editor
//!
//! Each editor owns one [`FieldBinding`]. It subscribes to its field id on
//! attach and unsubscribes when dropped. Editors call [`FieldBinding::hydrate`]
//! on mount and again whenever [`FieldBinding::take_changes`] reports queued
//! writes; they call [`FieldBinding::commit`] on every user edit.

use crate::schema::FieldDescriptor;
use crate::store::{ConfigStore, Subscription};

/// Outcome of one hydration pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hydration {
    /// The store holds a value for this field
    Stored(String),
    /// No stored value; the raw descriptor default was written to the store
    Seeded(String),
    /// No stored value and no default; the store was left untouched
    Unset,
}

/// Two-way link between one field id and the config store
pub struct FieldBinding {
    field_id: String,
    raw_default: Option<String>,
    store: ConfigStore,
    subscription: Subscription,
}

impl FieldBinding {
    /// Subscribe to the descriptor's id
    pub fn attach(descriptor: &FieldDescriptor, store: &ConfigStore) -> Self {
        Self {
            field_id: descriptor.id.clone(),
            raw_default: descriptor.raw_default(),
            store: store.clone(),
            subscription: store.subscribe(&descriptor.id),
        }
    }

    pub fn field_id(&self) -> &str {
        &self.field_id
    }

    /// Read the current value, seeding the store with the default if needed
    ///
    /// The seed uses the raw default, not the editor's normalized form. Once
    /// seeded, the entry exists, so later passes return `Stored`.
    pub fn hydrate(&self) -> Hydration {
        if let Some(entry) = self.store.get(&self.field_id) {
            return Hydration::Stored(entry.value);
        }

        match &self.raw_default {
            Some(default) => {
                tracing::debug!(field = %self.field_id, "Seeding store with default");
                self.store.set_value(&self.field_id, default.clone());
                Hydration::Seeded(default.clone())
            }
            None => Hydration::Unset,
        }
    }

    /// Write a user edit to the store
    pub fn commit(&self, raw: &str) {
        self.store.set_value(&self.field_id, raw);
    }

    /// Drain queued change notifications, returning how many arrived
    pub fn take_changes(&mut self) -> usize {
        self.subscription.drain().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hydrate_stored() {
        let store = ConfigStore::from_values([("f", "abc")]);
        let binding = FieldBinding::attach(&FieldDescriptor::new("f", "text"), &store);
        assert_eq!(binding.hydrate(), Hydration::Stored("abc".to_string()));
    }

    #[test]
    fn test_hydrate_seeds_once() {
        let store = ConfigStore::new();
        let descriptor = FieldDescriptor::new("f", "text").with_default("hello");
        let mut binding = FieldBinding::attach(&descriptor, &store);

        assert_eq!(binding.hydrate(), Hydration::Seeded("hello".to_string()));
        assert_eq!(binding.hydrate(), Hydration::Stored("hello".to_string()));
        assert_eq!(binding.take_changes(), 1);
    }

    #[test]
    fn test_hydrate_unset_does_not_write() {
        let store = ConfigStore::new();
        let mut binding = FieldBinding::attach(&FieldDescriptor::new("f", "text"), &store);

        assert_eq!(binding.hydrate(), Hydration::Unset);
        assert!(store.is_empty());
        assert_eq!(binding.take_changes(), 0);
    }

    #[test]
    fn test_commit_notifies_own_subscription() {
        let store = ConfigStore::new();
        let mut binding = FieldBinding::attach(&FieldDescriptor::new("f", "text"), &store);

        binding.commit("x");
        assert_eq!(store.get("f").unwrap().value, "x");
        assert_eq!(binding.take_changes(), 1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let store = ConfigStore::new();
        let binding = FieldBinding::attach(&FieldDescriptor::new("f", "text"), &store);
        assert_eq!(store.subscriber_count("f"), 1);
        drop(binding);
        assert_eq!(store.subscriber_count("f"), 0);
    }
}
