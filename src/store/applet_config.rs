//! Flat applet configuration exported from the store
//!
//! Applets read their configuration as a plain `id -> string` map. Typed
//! access mirrors what applets expect: strings verbatim, booleans from
//! `"true"`/`"1"`.

use super::ConfigStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of the store in the shape applets consume
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppletConfig {
    values: BTreeMap<String, String>,
}

impl AppletConfig {
    /// Snapshot the current store
    pub fn from_store(store: &ConfigStore) -> Self {
        let values = store
            .read_all()
            .into_iter()
            .map(|(id, entry)| (id, entry.value))
            .collect();
        Self { values }
    }

    /// Get a string value
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Get a string value, falling back to `default` when missing
    pub fn get_str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_str(key).unwrap_or(default)
    }

    /// Get a boolean value
    ///
    /// `"true"` and `"1"` are true; any other present value is false.
    /// Missing keys return `None`.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_str(key).map(parse_bool)
    }

    /// Get a boolean value, falling back to `default` when missing
    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_bool(key).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as pretty JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.values)
    }
}

impl From<&ConfigStore> for AppletConfig {
    fn from(store: &ConfigStore) -> Self {
        Self::from_store(store)
    }
}

/// Parse a stored boolean the way applets do
pub fn parse_bool(value: &str) -> bool {
    matches!(value, "true" | "1")
}
