//! # Keyed Record Registry
//!
//! The record-store contract the ledger is written against: get, add, and
//! update by key. `add` rejects duplicate keys and `update` rejects missing
//! ones, so the two operations cannot be confused into an upsert.
//!
//! `InMemoryRegistry` is the only implementation in this workspace. It is
//! backed by a `BTreeMap` so that serialization of the ledger store file is
//! deterministic, and it serves both the tests and the CLI's JSON store.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A record that knows its own registry key.
pub trait Record {
    /// The key namespace this record lives in.
    type Key: Ord + Clone + Display;

    /// The key under which this record is stored.
    fn key(&self) -> &Self::Key;
}

/// Failure of a registry operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// `add` was called with a key that already exists.
    #[error("record {key} already exists in the {registry} registry")]
    Duplicate {
        /// Rendered key of the rejected record.
        key: String,
        /// Registry name, for the error message only.
        registry: &'static str,
    },

    /// `update` or a required `get` was called with an unknown key.
    #[error("record {key} not found in the {registry} registry")]
    NotFound {
        /// Rendered key that missed.
        key: String,
        /// Registry name, for the error message only.
        registry: &'static str,
    },
}

/// Keyed record store: get, add, update.
pub trait Registry<R: Record> {
    /// Look up a record by key.
    fn get(&self, key: &R::Key) -> Option<&R>;

    /// Insert a new record. Fails on duplicate keys.
    fn add(&mut self, record: R) -> Result<(), RegistryError>;

    /// Replace an existing record. Fails on missing keys.
    fn update(&mut self, record: R) -> Result<(), RegistryError>;
}

/// A `BTreeMap`-backed registry, keyed by `K`.
///
/// Serializes transparently as the underlying map, so the ledger store file
/// reads as plain JSON objects keyed by email / signature name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryRegistry<K: Ord, R> {
    records: BTreeMap<K, R>,
    #[serde(skip)]
    name: RegistryName,
}

/// Registry name carried for error messages. Defaults to `"record"` after
/// deserialization; the CLI store re-tags registries on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryName(pub &'static str);

impl Default for RegistryName {
    fn default() -> Self {
        Self("record")
    }
}

impl<K: Ord, R> InMemoryRegistry<K, R> {
    /// An empty registry tagged with a name for error messages.
    pub fn new(name: &'static str) -> Self {
        Self {
            records: BTreeMap::new(),
            name: RegistryName(name),
        }
    }

    /// Re-tag the registry name (used after deserialization).
    pub fn set_name(&mut self, name: &'static str) {
        self.name = RegistryName(name);
    }

    /// Iterate over all records in key order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.values()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record> Registry<R> for InMemoryRegistry<R::Key, R> {
    fn get(&self, key: &R::Key) -> Option<&R> {
        self.records.get(key)
    }

    fn add(&mut self, record: R) -> Result<(), RegistryError> {
        let key = record.key().clone();
        if self.records.contains_key(&key) {
            return Err(RegistryError::Duplicate {
                key: key.to_string(),
                registry: self.name.0,
            });
        }
        self.records.insert(key, record);
        Ok(())
    }

    fn update(&mut self, record: R) -> Result<(), RegistryError> {
        let key = record.key().clone();
        if !self.records.contains_key(&key) {
            return Err(RegistryError::NotFound {
                key: key.to_string(),
                registry: self.name.0,
            });
        }
        self.records.insert(key, record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Signee;
    use paxsign_core::EmailAddress;

    fn signee(email: &str) -> Signee {
        Signee::new(EmailAddress::new(email).unwrap())
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut registry: InMemoryRegistry<EmailAddress, Signee> =
            InMemoryRegistry::new("signee");
        registry.add(signee("a@pax.example")).unwrap();
        let err = registry.add(signee("a@pax.example")).unwrap_err();
        assert!(matches!(err, RegistryError::Duplicate { .. }));
    }

    #[test]
    fn test_update_requires_existing_record() {
        let mut registry: InMemoryRegistry<EmailAddress, Signee> =
            InMemoryRegistry::new("signee");
        let err = registry.update(signee("a@pax.example")).unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { .. }));

        registry.add(signee("a@pax.example")).unwrap();
        let mut updated = signee("a@pax.example");
        updated.validation_info.push("note".into());
        registry.update(updated).unwrap();
        let key = EmailAddress::new("a@pax.example").unwrap();
        assert_eq!(registry.get(&key).unwrap().validation_info, vec!["note"]);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut registry: InMemoryRegistry<EmailAddress, Signee> =
            InMemoryRegistry::new("signee");
        registry.add(signee("a@pax.example")).unwrap();
        let json = serde_json::to_value(&registry).unwrap();
        assert!(json.get("a@pax.example").is_some());
    }
}
