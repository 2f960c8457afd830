//! Function identity registry.
//!
//! Maps a [`FunctionKey`] to a [`FunctionRecord`] carrying a small integer
//! [`FunctionId`]. A function's ID is the number of functions registered
//! before it, so the IDs of one registry are dense from 0 and match the live
//! slots of the paired counters.

use crate::symbol::{bounded_name, FunctionKey, ResolvedSymbol};
use serde::Serialize;
use std::collections::BTreeMap;

/// Index of a function in its registry and in the paired counters
///
/// Distinct from a raw `usize` so that an ID from one place cannot be
/// confused with a counter value or a length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FunctionId(u32);

impl FunctionId {
    /// Create a function ID
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner value
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Counter slot for this ID
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A function seen during instrumentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionRecord {
    /// Identity key
    pub key: FunctionKey,
    /// Function name, at most [`MAX_NAME_LEN`](crate::MAX_NAME_LEN) characters
    pub function_name: String,
    /// Library name, at most [`MAX_NAME_LEN`](crate::MAX_NAME_LEN) characters
    pub library_name: String,
    /// Assigned ID
    pub id: FunctionId,
}

/// Registry of the functions seen on one accounting path
#[derive(Debug, Default)]
pub struct FunctionRegistry {
    records: BTreeMap<FunctionKey, FunctionRecord>,
}

impl FunctionRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a key is registered
    #[must_use]
    pub fn exists(&self, key: &FunctionKey) -> bool {
        self.records.contains_key(key)
    }

    /// ID the next inserted function receives
    #[must_use]
    pub fn next_id(&self) -> FunctionId {
        let next = u32::try_from(self.records.len()).unwrap_or(u32::MAX);
        FunctionId::new(next)
    }

    /// Record for `symbol` carrying [`Self::next_id`]
    fn new_record(&self, symbol: &ResolvedSymbol) -> FunctionRecord {
        FunctionRecord {
            key: symbol.key(),
            function_name: bounded_name(symbol.function.as_str()),
            library_name: bounded_name(symbol.library.as_str()),
            id: self.next_id(),
        }
    }

    /// Insert a record
    ///
    /// # Panics
    ///
    /// Panics if the key is already registered (check [`Self::exists`]
    /// first) or if the record does not carry [`Self::next_id`].
    pub fn insert(&mut self, record: FunctionRecord) {
        assert!(
            !self.records.contains_key(&record.key),
            "function {} registered twice",
            record.key
        );
        let expected = self.next_id();
        assert_eq!(
            record.id, expected,
            "function {} inserted out of order",
            record.key
        );
        let _ = self.records.insert(record.key.clone(), record);
    }

    /// ID of a registered key
    ///
    /// # Panics
    ///
    /// Panics if the key is not registered.
    #[must_use]
    pub fn id_of(&self, key: &FunctionKey) -> FunctionId {
        match self.records.get(key) {
            Some(record) => record.id,
            None => panic!("registry has no function {key}"),
        }
    }

    /// Record of a key, if registered
    #[must_use]
    pub fn get(&self, key: &FunctionKey) -> Option<&FunctionRecord> {
        self.records.get(key)
    }

    /// Return the ID for `symbol`, registering it on first sight
    ///
    /// The flag is `true` when the function was new.
    pub fn get_or_insert(&mut self, symbol: &ResolvedSymbol) -> (FunctionId, bool) {
        let key = symbol.key();
        if self.exists(&key) {
            return (self.id_of(&key), false);
        }
        let record = self.new_record(symbol);
        let id = record.id;
        self.insert(record);
        (id, true)
    }

    /// Number of registered functions
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no function is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = &FunctionRecord> {
        self.records.values()
    }
}
