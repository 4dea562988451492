//! Insertion-ordered key-value store.
//!
//! ## Design
//!
//! Entries live in a `Vec` in first-insertion order. A hash index maps each
//! key to its slot so lookups do not scan. Updating an existing key writes
//! through the index and never moves the entry; deleting shifts later entries
//! down one slot and fixes their index entries.
//!
//! Traversal state is not kept on the store. Each call to
//! [`KeyValueStore::cursor`] hands out an independent [`Cursor`], so any
//! number of traversals can run side by side.

use crate::builder::StoreBuilder;
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::key::validate_key;
use crate::value::Value;
use rustc_hash::FxHashMap;
use std::fmt;

/// An in-memory mapping from non-empty string keys to values, iterated in
/// insertion order.
///
/// # Example
///
/// ```
/// use ordkv_core::{KeyValueStore, Value};
///
/// # fn main() -> ordkv_core::Result<()> {
/// let mut store: KeyValueStore = KeyValueStore::new();
/// store.add("host", "localhost")?.add("port", 5432)?;
///
/// assert_eq!(store.get("port")?, &Value::Int(5432));
/// assert!(store.has("host")?);
///
/// store.delete("host")?;
/// assert_eq!(store.keys().collect::<Vec<_>>(), ["port"]);
/// # Ok(())
/// # }
/// ```
pub struct KeyValueStore<V = Value> {
    entries: Vec<(String, V)>,
    index: FxHashMap<String, usize>,
}

impl<V> KeyValueStore<V> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty store with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Start configuring a store.
    pub fn builder() -> StoreBuilder<V> {
        StoreBuilder::new()
    }

    // =========================================================================
    // Core operations
    // =========================================================================

    /// Insert or update an entry.
    ///
    /// A new key is appended to the end of the iteration order. An existing
    /// key has its value replaced and keeps its position.
    ///
    /// Returns the store so calls can be chained with `?`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `key` is empty or whitespace-only.
    pub fn add(&mut self, key: &str, value: impl Into<V>) -> Result<&mut Self> {
        let key = validate_key(key)?;
        let value = value.into();
        match self.index.get(key) {
            Some(&slot) => {
                tracing::trace!(key, slot, "updated entry");
                self.entries[slot].1 = value;
            }
            None => {
                let slot = self.entries.len();
                tracing::trace!(key, slot, "inserted entry");
                self.index.insert(key.to_owned(), slot);
                self.entries.push((key.to_owned(), value));
            }
        }
        Ok(self)
    }

    /// Get the value stored under `key`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `key` is empty or whitespace-only.
    /// - [`Error::KeyNotFound`] if no entry has this key. Use
    ///   [`try_get`](Self::try_get) when absence is expected.
    pub fn get(&self, key: &str) -> Result<&V> {
        self.try_get(key)?
            .ok_or_else(|| Error::KeyNotFound(key.to_owned()))
    }

    /// Get the value stored under `key`, or `None` if absent.
    pub fn try_get(&self, key: &str) -> Result<Option<&V>> {
        let key = validate_key(key)?;
        Ok(self.index.get(key).map(|&slot| &self.entries[slot].1))
    }

    /// Get a mutable reference to the value stored under `key`.
    ///
    /// Mutating through the reference does not change the entry's position.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut V> {
        let key = validate_key(key)?;
        match self.index.get(key) {
            Some(&slot) => Ok(&mut self.entries[slot].1),
            None => Err(Error::KeyNotFound(key.to_owned())),
        }
    }

    /// Check whether an entry with exactly this key exists.
    pub fn has(&self, key: &str) -> Result<bool> {
        let key = validate_key(key)?;
        Ok(self.index.contains_key(key))
    }

    /// Remove the entry for `key` if present.
    ///
    /// Deleting an absent key is a no-op. Returns the store for chaining.
    pub fn delete(&mut self, key: &str) -> Result<&mut Self> {
        self.remove(key)?;
        Ok(self)
    }

    /// Remove the entry for `key`, returning its value if it was present.
    ///
    /// Remaining entries keep their relative order.
    pub fn remove(&mut self, key: &str) -> Result<Option<V>> {
        let key = validate_key(key)?;
        let Some(slot) = self.index.remove(key) else {
            tracing::trace!(key, "delete of absent key");
            return Ok(None);
        };

        let (_, value) = self.entries.remove(slot);
        for (later, _) in &self.entries[slot..] {
            if let Some(s) = self.index.get_mut(later) {
                *s -= 1;
            }
        }
        tracing::trace!(key, slot, "deleted entry");
        Ok(Some(value))
    }

    /// Add every entry from `iter` in order.
    ///
    /// Stops at the first invalid key; entries before it remain inserted.
    pub fn try_extend<K, T, I>(&mut self, iter: I) -> Result<&mut Self>
    where
        K: AsRef<str>,
        T: Into<V>,
        I: IntoIterator<Item = (K, T)>,
    {
        for (key, value) in iter {
            self.add(key.as_ref(), value)?;
        }
        Ok(self)
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Start a new traversal positioned at the first entry.
    pub fn cursor(&self) -> Cursor<'_, V> {
        Cursor::new(self)
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|(_, v)| v)
    }

    pub(crate) fn entry_at(&self, slot: usize) -> Option<(&str, &V)> {
        self.entries.get(slot).map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> Default for KeyValueStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for KeyValueStore<V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            index: self.index.clone(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for KeyValueStore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Two stores are equal when they hold the same entries in the same order.
impl<V: PartialEq> PartialEq for KeyValueStore<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

/// Borrowing iterator over a store's entries in insertion order.
#[derive(Debug)]
pub struct Iter<'a, V> {
    inner: std::slice::Iter<'a, (String, V)>,
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a KeyValueStore<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for KeyValueStore<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
