//! Store configuration.

use crate::error::Result;
use crate::store::KeyValueStore;

/// Builder for a pre-sized, pre-populated [`KeyValueStore`].
///
/// # Example
///
/// ```
/// use ordkv_core::KeyValueStore;
///
/// # fn main() -> ordkv_core::Result<()> {
/// let store: KeyValueStore<&str> = KeyValueStore::builder()
///     .capacity(8)
///     .entry("logger", "stderr")
///     .entry("cache", "memory")
///     .build()?;
///
/// assert_eq!(store.keys().collect::<Vec<_>>(), ["logger", "cache"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct StoreBuilder<V> {
    capacity: usize,
    entries: Vec<(String, V)>,
}

impl<V> StoreBuilder<V> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            capacity: 0,
            entries: Vec::new(),
        }
    }

    /// Pre-allocate room for `capacity` entries.
    ///
    /// This is a sizing hint, not a limit.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Queue an initial entry. Keys are validated by [`build`](Self::build).
    pub fn entry(mut self, key: impl Into<String>, value: impl Into<V>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Build the store, adding queued entries in order.
    ///
    /// Later entries for a repeated key overwrite earlier ones in place.
    pub fn build(self) -> Result<KeyValueStore<V>> {
        let capacity = self.capacity.max(self.entries.len());
        let mut store = KeyValueStore::with_capacity(capacity);
        store.try_extend(self.entries)?;
        tracing::debug!(entries = store.len(), capacity, "built store");
        Ok(store)
    }
}

impl<V> Default for StoreBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
