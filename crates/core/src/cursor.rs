//! Restartable traversal over a store.

use crate::store::KeyValueStore;

/// A traversal position over a [`KeyValueStore`], in insertion order.
///
/// Cursors are independent: each holds its own position, so several can walk
/// the same store at once. The store cannot be mutated while a cursor
/// borrows it.
///
/// ```
/// use ordkv_core::KeyValueStore;
///
/// # fn main() -> ordkv_core::Result<()> {
/// let mut store: KeyValueStore<u32> = KeyValueStore::new();
/// store.add("a", 1u32)?.add("b", 2u32)?;
///
/// let mut cursor = store.cursor();
/// let mut seen = Vec::new();
/// while cursor.valid() {
///     seen.push(cursor.key().unwrap());
///     cursor.next();
/// }
/// assert_eq!(seen, ["a", "b"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Cursor<'a, V> {
    store: &'a KeyValueStore<V>,
    position: usize,
}

impl<'a, V> Cursor<'a, V> {
    pub(crate) fn new(store: &'a KeyValueStore<V>) -> Self {
        Self { store, position: 0 }
    }

    /// Move back to the first entry.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// True while the cursor points at an entry.
    pub fn valid(&self) -> bool {
        self.position < self.store.len()
    }

    /// Value at the cursor, or `None` once past the end.
    pub fn current(&self) -> Option<&'a V> {
        self.store.entry_at(self.position).map(|(_, v)| v)
    }

    /// Key at the cursor, or `None` once past the end.
    pub fn key(&self) -> Option<&'a str> {
        self.store.entry_at(self.position).map(|(k, _)| k)
    }

    /// Advance to the following entry. Past the end this is a no-op.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if self.valid() {
            self.position += 1;
        }
    }
}

impl<V> Clone for Cursor<'_, V> {
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            position: self.position,
        }
    }
}
