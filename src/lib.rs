//! # ordkv
//!
//! An in-memory key-value container that remembers insertion order.
//!
//! Keys are non-empty strings; values default to the tagged [`Value`] type so
//! one store can carry heterogeneous entries, e.g. named configuration or
//! dependency entries handed from one component to another.
//!
//! ## Quick Start
//!
//! ```
//! use ordkv::prelude::*;
//!
//! # fn main() -> ordkv::Result<()> {
//! let mut store = Store::new();
//! store
//!     .add("db.host", "localhost")?
//!     .add("db.port", 5432)?
//!     .add("features", json!(["search", "export"]))?;
//!
//! assert_eq!(store.get("db.port")?, &Value::Int(5432));
//! assert!(store.try_get("db.user")?.is_none());
//!
//! for (key, value) in &store {
//!     println!("{key} = {value:?}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Lookups
//!
//! - [`KeyValueStore::get`] fails with [`Error::KeyNotFound`] for an absent key
//! - [`KeyValueStore::try_get`] returns `Ok(None)` instead
//!
//! Every operation taking a key fails with [`Error::InvalidArgument`] when the
//! key is empty after trimming [`KEY_PADDING`] (space, tab, CR, LF, NUL and
//! vertical tab) from both ends.
//!
//! ## Traversal
//!
//! [`KeyValueStore::cursor`] returns an independent [`Cursor`] with
//! `rewind`/`valid`/`current`/`key`/`next`. For ordinary loops use
//! [`KeyValueStore::iter`] or `for (k, v) in &store`.

#![warn(missing_docs)]

pub mod prelude;

pub use ordkv_core::{
    validate_key, Cursor, Error, Iter, KeyValueStore, Result, StoreBuilder, Value, KEY_PADDING,
};

/// A store of heterogeneous [`Value`]s.
pub type Store = KeyValueStore<Value>;
