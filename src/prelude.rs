//! Convenient imports for ordkv.
//!
//! ```
//! use ordkv::prelude::*;
//!
//! let mut store = Store::new();
//! store.add("key", "value").unwrap();
//! ```

// Store and traversal
pub use crate::{Cursor, KeyValueStore, Store, StoreBuilder};

// Error handling
pub use crate::{Error, Result};

// Values
pub use crate::Value;

// Re-export serde_json for convenience
pub use serde_json::json;
