//! Core types for ordkv
//!
//! This crate holds the insertion-ordered [`KeyValueStore`], its traversal
//! [`Cursor`], the default [`Value`] payload and the [`Error`] type.

#![warn(missing_docs)]

pub mod builder;
pub mod cursor;
pub mod error;
pub mod key;
pub mod store;
pub mod value;

pub use builder::StoreBuilder;
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use key::{validate_key, KEY_PADDING};
pub use store::{Iter, KeyValueStore};
pub use value::Value;
