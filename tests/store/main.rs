//! Store Integration Tests
//!
//! Exercises the public ordkv API: CRUD, chaining, traversal and key
//! validation, plus property tests over random operation sequences.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test store
//! cargo test --test store properties::
//! ```

#[path = "../common/mod.rs"]
mod common;

mod properties;
