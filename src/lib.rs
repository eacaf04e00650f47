//! # tagdex
//!
//! Tag query engine for browsing a collection of tagged items by
//! incrementally narrowing a tag selection. Includes:
//! - Typed fetching of catalog and per-tag records from a static JSON store
//! - Lazy in-memory memoization of per-tag metadata
//! - Set intersection over co-tag and item lists
//! - Randomized presentation (random compatible tag, shuffled result order)
//!
//! The engine is read-only over its data source: records are fetched once,
//! cached for the process lifetime, and never mutated.

pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod query;
pub mod set_ops;
pub mod types;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use query::QueryEngine;
pub use types::{TagId, TagRecord};
