//! cinedex-core — catalog search and pirate-speak rendering.
//!
//! This crate holds all of the decision logic behind cinedex; the root crate
//! only adapts it to HTTP and the command line.
//!
//! # Architecture
//!
//! ```text
//! Store ──► Search ──► pirate::mode ──► pirate::vocabulary ──► pirate::messages
//! ```
//!
//! The [`Catalog`] is built once and never mutated, and the vocabulary is a
//! compile-time table, so every operation is a synchronous function over
//! shared immutable data.

pub mod config;
pub mod error;
pub mod icon;
pub mod pirate;
pub mod reviews;
pub mod search;
pub mod store;
pub mod types;

pub use error::CatalogError;
pub use search::SearchCriteria;
pub use store::{catalog, Catalog};
pub use types::{Movie, Review};
