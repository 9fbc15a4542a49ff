//! cinedex — movie catalog search with an optional pirate-speak theme.
//!
//! All search and rewriting logic lives in [`cinedex_core`]. This crate
//! adapts it to the outside world and exposes the adapters as public modules
//! so that integration tests can drive them directly.
//!
//! # Architecture
//!
//! ```text
//!             ┌──► presenter ──► server (axum)
//! cinedex_core┤
//!             └──► presenter ──► CLI (main.rs)
//! ```

pub mod error;
pub mod presenter;
pub mod server;

pub use cinedex_core;
pub use error::ApiError;
