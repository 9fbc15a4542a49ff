//! Error types for the catalog layer.
//!
//! Only the strict loaders return these. The soft paths
//! ([`Catalog::load_or_empty`](crate::store::Catalog::load_or_empty),
//! [`InMemoryReviews::load_or_empty`](crate::reviews::InMemoryReviews::load_or_empty))
//! log them and fall back to an empty collection.

use std::path::PathBuf;

/// Failure to read or parse a static data source.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}
