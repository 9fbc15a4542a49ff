//! Review lookup for the movie details view.
//!
//! Reviews live outside the catalog. The lookup endpoint only needs
//! [`ReviewSource`]; [`InMemoryReviews`] is the file-backed implementation
//! used by the server.

use crate::error::CatalogError;
use crate::types::Review;
use std::collections::HashMap;
use std::path::Path;

/// Anything that can list the reviews for a movie id.
pub trait ReviewSource: Send + Sync {
    /// Reviews for `movie_id`, oldest first. Unknown ids yield an empty list.
    fn reviews_for(&self, movie_id: u64) -> Vec<Review>;
}

/// Reviews keyed by movie id, loaded once.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReviews {
    by_movie: HashMap<u64, Vec<Review>>,
}

impl InMemoryReviews {
    pub fn new(by_movie: HashMap<u64, Vec<Review>>) -> Self {
        Self { by_movie }
    }

    /// Parse a JSON object mapping movie id to an array of reviews, e.g.
    /// `{"1": [{"reviewer": "ann", "rating": 4.0, "comment": "…"}]}`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Like [`InMemoryReviews::load`], but failures leave no reviews.
    pub fn load_or_empty(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            tracing::error!(error = %err, "failed to load reviews; continuing without them");
            Self::default()
        })
    }
}

impl ReviewSource for InMemoryReviews {
    fn reviews_for(&self, movie_id: u64) -> Vec<Review> {
        self.by_movie.get(&movie_id).cloned().unwrap_or_default()
    }
}
