//! Store — the immutable, in-memory movie catalog.
//!
//! A [`Catalog`] is built once from a static data source and never mutated
//! afterwards, so it can be shared across request handlers without locking.
//! Records keep the order of the data source; an id index gives O(1) lookup.

use crate::error::CatalogError;
use crate::types::Movie;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

const EMBEDDED_MOVIES: &str = include_str!("../data/movies.json");

static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(Catalog::embedded);

/// The process-wide catalog built from the embedded data file.
///
/// Initialised on first use and kept for the lifetime of the process.
pub fn catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Ordered, read-only collection of [`Movie`] records with an id index.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
    by_id: HashMap<u64, usize>,
}

impl Catalog {
    /// Build a catalog from records in source order.
    ///
    /// Records with id `0` are rejected. When an id repeats, the first
    /// record wins and later ones are dropped, so an id is never reused.
    pub fn new(records: impl IntoIterator<Item = Movie>) -> Self {
        let mut movies = Vec::new();
        let mut by_id = HashMap::new();

        for movie in records {
            if movie.id == 0 {
                tracing::warn!(name = %movie.movie_name, "dropping movie with non-positive id");
                continue;
            }
            if by_id.contains_key(&movie.id) {
                tracing::warn!(id = movie.id, name = %movie.movie_name, "dropping duplicate movie id");
                continue;
            }
            by_id.insert(movie.id, movies.len());
            movies.push(movie);
        }

        Self { movies, by_id }
    }

    /// Parse a JSON array of movie objects.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<Movie> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    /// Read and parse a catalog file, failing on any I/O or format error.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), movies = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Like [`Catalog::load`], but a missing or malformed file yields an
    /// empty catalog. The failure is logged, never returned.
    pub fn load_or_empty(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            tracing::error!(error = %err, "failed to load movies; serving an empty catalog");
            Self::default()
        })
    }

    /// The catalog shipped inside the binary.
    pub fn embedded() -> Self {
        Self::from_json(EMBEDDED_MOVIES).unwrap_or_else(|err| {
            tracing::error!(error = %err, "embedded movie data is malformed");
            Self::default()
        })
    }

    /// Every record, in source order.
    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Direct lookup. `None`, zero and negative ids are never present.
    pub fn by_id(&self, id: Option<i64>) -> Option<&Movie> {
        let id = u64::try_from(id?).ok().filter(|&id| id > 0)?;
        self.by_id.get(&id).map(|&idx| &self.movies[idx])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
