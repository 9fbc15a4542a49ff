//! Search layer — multi-criteria filtering over the [`Catalog`].
//!
//! A query is a [`SearchCriteria`] triple of optional name substring, exact
//! id and genre substring. Matching is a linear scan in catalog order: a
//! record matches when it passes every supplied criterion, and blank or
//! non-positive criteria impose no constraint. Results are never re-sorted.
//!
//! Callers are expected to reject criteria that fail
//! [`SearchCriteria::is_valid`] before searching; an empty triple matches
//! the whole catalog.

use crate::store::Catalog;
use crate::types::Movie;

/// Optional name / id / genre filters for a catalog search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Case-insensitive substring of the movie name, trimmed before use.
    pub name: Option<String>,
    /// Exact id. Only positive values constrain the search.
    pub id: Option<i64>,
    /// Case-insensitive substring of the genre label, trimmed before use.
    pub genre: Option<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// True when at least one criterion is usable: a non-blank name, a
    /// positive id or a non-blank genre.
    pub fn is_valid(&self) -> bool {
        self.name_filter().is_some() || self.id_filter().is_some() || self.genre_filter().is_some()
    }

    /// Human-readable summary of the usable criteria, e.g.
    /// `"name: Prison, id: 1, genre: Drama"`.
    ///
    /// Values are echoed as given (untrimmed). Unusable criteria are left out,
    /// so an invalid triple describes as the empty string.
    pub fn description(&self) -> String {
        let mut parts = Vec::with_capacity(3);
        if let (Some(raw), Some(_)) = (&self.name, self.name_filter()) {
            parts.push(format!("name: {raw}"));
        }
        if let Some(id) = self.id_filter() {
            parts.push(format!("id: {id}"));
        }
        if let (Some(raw), Some(_)) = (&self.genre, self.genre_filter()) {
            parts.push(format!("genre: {raw}"));
        }
        parts.join(", ")
    }

    fn name_filter(&self) -> Option<String> {
        non_blank(self.name.as_deref())
    }

    fn id_filter(&self) -> Option<u64> {
        self.id.filter(|&id| id > 0).map(|id| id as u64)
    }

    fn genre_filter(&self) -> Option<String> {
        non_blank(self.genre.as_deref())
    }
}

/// Trimmed, lower-cased needle, or `None` when absent or blank.
fn non_blank(s: Option<&str>) -> Option<String> {
    let trimmed = s?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

// ---------------------------------------------------------------------------
// Query engine
// ---------------------------------------------------------------------------

/// Criteria compiled once per search so the per-record test does no
/// allocation beyond lower-casing the record fields.
struct Matcher {
    name: Option<String>,
    id: Option<u64>,
    genre: Option<String>,
}

impl Matcher {
    fn new(criteria: &SearchCriteria) -> Self {
        Self {
            name: criteria.name_filter(),
            id: criteria.id_filter(),
            genre: criteria.genre_filter(),
        }
    }

    fn matches(&self, movie: &Movie) -> bool {
        if let Some(name) = &self.name {
            if !movie.movie_name.to_lowercase().contains(name.as_str()) {
                return false;
            }
        }
        if let Some(id) = self.id {
            if movie.id != id {
                return false;
            }
        }
        if let Some(genre) = &self.genre {
            if !movie.genre.to_lowercase().contains(genre.as_str()) {
                return false;
            }
        }
        true
    }
}

impl Catalog {
    /// Every record passing all supplied criteria, in catalog order.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&Movie> {
        tracing::info!(
            name = ?criteria.name,
            id = ?criteria.id,
            genre = ?criteria.genre,
            "searching movies"
        );

        let matcher = Matcher::new(criteria);
        let results: Vec<&Movie> = self.all().iter().filter(|m| matcher.matches(m)).collect();

        tracing::info!(count = results.len(), "search complete");
        results
    }

    /// Name-only search. A missing or blank name returns nothing without
    /// scanning the catalog.
    pub fn search_by_name(&self, name: Option<&str>) -> Vec<&Movie> {
        match name {
            Some(name) if !name.trim().is_empty() => self.search(&SearchCriteria::new().name(name)),
            _ => Vec::new(),
        }
    }

    /// Genre-only search. A missing or blank genre returns nothing without
    /// scanning the catalog.
    pub fn search_by_genre(&self, genre: Option<&str>) -> Vec<&Movie> {
        match genre {
            Some(genre) if !genre.trim().is_empty() => {
                self.search(&SearchCriteria::new().genre(genre))
            }
            _ => Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
