//! Core types for cinedex-core.
//!
//! This module defines the record shared across every layer: the immutable
//! [`Movie`], plus the [`Review`] attached to it by the lookup endpoint.
//! Both serialize with camelCase keys, which is also the encoding of the
//! catalog data file.

use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// Records are never mutated after load. Themed rendering produces a new
/// `Movie` (see [`crate::pirate::rewrite_movie`]) rather than editing one in
/// place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Unique, positive identifier.
    pub id: u64,
    /// Display name. Never rewritten by the pirate theme.
    pub movie_name: String,
    pub director: String,
    /// Release year.
    pub year: i32,
    /// Genre label, e.g. `"Crime/Drama"`.
    pub genre: String,
    /// Synopsis.
    pub description: String,
    /// Running time in minutes.
    pub duration: u32,
    /// Quality score on a 0–5 scale.
    pub imdb_rating: f64,
}

/// A single audience review for a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub reviewer: String,
    pub rating: f64,
    pub comment: String,
}
