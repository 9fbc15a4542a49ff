//! Pirate vocabulary and whole-word rewriting.
//!
//! [`VOCABULARY`] is applied entry by entry, in table order, each entry
//! replacing every case-insensitive whole-word occurrence of its key across
//! the whole text. A later entry sees the output of earlier ones, so the
//! order of the table is observable: `found` runs before `not found`, which
//! turns "not found" into "not discovered" and leaves the `not found` entry
//! unreachable. Keep the order when editing the table.

use crate::types::Movie;
use once_cell::sync::Lazy;
use phf::phf_ordered_map;
use regex::{NoExpand, Regex};

/// Canonical term → pirate term, in application order.
pub static VOCABULARY: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "films" => "treasures",
    "movie" => "treasure",
    "year" => "year of sailing",
    "director" => "captain",
    "rating" => "crew's approval",
    "description" => "tale",
    "back" => "return to ship",
    "film" => "treasure",
    "error" => "trouble on the high seas",
    "movies" => "treasures",
    "duration" => "length of voyage",
    "search" => "hunt",
    "view" => "examine",
    "found" => "discovered",
    "find" => "discover",
    "parameter" => "compass reading",
    "genre" => "type of adventure",
    "invalid" => "cursed",
    "details" => "treasure map",
    "no results" => "no treasure found",
    "not found" => "lost at sea",
    "results" => "bounty",
    "parameters" => "compass readings",
};

/// One compiled `(?i-u:\bkey\b)` pattern per vocabulary entry, same order.
/// Case folding and word boundaries are ASCII-only.
static RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    VOCABULARY
        .entries()
        .map(|(key, target)| {
            let pattern = format!(r"(?i-u:\b{}\b)", regex::escape(key));
            let re = Regex::new(&pattern).expect("vocabulary keys must compile as regexes");
            (re, *target)
        })
        .collect()
});

/// Rewrite `text` into pirate speak.
///
/// Blank input (empty or whitespace only) comes back unchanged. Punctuation
/// and line breaks are preserved; only whole words are substituted, so
/// `"moviemaker"` is left alone while `"Movie"` becomes `"treasure"`.
pub fn rewrite(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    tracing::debug!(text, "rewriting text in pirate speak");

    let mut out = text.to_string();
    for (re, target) in RULES.iter() {
        out = re.replace_all(&out, NoExpand(target)).into_owned();
    }
    out
}

/// [`rewrite`] lifted over an optional value; `None` stays `None`.
pub fn rewrite_opt(text: Option<&str>) -> Option<String> {
    text.map(rewrite)
}

/// A pirate copy of `movie`.
///
/// Director, genre and description are rewritten; id, name, year, duration
/// and rating are copied as-is.
pub fn rewrite_movie(movie: &Movie) -> Movie {
    Movie {
        id: movie.id,
        movie_name: movie.movie_name.clone(),
        director: rewrite(&movie.director),
        year: movie.year,
        genre: rewrite(&movie.genre),
        description: rewrite(&movie.description),
        duration: movie.duration,
        imdb_rating: movie.imdb_rating,
    }
}
