//! Domain-specific assertion helpers for cinedex harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! catalog or theming invariant was violated.

use cinedex_core::pirate::{CLOSINGS, GREETINGS};
use cinedex_core::Movie;

/// Assert that a result list holds exactly the named movies, in order.
///
/// ```rust
/// assert_movie_names!(results, ["The Prison Escape"]);
/// ```
#[macro_export]
macro_rules! assert_movie_names {
    ($results:expr, [$($name:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $results.iter().map(|m| m.movie_name.as_str()).collect();
        let expected: Vec<&str> = vec![$($name),*];
        pretty_assertions::assert_eq!(actual, expected, "assert_movie_names! failed");
    }};
}

/// Assert that every movie in a result list satisfies a predicate. The
/// predicate receives the list's item type by reference.
///
/// ```rust
/// assert_results_all!(results, |m| m.genre.contains("Drama"));
/// ```
#[macro_export]
macro_rules! assert_results_all {
    ($results:expr, $pred:expr) => {{
        let pred = $pred;
        let failing: Vec<&str> = $results
            .iter()
            .filter(|m| !pred(*m))
            .map(|m| m.movie_name.as_str())
            .collect();
        if !failing.is_empty() {
            panic!(
                "assert_results_all! failed: {} of {} movies did not satisfy predicate: {:?}",
                failing.len(),
                $results.len(),
                failing
            );
        }
    }};
}

/// Assert `message` ends with exactly one of the fixed closings.
pub fn assert_closing(message: &str) {
    let hits = CLOSINGS.iter().filter(|c| message.ends_with(*c)).count();
    assert_eq!(hits, 1, "expected exactly one closing suffix in {message:?}");
}

/// Assert `message` starts with one of the fixed greetings.
pub fn assert_greeting(message: &str) {
    assert!(
        GREETINGS.iter().any(|g| message.starts_with(g)),
        "expected a greeting prefix in {message:?}"
    );
}

/// Assert that `themed` is `original` with only the rewritable fields changed.
pub fn assert_identity_preserved(original: &Movie, themed: &Movie) {
    assert_eq!(themed.id, original.id, "id must be preserved");
    assert_eq!(themed.movie_name, original.movie_name, "name must be preserved");
    assert_eq!(themed.year, original.year, "year must be preserved");
    assert_eq!(themed.duration, original.duration, "duration must be preserved");
    assert_eq!(themed.imdb_rating, original.imdb_rating, "rating must be preserved");
}
