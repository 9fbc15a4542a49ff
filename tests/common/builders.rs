//! Test builders — ergonomic constructors for `Movie` and `Catalog`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use cinedex_core::{Catalog, Movie};

// ---------------------------------------------------------------------------
// MovieBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Movie`] test fixtures.
///
/// # Example
///
/// ```rust
/// let movie = MovieBuilder::new(3, "The Masked Hero")
///     .genre("Action/Crime")
///     .director("Christopher Nolde")
///     .build();
/// ```
pub struct MovieBuilder {
    movie: Movie,
}

impl MovieBuilder {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            movie: Movie {
                id,
                movie_name: name.into(),
                director: "Test Director".to_string(),
                year: 2000,
                genre: "Drama".to_string(),
                description: "A movie used in tests.".to_string(),
                duration: 100,
                imdb_rating: 3.0,
            },
        }
    }

    pub fn director(mut self, director: impl Into<String>) -> Self {
        self.movie.director = director.into();
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.movie.genre = genre.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.movie.description = description.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.movie.year = year;
        self
    }

    pub fn build(self) -> Movie {
        self.movie
    }
}

// ---------------------------------------------------------------------------
// Catalog helpers
// ---------------------------------------------------------------------------

/// A catalog of `(name, genre)` pairs with ids 1, 2, 3, … in order.
pub fn catalog_of(entries: &[(&str, &str)]) -> Catalog {
    Catalog::new(
        entries
            .iter()
            .enumerate()
            .map(|(i, (name, genre))| MovieBuilder::new(i as u64 + 1, *name).genre(*genre).build()),
    )
}

/// Names of `movies`, in order.
pub fn names<'a>(movies: impl IntoIterator<Item = &'a Movie>) -> Vec<&'a str> {
    movies.into_iter().map(|m| m.movie_name.as_str()).collect()
}
