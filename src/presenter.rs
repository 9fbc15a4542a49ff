//! Presenter — turns raw request parameters into response payloads.
//!
//! Each builder runs the same pipeline:
//!
//! ```text
//! SearchParams ──► validate ──► Catalog::search ──► pirate::detect
//!              ──► rewrite_movie (if pirate) ──► MessageComposer
//! ```
//!
//! Builders are synchronous and take the [`PhrasePicker`] as an argument, so
//! the HTTP handlers and the CLI share them and tests can pin the random
//! greeting/closing.

use crate::error::ApiError;
use cinedex_core::icon::movie_icon;
use cinedex_core::pirate::{self, MessageComposer, PhrasePicker, PirateMode};
use cinedex_core::reviews::ReviewSource;
use cinedex_core::{Catalog, Movie, Review, SearchCriteria};
use serde::{Deserialize, Serialize};

const API_MISSING_CRITERIA: &str =
    "At least one search parameter (name, id, or genre) must be provided";
const FORM_MISSING_CRITERIA: &str =
    "Please provide at least one search criterion (name, ID, or genre)";

// ---------------------------------------------------------------------------
// Request parameters
// ---------------------------------------------------------------------------

/// Raw query-string parameters shared by both search shapes.
///
/// Every field is optional and kept as text; `id` is parsed by
/// [`SearchParams::criteria`] so an empty `id=` from a form counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    pub id: Option<String>,
    pub genre: Option<String>,
    pub pirate: Option<String>,
}

impl SearchParams {
    /// The `pirate` flag wins; otherwise the searched-for name is sniffed.
    pub fn pirate_mode(&self) -> PirateMode {
        pirate::detect(self.pirate.as_deref(), self.name.as_deref())
    }

    /// Parse into criteria. Fails only when `id` is present, non-blank and
    /// not an integer.
    pub fn criteria(&self) -> Result<SearchCriteria, String> {
        let id = match self.id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<i64>()
                    .map_err(|_| format!("Invalid id parameter: {raw}"))?,
            ),
        };
        Ok(SearchCriteria {
            name: self.name.clone(),
            id,
            genre: self.genre.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Body of a successful `GET /movies/search`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayload {
    pub success: bool,
    pub message: String,
    pub count: usize,
    pub movies: Vec<Movie>,
    pub pirate_mode: bool,
}

/// Rendering context for the search results page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    pub movies: Vec<Movie>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_message: Option<String>,
    pub is_search_result: bool,
    pub pirate_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_criteria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of `GET /movies/{id}/details`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    pub movie: Movie,
    pub movie_icon: &'static str,
    pub reviews: Vec<Review>,
}

/// Outcome of a validated search, before it is shaped into a payload.
struct SearchOutcome {
    movies: Vec<Movie>,
    message: String,
    criteria: String,
}

/// Which response the summary message is worded for.
#[derive(Clone, Copy)]
enum Shape {
    Data,
    Page,
}

fn run_search<P: PhrasePicker>(
    catalog: &Catalog,
    criteria: &SearchCriteria,
    composer: &mut MessageComposer<P>,
    shape: Shape,
) -> SearchOutcome {
    let matches = catalog.search(criteria);
    let movies: Vec<Movie> = if composer.is_pirate() {
        matches.into_iter().map(pirate::rewrite_movie).collect()
    } else {
        matches.into_iter().cloned().collect()
    };

    let description = criteria.description();
    let message = match shape {
        Shape::Data => composer.result_message(movies.len(), &description),
        Shape::Page => composer.page_result_message(movies.len(), &description),
    };
    SearchOutcome {
        movies,
        message,
        criteria: description,
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Data shape: JSON search result, or a 400 with a (possibly themed) error.
pub fn search_payload<P: PhrasePicker>(
    catalog: &Catalog,
    params: &SearchParams,
    picker: P,
) -> Result<SearchPayload, ApiError> {
    let mode = params.pirate_mode();
    let mut composer = MessageComposer::with_picker(mode.is_active(), picker);

    let criteria = params
        .criteria()
        .map_err(|raw| ApiError::BadRequest(composer.error_message(&raw)))?;
    if !criteria.is_valid() {
        tracing::debug!(%mode, "rejecting search without criteria");
        return Err(ApiError::BadRequest(composer.error_message(API_MISSING_CRITERIA)));
    }

    let outcome = run_search(catalog, &criteria, &mut composer, Shape::Data);
    Ok(SearchPayload {
        success: true,
        message: outcome.message,
        count: outcome.movies.len(),
        movies: outcome.movies,
        pirate_mode: mode.is_active(),
    })
}

/// Page shape. Invalid input never empties the page: the whole catalog is
/// shown with an error annotation instead.
pub fn page_context<P: PhrasePicker>(
    catalog: &Catalog,
    params: &SearchParams,
    picker: P,
) -> PageContext {
    let mode = params.pirate_mode();
    let mut composer = MessageComposer::with_picker(mode.is_active(), picker);

    let criteria = match params.criteria() {
        Ok(criteria) if criteria.is_valid() => criteria,
        Ok(_) => return fallback_page(catalog, mode, composer.error_message(FORM_MISSING_CRITERIA)),
        Err(raw) => return fallback_page(catalog, mode, composer.error_message(&raw)),
    };

    let outcome = run_search(catalog, &criteria, &mut composer, Shape::Page);
    PageContext {
        movies: outcome.movies,
        search_message: Some(outcome.message),
        is_search_result: true,
        pirate_mode: mode.is_active(),
        search_criteria: Some(outcome.criteria),
        error: None,
    }
}

fn fallback_page(catalog: &Catalog, mode: PirateMode, error: String) -> PageContext {
    PageContext {
        movies: catalog.all().to_vec(),
        search_message: None,
        is_search_result: false,
        pirate_mode: mode.is_active(),
        search_criteria: None,
        error: Some(error),
    }
}

/// Lookup shape: one movie with its icon and reviews.
pub fn movie_details(
    catalog: &Catalog,
    reviews: &dyn ReviewSource,
    id: i64,
) -> Result<MovieDetails, ApiError> {
    let Some(movie) = catalog.by_id(Some(id)) else {
        tracing::warn!(id, "movie not found");
        return Err(ApiError::NotFound(format!("Movie with ID {id} was not found.")));
    };

    Ok(MovieDetails {
        movie: movie.clone(),
        movie_icon: movie_icon(&movie.movie_name),
        reviews: reviews.reviews_for(movie.id),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
