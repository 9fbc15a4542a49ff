//! HTTP surface — axum routes over the presenter.
//!
//! | Route | Shape |
//! |-------|-------|
//! | `GET /movies` | full catalog |
//! | `GET /movies/search` | [`SearchPayload`](crate::presenter::SearchPayload) or 400 |
//! | `GET /movies/search/form` | [`PageContext`](crate::presenter::PageContext) |
//! | `GET /movies/{id}/details` | [`MovieDetails`](crate::presenter::MovieDetails) or 404 |

use crate::error::ApiError;
use crate::presenter::{self, MovieDetails, PageContext, SearchParams, SearchPayload};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use cinedex_core::config::Config;
use cinedex_core::pirate::ThreadRngPicker;
use cinedex_core::reviews::{InMemoryReviews, ReviewSource};
use cinedex_core::{Catalog, Movie};
use std::sync::Arc;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub reviews: Arc<dyn ReviewSource>,
}

impl AppState {
    pub fn new(catalog: Catalog, reviews: impl ReviewSource + 'static) -> Self {
        Self {
            catalog: Arc::new(catalog),
            reviews: Arc::new(reviews),
        }
    }

    /// Build from configuration. Missing or malformed data files degrade to
    /// an empty catalog / no reviews rather than failing startup.
    pub fn from_config(config: &Config) -> Self {
        let catalog = match config.catalog.movies_file() {
            Some(path) => Catalog::load_or_empty(path),
            None => Catalog::embedded(),
        };
        let reviews = match config.catalog.reviews_file() {
            Some(path) => InMemoryReviews::load_or_empty(path),
            None => InMemoryReviews::default(),
        };
        Self::new(catalog, reviews)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/movies", get(list_movies))
        .route("/movies/search", get(search_api))
        .route("/movies/search/form", get(search_form))
        .route("/movies/{id}/details", get(movie_details))
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(state: AppState, addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, movies = state.catalog.len(), "listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn list_movies(State(state): State<AppState>) -> Json<Vec<Movie>> {
    tracing::info!("fetching movies");
    Json(state.catalog.all().to_vec())
}

async fn search_api(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchPayload>, ApiError> {
    tracing::info!(?params, "api search request");
    presenter::search_payload(&state.catalog, &params, ThreadRngPicker).map(Json)
}

async fn search_form(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<PageContext> {
    tracing::info!(?params, "form search request");
    Json(presenter::page_context(&state.catalog, &params, ThreadRngPicker))
}

async fn movie_details(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MovieDetails>, ApiError> {
    tracing::info!(id, "fetching movie details");
    presenter::movie_details(&state.catalog, state.reviews.as_ref(), id).map(Json)
}
