//! Route definitions for the catalogue domain API

use axum::{routing::get, Router};

use super::handlers::{links, movies, reference};
use super::middleware::CatalogState;

/// Create movie routes
fn movie_routes() -> Router<CatalogState> {
    Router::new()
        .route("/movies", get(movies::list_movies))
        .route(
            "/movies/contribute",
            get(movies::contribute_form).post(movies::contribute),
        )
        .route(
            "/movies/{id}",
            get(movies::get_movie).delete(movies::delete_movie),
        )
        .route("/movies/{id}/links", get(links::list_movie_links))
}

/// Create reference-data routes
fn reference_routes() -> Router<CatalogState> {
    Router::new()
        .route("/genres", get(reference::list_genres))
        .route("/countries", get(reference::list_countries))
        .route("/directors", get(reference::list_directors))
        .route("/keywords", get(reference::list_keywords))
}

/// Create all catalogue domain API routes
pub fn routes() -> Router<CatalogState> {
    Router::new().merge(movie_routes()).merge(reference_routes())
}
