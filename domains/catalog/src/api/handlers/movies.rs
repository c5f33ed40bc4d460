//! Movie API handlers
//!
//! Implements catalogue browsing and the authenticated contribution flow:
//! - GET /movies - List the catalogue with relations
//! - GET /movies/contribute - Form data for the contribution page (session-guarded)
//! - POST /movies/contribute - Contribute a movie (session-guarded)
//! - GET /movies/{id} - One movie with relations
//! - DELETE /movies/{id} - Remove a movie (admin-guarded)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use cinelog_auth::{AdminUser, SessionUser};
use cinelog_common::{Error, Result};
use serde::Serialize;
use validator::Validate;

use crate::api::middleware::CatalogState;
use crate::domain::entities::{
    Country, Director, Genre, Movie, MovieWithRelations, NewMovie, SelectOption,
};

/// Everything the contribution form needs to render its pickers
#[derive(Debug, Serialize)]
pub struct ContributeFormResponse {
    pub genres: Vec<Genre>,
    pub countries: Vec<Country>,
    pub directors: Vec<Director>,
    pub keywords: Vec<SelectOption>,
}

/// GET /movies - List the catalogue
pub async fn list_movies(
    State(state): State<CatalogState>,
) -> Result<Json<Vec<MovieWithRelations>>> {
    let movies = state.repos.movies.list().await?;
    Ok(Json(movies))
}

/// GET /movies/contribute - Form data for the contribution page
///
/// The session guard runs before this body; an unauthenticated caller is
/// redirected to the login page with no data access performed.
pub async fn contribute_form(
    SessionUser(_session): SessionUser,
    State(state): State<CatalogState>,
) -> Result<Json<ContributeFormResponse>> {
    let genres = state.repos.reference.list_genres().await;
    let countries = state.repos.reference.list_countries().await;
    let directors = state.repos.reference.list_directors().await;
    let keywords = state.repos.reference.list_keywords().await?;

    Ok(Json(ContributeFormResponse {
        genres,
        countries,
        directors,
        keywords,
    }))
}

/// POST /movies/contribute - Contribute a movie
pub async fn contribute(
    SessionUser(session): SessionUser,
    State(state): State<CatalogState>,
    Json(request): Json<NewMovie>,
) -> Result<(StatusCode, Json<Movie>)> {
    request
        .validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;

    let movie = state.repos.movies.create(session.user_id, &request).await?;

    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movies/{id} - One movie with relations
pub async fn get_movie(
    State(state): State<CatalogState>,
    Path(id): Path<i32>,
) -> Result<Json<MovieWithRelations>> {
    let movie = state
        .repos
        .movies
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Movie {} not found", id)))?;

    Ok(Json(movie))
}

/// DELETE /movies/{id} - Remove a movie (admin only)
pub async fn delete_movie(
    AdminUser(session): AdminUser,
    State(state): State<CatalogState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let deleted = state.repos.movies.delete(id).await?;
    if !deleted {
        return Err(Error::NotFound(format!("Movie {} not found", id)));
    }

    tracing::info!(movie_id = id, deleted_by = %session.user_id, "Movie deleted");
    Ok(StatusCode::NO_CONTENT)
}
