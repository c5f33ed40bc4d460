//! Reference-data API handlers
//!
//! Public listings for the browse filters and the contribution form.
//! The soft-read listings respond 200 with an empty array on store
//! failure; the keyword listing surfaces its documented error instead.

use axum::{extract::State, response::Json};
use cinelog_common::Result;

use crate::api::middleware::CatalogState;
use crate::domain::entities::{Country, Director, Genre, SelectOption};

/// GET /genres
pub async fn list_genres(State(state): State<CatalogState>) -> Json<Vec<Genre>> {
    Json(state.repos.reference.list_genres().await)
}

/// GET /countries
pub async fn list_countries(State(state): State<CatalogState>) -> Json<Vec<Country>> {
    Json(state.repos.reference.list_countries().await)
}

/// GET /directors
pub async fn list_directors(State(state): State<CatalogState>) -> Json<Vec<Director>> {
    Json(state.repos.reference.list_directors().await)
}

/// GET /keywords
pub async fn list_keywords(State(state): State<CatalogState>) -> Result<Json<Vec<SelectOption>>> {
    let keywords = state.repos.reference.list_keywords().await?;
    Ok(Json(keywords))
}
