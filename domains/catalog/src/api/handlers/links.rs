//! Streaming-link API handlers

use axum::{
    extract::{Path, State},
    response::Json,
};
use cinelog_storage::StreamLink;

use crate::api::middleware::CatalogState;

/// GET /movies/{id}/links
///
/// Always responds 200: a movie without links (or a movie that does not
/// exist) has an empty sequence, indistinguishable from "no data".
pub async fn list_movie_links(
    State(state): State<CatalogState>,
    Path(id): Path<i32>,
) -> Json<Vec<StreamLink>> {
    Json(state.links.list_links(id).await)
}
