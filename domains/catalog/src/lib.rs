//! Catalogue domain: movies, genres, countries, directors, keywords,
//! streaming links

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
// Re-export repository types
pub use repository::{CatalogRepositories, LinkRepository, MovieRepository, ReferenceRepository};

// Re-export API types
pub use api::routes;
pub use api::CatalogState;
