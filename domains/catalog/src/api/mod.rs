//! API layer for the catalogue domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::CatalogState;
pub use routes::routes;
