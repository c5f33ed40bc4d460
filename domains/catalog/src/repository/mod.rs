//! Repository implementations for the catalogue domain

pub mod links;
pub mod movies;
pub mod reference;

use sqlx::PgPool;

pub use links::LinkRepository;
pub use movies::MovieRepository;
pub use reference::ReferenceRepository;

/// Combined repository access for the catalogue domain
#[derive(Clone)]
pub struct CatalogRepositories {
    pub movies: MovieRepository,
    pub reference: ReferenceRepository,
}

impl CatalogRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            movies: MovieRepository::new(pool.clone()),
            reference: ReferenceRepository::new(pool),
        }
    }
}
