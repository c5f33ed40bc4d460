//! Domain entities for the Cinelog catalogue
//!
//! Catalogue rows use integer identifiers owned by the relational store;
//! principals keep the identity provider's UUIDs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Film genre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

/// Production country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Country {
    pub id: i32,
    pub name: String,
}

/// Film director
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Director {
    pub id: i32,
    pub name: String,
}

/// Thematic keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Keyword {
    pub id: i32,
    pub name: String,
}

/// Form-option projection of a keyword: the id rendered as a string value
/// with the name as label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl From<Keyword> for SelectOption {
    fn from(keyword: Keyword) -> Self {
        Self {
            value: keyword.id.to_string(),
            label: keyword.name,
        }
    }
}

/// Movie entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub original_title: Option<String>,
    pub release_year: Option<i32>,
    pub synopsis: Option<String>,
    pub image_url: Option<String>,
    /// Contributor principal; absent for rows imported out-of-band
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Movie joined with its related catalogue entities
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieWithRelations {
    #[serde(flatten)]
    pub movie: Movie,
    pub directors: Vec<Director>,
    pub genres: Vec<Genre>,
    pub countries: Vec<Country>,
}

/// Validated contribution payload for a new movie
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMovie {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 200))]
    pub original_title: Option<String>,

    #[validate(range(min = 1888, max = 2100))]
    pub release_year: Option<i32>,

    #[validate(length(max = 5000))]
    pub synopsis: Option<String>,

    #[validate(url)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub director_ids: Vec<i32>,

    #[serde(default)]
    pub genre_ids: Vec<i32>,

    #[serde(default)]
    pub country_ids: Vec<i32>,

    #[serde(default)]
    pub keyword_ids: Vec<i32>,
}
