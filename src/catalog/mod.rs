/// Data structures and traits for querying the TV show catalog.
///
/// This module provides the display-ready `Show` and `Episode` records
/// produced from catalog responses, as well as the trait implemented by
/// catalog backends.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::TvMazeCatalog;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Image reference used when the catalog provides no image for a show.
pub const PLACEHOLDER_IMAGE_URL: &str = "http://tinyurl.com/tv-missing";

/// Errors that can occur while querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not be sent or no response arrived
    #[error("Request failed: {0}")]
    RequestError(String),

    /// The catalog answered with a non-success status
    #[error("HTTP {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    /// Failed to parse the catalog's JSON response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// The API returned data that does not fit the model
    #[error("API returned invalid data: {0}")]
    InvalidData(String),
}

/// A television show as displayed in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Catalog identifier of the show
    pub id: u64,
    /// The show title
    pub name: String,
    /// Summary in HTML, as delivered by the catalog
    pub summary: String,
    /// Medium-resolution image URL, or the placeholder URL
    pub image: String,
}

/// A single episode belonging to a show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Catalog identifier of the episode
    pub id: u64,
    /// The episode title
    pub name: String,
    /// The season number this episode belongs to
    pub season: u32,
    /// The episode number within the season
    pub number: u32,
}

/// Trait for catalogs that can search shows and list their episodes.
///
/// Both operations perform a single round trip and pass the catalog's
/// ordering through unchanged. Failures are returned, never retried.
pub trait ShowCatalog {
    /// Searches shows matching a free-text term.
    ///
    /// The term is forwarded as-is; an empty term is not rejected.
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, CatalogError>;

    /// Lists all episodes of the show with the given identifier.
    fn list_episodes(&self, show_id: u64) -> Result<Vec<Episode>, CatalogError>;
}
