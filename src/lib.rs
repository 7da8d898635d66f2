//! show_finder - Search a TV catalog and list the episodes of its shows
//!
//! This library queries the TVMaze catalog, shapes its responses into
//! display-ready records, and renders them as HTML fragments or terminal text.

mod catalog;
mod config;
mod render;

pub use catalog::{
    CatalogError, Episode, PLACEHOLDER_IMAGE_URL, Show, ShowCatalog, TvMazeCatalog,
};
pub use config::{CatalogConfig, DEFAULT_API_URL};
pub use render::{
    HtmlRenderer, JsonRenderer, OutputFormat, RenderError, Renderer, TextRenderer,
};

use std::io;
use thiserror::Error;
use tracing::info;

/// Top-level error type for show_finder operations
#[derive(Debug, Error)]
pub enum ShowFinderError {
    /// Error while querying the catalog
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Error while rendering results
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Handles a submitted search
///
/// Queries the catalog with the term exactly as entered and returns the
/// matching shows in catalog order. Any failure is returned to the caller
/// without a retry or a partial result.
///
/// # Examples
///
/// ```no_run
/// use show_finder::{on_search_submitted, TvMazeCatalog};
///
/// let catalog = TvMazeCatalog::new().unwrap();
/// let shows = on_search_submitted(&catalog, "girls").unwrap();
/// for show in &shows {
///     println!("{} ({})", show.name, show.image);
/// }
/// ```
pub fn on_search_submitted<C>(catalog: &C, term: &str) -> Result<Vec<Show>, ShowFinderError>
where
    C: ShowCatalog + ?Sized,
{
    info!(term, "Searching shows");
    let shows = catalog.search_shows(term)?;
    info!(term, count = shows.len(), "Search complete");
    Ok(shows)
}

/// Handles a request for the episodes of a show
///
/// The identifier is the one of the show the user selected from the
/// search results.
pub fn on_episodes_requested<C>(catalog: &C, show_id: u64) -> Result<Vec<Episode>, ShowFinderError>
where
    C: ShowCatalog + ?Sized,
{
    info!(show_id, "Fetching episodes");
    let episodes = catalog.list_episodes(show_id)?;
    info!(show_id, count = episodes.len(), "Episodes fetched");
    Ok(episodes)
}
