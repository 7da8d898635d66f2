/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
/// Fields the application does not use are ignored.
use serde::Deserialize;

/// One entry of the `/search/shows` response.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchResult {
    /// The matched show, wrapped by the API
    pub show: TvMazeShow,
}

/// A show as embedded in a search result.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    pub id: u64,
    pub name: String,
    /// Summary in HTML format (may be null)
    #[serde(default)]
    pub summary: Option<String>,
    /// Image variants (null when the show has no artwork)
    #[serde(default)]
    pub image: Option<TvMazeImage>,
}

/// Image URLs for a show.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    #[serde(default)]
    pub medium: Option<String>,
}

/// A single episode from the `/shows/{id}/episodes` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    pub id: u64,
    pub name: String,
    /// Season number (0 for specials)
    pub season: u32,
    /// Episode number within the season (null for some specials)
    #[serde(default)]
    pub number: Option<u32>,
}
