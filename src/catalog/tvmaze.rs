/// TVMaze catalog implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchResult};
use super::{CatalogError, Episode, PLACEHOLDER_IMAGE_URL, Show, ShowCatalog};
use crate::config::CatalogConfig;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Catalog backed by the TVMaze API.
///
/// Uses the `/search/shows` endpoint for searching and
/// `/shows/{id}/episodes` for episode listings. Each call is a single
/// blocking request without retries.
pub struct TvMazeCatalog {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TvMazeCatalog {
    /// Creates a new TVMaze catalog with the default configuration.
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_config(&CatalogConfig::default())
    }

    /// Creates a new TVMaze catalog from the given configuration.
    pub fn with_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        // The blocking client applies a 30s timeout unless told otherwise
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::RequestError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Converts a search result to our Show record.
    ///
    /// Only the medium image variant is used. A missing image, a missing
    /// medium variant and an empty URL all yield the placeholder.
    fn convert_show(result: TvMazeSearchResult) -> Show {
        let show = result.show;
        let image = show
            .image
            .and_then(|image| image.medium)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());

        Show {
            id: show.id,
            name: show.name,
            summary: show.summary.unwrap_or_default(),
            image,
        }
    }

    /// Converts a TVMaze episode to our Episode record.
    fn convert_episode(episode: TvMazeEpisode) -> Result<Episode, CatalogError> {
        let number = episode.number.ok_or_else(|| {
            CatalogError::InvalidData(format!("Episode {} has no episode number", episode.id))
        })?;

        Ok(Episode {
            id: episode.id,
            name: episode.name,
            season: episode.season,
            number,
        })
    }

    /// Issues a GET request and decodes the JSON body.
    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        debug!(url, ?query, "Querying catalog");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| CatalogError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "Catalog returned an error status");
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json()
            .map_err(|e| CatalogError::ParseError(e.to_string()))
    }
}

impl ShowCatalog for TvMazeCatalog {
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, CatalogError> {
        let url = format!("{}/search/shows", self.base_url);
        let results: Vec<TvMazeSearchResult> = self.get_json(&url, &[("q", term)])?;

        let shows: Vec<Show> = results.into_iter().map(Self::convert_show).collect();
        debug!(term, count = shows.len(), "Mapped search results");

        Ok(shows)
    }

    fn list_episodes(&self, show_id: u64) -> Result<Vec<Episode>, CatalogError> {
        let url = format!("{}/shows/{}/episodes", self.base_url, show_id);
        let raw: Vec<TvMazeEpisode> = self.get_json(&url, &[])?;

        let episodes = raw
            .into_iter()
            .map(Self::convert_episode)
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| warn!(show_id, error = %e, "Rejected episode listing"))?;
        debug!(show_id, count = episodes.len(), "Mapped episode listing");

        Ok(episodes)
    }
}
