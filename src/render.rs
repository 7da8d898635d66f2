//! Rendering module
//!
//! Turns shows and episodes into output fragments. The output sink is always
//! supplied by the caller; renderers hold no reference to where their output
//! ends up.

use crate::catalog::{Episode, PLACEHOLDER_IMAGE_URL, Show};
use serde::Serialize;
use std::io::{self, Write};
use thiserror::Error;

/// Errors that can occur while rendering
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output sink failed
    #[error("Failed to write rendered output: {0}")]
    WriteFailed(#[from] io::Error),

    /// Records could not be encoded as JSON
    #[error("Failed to encode output as JSON: {0}")]
    EncodeFailed(#[from] serde_json::Error),
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain terminal text
    #[default]
    Text,
    /// HTML fragments for embedding in a page
    Html,
    /// A JSON array of the records
    Json,
}

impl OutputFormat {
    /// Returns the renderer for this format
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer),
            OutputFormat::Html => Box::new(HtmlRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}

/// Trait for turning display records into output
///
/// Implementors write one complete fragment per call into the given sink.
pub trait Renderer {
    /// Renders a list of shows
    fn render_shows(&self, shows: &[Show], out: &mut dyn Write) -> Result<(), RenderError>;

    /// Renders a list of episodes
    fn render_episodes(&self, episodes: &[Episode], out: &mut dyn Write)
    -> Result<(), RenderError>;
}

/// Renders the show and episode cards of the search page
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render_shows(&self, shows: &[Show], out: &mut dyn Write) -> Result<(), RenderError> {
        for show in shows {
            // The summary is HTML from the catalog and is inserted unescaped
            write!(
                out,
                r#"<div data-show-id="{id}" class="Show col-md-12 col-lg-6 mb-4">
  <div class="media">
    <img src="{image}" alt="{placeholder}" class="w-25 me-3">
    <div class="media-body">
      <h5 class="text-primary">{name}</h5>
      <div><small>{summary}</small></div>
      <button class="btn btn-outline-light btn-sm Show-getEpisodes">Episodes</button>
    </div>
  </div>
</div>
"#,
                id = show.id,
                image = escape_html(&show.image),
                placeholder = PLACEHOLDER_IMAGE_URL,
                name = escape_html(&show.name),
                summary = show.summary,
            )?;
        }
        Ok(())
    }

    fn render_episodes(
        &self,
        episodes: &[Episode],
        out: &mut dyn Write,
    ) -> Result<(), RenderError> {
        for episode in episodes {
            write!(
                out,
                r#"<div data-episode-id="{id}" class="Episode col-md-12 col-lg-6 mb-4">
  <div class="media">
    <div class="media-body">
      <h5 class="text-primary">{name}</h5>
      <div><small>Season {season}</small></div>
      <div><small>Episode {number}</small></div>
    </div>
  </div>
</div>
"#,
                id = episode.id,
                name = escape_html(&episode.name),
                season = episode.season,
                number = episode.number,
            )?;
        }
        Ok(())
    }
}

/// Renders plain text listings for the terminal
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render_shows(&self, shows: &[Show], out: &mut dyn Write) -> Result<(), RenderError> {
        if shows.is_empty() {
            writeln!(out, "No shows found.")?;
            return Ok(());
        }

        for (index, show) in shows.iter().enumerate() {
            writeln!(out, "{}. {} (id {})", index + 1, show.name, show.id)?;
            writeln!(out, "   Image: {}", show.image)?;

            let summary = nanohtml2text::html2text(&show.summary);
            let summary = summary.trim();
            if !summary.is_empty() {
                writeln!(out, "   {}", summary)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn render_episodes(
        &self,
        episodes: &[Episode],
        out: &mut dyn Write,
    ) -> Result<(), RenderError> {
        if episodes.is_empty() {
            writeln!(out, "No episodes found.")?;
            return Ok(());
        }

        for episode in episodes {
            writeln!(
                out,
                "S{:02}E{:02} - {}",
                episode.season, episode.number, episode.name
            )?;
        }
        Ok(())
    }
}

/// Renders the records as pretty-printed JSON arrays
pub struct JsonRenderer;

impl JsonRenderer {
    fn write_json<T: Serialize>(records: &[T], out: &mut dyn Write) -> Result<(), RenderError> {
        serde_json::to_writer_pretty(&mut *out, records)?;
        writeln!(out)?;
        Ok(())
    }
}

impl Renderer for JsonRenderer {
    fn render_shows(&self, shows: &[Show], out: &mut dyn Write) -> Result<(), RenderError> {
        Self::write_json(shows, out)
    }

    fn render_episodes(
        &self,
        episodes: &[Episode],
        out: &mut dyn Write,
    ) -> Result<(), RenderError> {
        Self::write_json(episodes, out)
    }
}

/// Escapes text for use in HTML element content and attribute values
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_show() -> Show {
        Show {
            id: 139,
            name: "Girls & Boys".to_string(),
            summary: "<p>A <b>comedy</b>.</p>".to_string(),
            image: "http://x/img.jpg".to_string(),
        }
    }

    fn sample_episode() -> Episode {
        Episode {
            id: 10,
            name: "Pilot".to_string(),
            season: 1,
            number: 3,
        }
    }

    fn render_to_string(render: impl FnOnce(&mut dyn Write) -> Result<(), RenderError>) -> String {
        let mut buffer = Vec::new();
        render(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#"<"x">'"#), "&lt;&quot;x&quot;&gt;&#39;");
    }

    #[test]
    fn test_html_show_card() {
        let html = render_to_string(|out| HtmlRenderer.render_shows(&[sample_show()], out));
        assert!(html.contains(r#"data-show-id="139""#));
        assert!(html.contains(r#"<img src="http://x/img.jpg" alt="http://tinyurl.com/tv-missing""#));
        assert!(html.contains("<h5 class=\"text-primary\">Girls &amp; Boys</h5>"));
        assert!(html.contains("<small><p>A <b>comedy</b>.</p></small>"));
        assert!(html.contains("Show-getEpisodes"));
    }

    #[test]
    fn test_html_episode_card() {
        let html = render_to_string(|out| HtmlRenderer.render_episodes(&[sample_episode()], out));
        assert!(html.contains(r#"data-episode-id="10""#));
        assert!(html.contains("Pilot"));
        assert!(html.contains("Season 1"));
        assert!(html.contains("Episode 3"));
    }

    #[test]
    fn test_html_empty_lists_render_nothing() {
        assert_eq!(render_to_string(|out| HtmlRenderer.render_shows(&[], out)), "");
        assert_eq!(render_to_string(|out| HtmlRenderer.render_episodes(&[], out)), "");
    }

    #[test]
    fn test_text_show_listing_strips_markup() {
        let text = render_to_string(|out| TextRenderer.render_shows(&[sample_show()], out));
        assert!(text.starts_with("1. Girls & Boys (id 139)\n"));
        assert!(text.contains("Image: http://x/img.jpg"));
        assert!(text.contains("comedy"));
        assert!(!text.contains("<b>"));
    }

    #[test]
    fn test_text_episode_listing() {
        let text = render_to_string(|out| TextRenderer.render_episodes(&[sample_episode()], out));
        assert_eq!(text, "S01E03 - Pilot\n");
    }

    #[test]
    fn test_text_empty_lists() {
        assert_eq!(
            render_to_string(|out| TextRenderer.render_shows(&[], out)),
            "No shows found.\n"
        );
        assert_eq!(
            render_to_string(|out| TextRenderer.render_episodes(&[], out)),
            "No episodes found.\n"
        );
    }

    #[test]
    fn test_json_listing_round_trips() {
        let json = render_to_string(|out| JsonRenderer.render_shows(&[sample_show()], out));
        let parsed: Vec<Show> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![sample_show()]);

        let json = render_to_string(|out| JsonRenderer.render_episodes(&[], out));
        assert_eq!(json, "[]\n");
    }

    #[test]
    fn test_output_format_selects_renderer() {
        let html = render_to_string(|out| {
            OutputFormat::Html
                .renderer()
                .render_episodes(&[sample_episode()], out)
        });
        assert!(html.starts_with("<div"));
        let text = render_to_string(|out| {
            OutputFormat::Text
                .renderer()
                .render_episodes(&[sample_episode()], out)
        });
        assert!(text.starts_with("S01E03"));
    }
}
