use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::Select;
use show_finder::{
    CatalogConfig, DEFAULT_API_URL, OutputFormat, Show, ShowFinderError, TvMazeCatalog,
    on_episodes_requested, on_search_submitted,
};
use std::io::{self, Write};
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Search the TVMaze catalog and list the episodes of its shows
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Base URL of the catalog API
    #[arg(long, global = true, env = "SHOW_FINDER_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds (waits indefinitely when omitted)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search shows by a free-text term
    Search {
        /// The search term, forwarded to the catalog as entered
        term: String,

        /// Pick one of the found shows and list its episodes
        #[arg(long)]
        pick: bool,
    },
    /// List the episodes of a show
    Episodes {
        /// Catalog identifier of the show
        show_id: u64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Html,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Html => OutputFormat::Html,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Installs the stderr log subscriber, honouring `RUST_LOG` when set
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Lets the user choose one of the found shows
///
/// Returns `None` when there is nothing to choose from or the user aborts.
fn pick_show(shows: &[Show]) -> io::Result<Option<&Show>> {
    if shows.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> = shows
        .iter()
        .map(|show| format!("{} (id {})", show.name, show.id))
        .collect();

    let selection = Select::new()
        .with_prompt("Show episodes for")
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(io::Error::other)?;

    Ok(selection.map(|index| &shows[index]))
}

fn run(cli: Cli) -> Result<(), ShowFinderError> {
    let config = CatalogConfig::default()
        .with_base_url(cli.api_url)
        .with_timeout(cli.timeout_secs.map(Duration::from_secs));
    let catalog = TvMazeCatalog::with_config(&config)?;
    let renderer = OutputFormat::from(cli.format).renderer();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Search { term, pick } => {
            let shows = on_search_submitted(&catalog, &term)?;
            renderer.render_shows(&shows, &mut out)?;
            out.flush()?;

            if pick {
                if let Some(show) = pick_show(&shows)? {
                    let episodes = on_episodes_requested(&catalog, show.id)?;
                    writeln!(out)?;
                    renderer.render_episodes(&episodes, &mut out)?;
                }
            }
        }
        Command::Episodes { show_id } => {
            let episodes = on_episodes_requested(&catalog, show_id)?;
            renderer.render_episodes(&episodes, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
