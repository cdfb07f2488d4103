/// Cent - terminal music player front end
use anyhow::Context;
use cent_cli::{
    commands::{self, format_snapshot, format_track_line},
    AppState, CliConfig, PlayOptions, TrackList,
};
use cent_core::Track;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cent")]
#[command(about = "Browse, search and play music from the terminal", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./cent.toml if present)
    #[arg(short, long, global = true, env = "CENT_CONFIG")]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show trending music
    Trending,
    /// Show new releases
    NewReleases,
    /// Show recommendations
    Recommended,
    /// Search for music
    Search {
        /// Search text
        query: String,
    },
    /// Play a list through the logging transport
    Play {
        /// List to queue
        #[arg(short, long, value_enum, default_value = "trending")]
        list: TrackList,
        /// Search and queue the results instead of a list
        #[arg(short, long)]
        query: Option<String>,
        /// Queue position to start at
        #[arg(short, long, default_value_t = 0)]
        start: usize,
        /// Ticks of playback to simulate
        #[arg(long, default_value_t = 10)]
        seconds: u64,
        /// Tracks to skip forward afterwards
        #[arg(long, default_value_t = 0)]
        skip: usize,
    },
    /// Manage favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Show recently played tracks
    History,
    /// Set the stored volume (0.0 - 1.0)
    Volume {
        level: f32,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// List favorites
    List,
    /// Favorite a track from a catalog list
    Add {
        #[arg(short, long, value_enum, default_value = "trending")]
        list: TrackList,
        /// Position in the list (0-based)
        #[arg(short, long)]
        index: usize,
    },
    /// Remove a favorite by track id
    Remove {
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "cent=info,cent_cli=info,cent_playback=info,cent_catalog=info,cent_storage=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let state = AppState::new(config).context("Failed to initialize")?;
    let json = cli.json;

    match cli.command {
        Commands::Trending => {
            print_tracks(&commands::fetch_list(&state, TrackList::Trending).await, json)?;
        }
        Commands::NewReleases => {
            print_tracks(&commands::fetch_list(&state, TrackList::NewReleases).await, json)?;
        }
        Commands::Recommended => {
            print_tracks(&commands::fetch_list(&state, TrackList::Recommended).await, json)?;
        }
        Commands::Search { query } => {
            print_tracks(&commands::search(&state, &query).await, json)?;
        }
        Commands::Play {
            list,
            query,
            start,
            seconds,
            skip,
        } => {
            let options = PlayOptions {
                list,
                query,
                start,
                seconds,
                skip,
            };
            let snapshot = commands::play(&state, options).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                println!("{}", format_snapshot(&snapshot));
            }
        }
        Commands::Favorites { action } => match action {
            FavoritesAction::List => print_tracks(&commands::favorites(&state), json)?,
            FavoritesAction::Add { list, index } => {
                let track = commands::add_favorite(&state, list, index).await?;
                println!("Added to favorites: {} - {}", track.title, track.artist);
            }
            FavoritesAction::Remove { id } => {
                if commands::remove_favorite(&state, &id) {
                    println!("Removed {} from favorites", id);
                } else {
                    println!("{} is not a favorite", id);
                }
            }
        },
        Commands::History => print_tracks(&commands::history(&state), json)?,
        Commands::Volume { level } => {
            let level = commands::set_volume(&state, level)?;
            println!("Volume set to {:.0}%", level * 100.0);
        }
    }

    Ok(())
}

fn print_tracks(tracks: &[Track], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(tracks)?);
        return Ok(());
    }

    if tracks.is_empty() {
        println!("No tracks");
    }
    for (i, track) in tracks.iter().enumerate() {
        println!("{}", format_track_line(i + 1, track));
    }
    Ok(())
}
