//! Fansite CLI application.
//!
//! Fetches Jikan metadata for the showcased series and prints the
//! requested page section to stdout.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use fansite::api::JikanClient;
use fansite::pages;
use shared::Config;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "fansite")]
#[command(about = "Terminal viewer for the showcased anime's MAL metadata")]
struct Args {
    /// Page section to display
    #[arg(value_enum, default_value = "home")]
    section: Section,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Page number for paginated sections (episodes, reviews, news)
    #[arg(short, long)]
    page: Option<u32>,

    /// Override the configured anime id
    #[arg(long)]
    anime_id: Option<u32>,

    /// Character id for the character section
    #[arg(long)]
    character_id: Option<u32>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Section {
    /// Hero, synopsis, statistics and a character preview
    Home,
    /// Full information cards and statistics
    Details,
    /// Character list with voice actors
    Characters,
    /// Episode list
    Episodes,
    /// Staff list
    Staff,
    /// Reviews
    Reviews,
    /// Recommendations
    Recommendations,
    /// News
    News,
    /// Full details for one character (requires --character-id)
    Character,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::from_file(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    // Initialize logging
    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        config
            .logging
            .default_level
            .parse()
            .unwrap_or(tracing::Level::INFO)
    };

    shared::logging::init(shared::LogConfig {
        log_dir: config.log_dir().to_string_lossy().to_string(),
        component: "fansite".to_string(),
        default_level: log_level,
        console: config.logging.console,
        file: config.logging.file,
        json_format: config.logging.json_format,
    })?;

    let anime_id = args.anime_id.unwrap_or(config.site.anime_id);
    info!(anime_id, section = ?args.section, "Fetching page data");

    // One client per process: the request spacing is shared across
    // every call made below
    let client = JikanClient::with_base_url(
        config.api.base_url.clone(),
        Duration::from_millis(config.api.min_interval_ms),
    )
    .context("Failed to create Jikan client")?;

    match args.section {
        Section::Home => {
            let details = client.anime_details(anime_id).await?;
            let characters = client.anime_characters(anime_id).await?;

            print!("{}", pages::hero(&details));
            println!();
            print!("{}", pages::synopsis(&details));
            println!();
            print!("{}", pages::statistics(&details));
            println!();
            print!(
                "{}",
                pages::characters_page(&characters, pages::PREVIEW_CHARACTERS)
            );
        }
        Section::Details => {
            let details = client.anime_details(anime_id).await?;

            print!("{}", pages::hero(&details));
            println!();
            print!("{}", pages::info_cards(&details));
            println!();
            print!("{}", pages::statistics(&details));
        }
        Section::Characters => {
            let characters = client.anime_characters(anime_id).await?;
            print!(
                "{}",
                pages::characters_page(&characters, pages::TOP_CHARACTERS)
            );
        }
        Section::Episodes => {
            let episodes = client.anime_episodes(anime_id, args.page).await?;
            print!("{}", pages::episodes_page(&episodes));
        }
        Section::Staff => {
            let staff = client.anime_staff(anime_id).await?;
            print!("{}", pages::staff_page(&staff));
        }
        Section::Reviews => {
            let reviews = client.anime_reviews(anime_id, args.page).await?;
            print!("{}", pages::reviews_page(&reviews));
        }
        Section::Recommendations => {
            let recommendations = client.anime_recommendations(anime_id).await?;
            print!("{}", pages::recommendations_page(&recommendations));
        }
        Section::News => {
            let news = client.anime_news(anime_id, args.page).await?;
            print!("{}", pages::news_page(&news));
        }
        Section::Character => {
            let Some(character_id) = args.character_id else {
                bail!("--character-id is required for the character section");
            };
            let character = client.character_details(character_id).await?;
            print!("{}", pages::character_page(&character));
        }
    }

    Ok(())
}
