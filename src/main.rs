use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::{BoardSize, GameConfig, Speed};
use grid_snake::logging;
use grid_snake::modes::PlayMode;
use grid_snake::render::ThemeName;
use grid_snake::settings::{self, Settings};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a grid, in your terminal")]
struct Cli {
    /// Board size; defaults to the stored preference
    #[arg(long, value_enum)]
    size: Option<BoardSize>,

    /// Tick speed; defaults to the stored preference
    #[arg(long, value_enum)]
    speed: Option<Speed>,

    /// Color theme; defaults to the stored preference
    #[arg(long, value_enum)]
    theme: Option<ThemeName>,

    /// Settings file holding the high score and preferences
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Log file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Seed for spawn and food placement
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli
        .log_file
        .unwrap_or_else(|| settings::default_dir().join(logging::LOG_FILE));
    logging::init(&log_path)?;

    let settings_path = cli.settings.unwrap_or_else(settings::default_path);
    let mut settings = Settings::load(&settings_path).context("Failed to load settings")?;

    // Command-line choices override and replace stored preferences
    if let Some(size) = cli.size {
        settings.size = size;
    }
    if let Some(speed) = cli.speed {
        settings.speed = speed;
    }
    if let Some(theme) = cli.theme {
        settings.theme = theme;
    }

    let config = GameConfig::from_presets(settings.size, settings.speed);
    info!(
        ?config,
        theme = settings.theme.label(),
        settings = %settings_path.display(),
        "starting"
    );

    let mut play_mode = PlayMode::new(config, settings, settings_path, cli.seed)?;
    play_mode.run().await?;

    Ok(())
}
