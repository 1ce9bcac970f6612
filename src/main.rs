use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::{ConfigFile, GameConfig};
use grid_snake::logging::init_logging;
use grid_snake::modes::HumanMode;
use log::info;
use simplelog::LevelFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Classic snake on a terminal grid")]
struct Cli {
    /// JSON file with width, height, grid_size and tick_rate
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Edge length of one grid cell in pixels
    #[arg(long)]
    grid_size: Option<u32>,

    /// Game ticks per second
    #[arg(long)]
    tick_rate: Option<u32>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the log
    #[arg(long, default_value = "grid_snake.log")]
    log_file: PathBuf,

    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
        }
    }
}

impl Cli {
    /// Defaults, then the config file, then command-line flags
    fn game_config(&self) -> Result<GameConfig> {
        let mut file = match &self.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        if let Some(width) = self.width {
            file.width = width;
        }
        if let Some(height) = self.height {
            file.height = height;
        }
        if let Some(grid_size) = self.grid_size {
            file.grid_size = grid_size;
        }
        if let Some(tick_rate) = self.tick_rate {
            file.tick_rate = tick_rate;
        }

        GameConfig::try_from(file).context("Invalid game configuration")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_file, cli.log_level.into())?;

    let config = cli.game_config()?;
    info!(
        "starting on a {}x{} grid at {} ticks per second",
        config.grid_width(),
        config.grid_height(),
        config.tick_rate()
    );

    let mut human_mode = HumanMode::new(config, cli.seed);
    human_mode.run().await?;

    Ok(())
}
