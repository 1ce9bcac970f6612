use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Send `log` records to a file.
///
/// The terminal belongs to the game screen, so nothing is logged to stdout
/// or stderr.
pub fn init_logging(path: &Path, level: LevelFilter) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    WriteLogger::init(level, Config::default(), file).context("Failed to initialize logger")?;
    Ok(())
}
