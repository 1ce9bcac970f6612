use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Largest number of columns or rows a grid may have
pub const MAX_GRID_EXTENT: u32 = 1024;

/// Raw configuration as read from a file or the command line
///
/// Missing keys fall back to the defaults of [`ConfigFile::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Edge length of one grid cell in pixels
    pub grid_size: u32,
    /// Game ticks per second
    pub tick_rate: u32,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            grid_size: 20,
            tick_rate: 10,
        }
    }
}

impl ConfigFile {
    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Validated configuration for the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigFile", into = "ConfigFile")]
pub struct GameConfig {
    width: u32,
    height: u32,
    grid_size: u32,
    tick_rate: u32,
    grid_width: i32,
    grid_height: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        let ConfigFile {
            width,
            height,
            grid_size,
            tick_rate,
        } = ConfigFile::default();

        // 600 / 20 by 400 / 20
        Self {
            width,
            height,
            grid_size,
            tick_rate,
            grid_width: 30,
            grid_height: 20,
        }
    }
}

impl GameConfig {
    /// Build a configuration, rejecting zero values, canvases smaller than
    /// one cell and grids with more than [`MAX_GRID_EXTENT`] columns or rows
    pub fn new(width: u32, height: u32, grid_size: u32, tick_rate: u32) -> Result<Self, ConfigError> {
        for (field, value) in [
            ("width", width),
            ("height", height),
            ("grid_size", grid_size),
            ("tick_rate", tick_rate),
        ] {
            if value == 0 {
                return Err(ConfigError::NonPositive { field });
            }
        }

        let (columns, rows) = (width / grid_size, height / grid_size);
        if columns == 0 || rows == 0 {
            return Err(ConfigError::EmptyGrid {
                width,
                height,
                grid_size,
            });
        }

        let extent = |cells: u32| i32::try_from(cells).ok().filter(|_| cells <= MAX_GRID_EXTENT);
        let (Some(grid_width), Some(grid_height)) = (extent(columns), extent(rows)) else {
            return Err(ConfigError::GridTooLarge {
                columns,
                rows,
                max: MAX_GRID_EXTENT,
            });
        };

        Ok(Self {
            width,
            height,
            grid_size,
            tick_rate,
            grid_width,
            grid_height,
        })
    }

    /// Configuration whose grid is exactly `columns` x `rows` cells
    pub fn with_grid(columns: u32, rows: u32) -> Result<Self, ConfigError> {
        let defaults = ConfigFile::default();
        Self::new(
            columns.saturating_mul(defaults.grid_size),
            rows.saturating_mul(defaults.grid_size),
            defaults.grid_size,
            defaults.tick_rate,
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    /// Number of grid columns (truncating)
    pub fn grid_width(&self) -> i32 {
        self.grid_width
    }

    /// Number of grid rows (truncating)
    pub fn grid_height(&self) -> i32 {
        self.grid_height
    }

    /// Time between two ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate
    }

    /// Check if a cell lies inside the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.grid_width).contains(&x) && (0..self.grid_height).contains(&y)
    }
}

impl TryFrom<ConfigFile> for GameConfig {
    type Error = ConfigError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        Self::new(file.width, file.height, file.grid_size, file.tick_rate)
    }
}

impl From<GameConfig> for ConfigFile {
    fn from(config: GameConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            grid_size: config.grid_size,
            tick_rate: config.tick_rate,
        }
    }
}
