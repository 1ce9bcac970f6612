use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the game rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A step between two cells is not one of the four unit vectors.
    ///
    /// Snake segments are always adjacent, so seeing this means the body
    /// invariant has been broken somewhere.
    #[error("({dx}, {dy}) is not a unit direction vector")]
    InvalidDirectionVector { dx: i32, dy: i32 },

    /// A snake was built from an empty segment list.
    #[error("snake body must contain at least one segment")]
    EmptyBody,

    /// Every grid cell is covered by the snake.
    #[error("no free cell left to place food")]
    NoFreeSpace,
}

/// Errors raised while building a [`GameConfig`](super::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a positive integer")]
    NonPositive { field: &'static str },

    #[error("grid size {grid_size} leaves no cells on a {width}x{height} canvas")]
    EmptyGrid {
        width: u32,
        height: u32,
        grid_size: u32,
    },

    #[error("a {columns}x{rows} grid exceeds the limit of {max} cells per side")]
    GridTooLarge { columns: u32, rows: u32, max: u32 },

    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
