//! Core game rules for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Front-ends drive a [`GameSession`] one tick at a time and draw its [`Snapshot`].

pub mod config;
pub mod direction;
pub mod error;
pub mod food;
pub mod session;
pub mod snake;

// Re-export commonly used types
pub use config::{ConfigFile, GameConfig, MAX_GRID_EXTENT};
pub use direction::Direction;
pub use error::{ConfigError, GameError};
pub use food::FoodManager;
pub use session::{EndReason, GameSession, SessionState, Snapshot, TickResult, FOOD_REWARD};
pub use snake::{Coordinate, Snake};
