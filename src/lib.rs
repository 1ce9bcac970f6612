//! Grid Snake - the rules of the classic snake game with a terminal front-end
//!
//! This library provides:
//! - Core game rules (game module), free of any I/O
//! - Keyboard input (input module)
//! - TUI rendering (render module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod modes;
pub mod render;
