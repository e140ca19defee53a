//! Core game logic module for Snake
//!
//! This module contains all the game logic without any windowing or rendering dependencies.
//! The interactive mode drives it one frame at a time; tests drive it headless.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{GameConfig, DEFAULT_FONT_PATH, FONT_SIZE, FRAME_DELAY, WINDOW_TITLE};
pub use engine::{GameEngine, StepResult};
pub use state::{Aabb, Food, GameState, LossCause, Position, Segments, Snake};
