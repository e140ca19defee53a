//! Pixel Snake - a single-screen snake arcade game
//!
//! This library provides:
//! - Core game logic (game module), usable without a window
//! - Keyboard and close-request input (input module)
//! - Frame rendering with a score overlay (render module)
//! - The interactive game loop (modes module)
//! - Exit status handling around the window (launch module)

pub mod game;
pub mod input;
pub mod launch;
pub mod modes;
pub mod render;
