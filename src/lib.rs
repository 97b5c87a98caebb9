//! Grid Snake - a tick-driven Snake game
//!
//! This library provides:
//! - Core game rules with no I/O (game module)
//! - Terminal rendering with color themes (render module)
//! - Keyboard mapping to steering intents (input module)
//! - Stored high score and preferences (settings module)
//! - The interactive terminal driver (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod settings;
