//! Core game logic module for Snake
//!
//! This module contains all the game rules without any I/O or rendering
//! dependencies. A driver feeds it direction requests and ticks, and reads
//! back immutable snapshots.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod rules;
pub mod session;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{BoardSize, GameConfig, Speed};
pub use engine::{EpisodeEnd, EpisodeEndCause, GameEngine, StepResult};
pub use error::GameError;
pub use food::place_food;
pub use grid::{Cell, Grid};
pub use rules::{CollisionType, ScoreState};
pub use session::GameSession;
pub use snake::{Heading, Snake};
pub use state::{EpisodePhase, GameState, Snapshot};
