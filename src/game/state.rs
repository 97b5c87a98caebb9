use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{grid::Cell, rules::ScoreState, snake::Snake};

/// Whether the current episode is still going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodePhase {
    Running,
    /// The episode ended this tick; a fresh one has already been spawned
    Dead,
}

/// Complete mutable game state, owned by the session driving it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub score: ScoreState,
    /// Ticks taken in the current episode
    pub steps: u32,
}

impl GameState {
    pub fn new(snake: Snake, food: Cell, score: ScoreState) -> Self {
        Self {
            snake,
            food,
            score,
            steps: 0,
        }
    }

    /// Check if a cell is occupied by the snake
    #[cfg(test)]
    pub(crate) fn is_occupied_by_snake(&self, cell: Cell) -> bool {
        self.snake.body().contains(&cell)
    }

    /// Set of every cell the snake covers
    pub fn occupied(&self) -> HashSet<Cell> {
        self.snake.body().iter().copied().collect()
    }

    /// Read-only view handed to renderers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            body: self.snake.body().to_vec(),
            food: self.food,
            score: self.score.current,
            highscore: self.score.highscore,
        }
    }
}

/// What a renderer needs after each tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snake cells, head first
    pub body: Vec<Cell>,
    pub food: Cell,
    pub score: u32,
    pub highscore: u32,
}

impl Snapshot {
    pub fn head(&self) -> Option<Cell> {
        self.body.first().copied()
    }
}
