//! Collision checks and score bookkeeping

use serde::{Deserialize, Serialize};

use super::grid::{Cell, Grid};

/// What ended an episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionType {
    /// Snake left the grid
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// True when the head is about to land on the food
pub fn check_consumption(head: Cell, food: Cell) -> bool {
    head == food
}

/// True when `cell` is outside the grid
pub fn check_boundary(cell: Cell, grid: &Grid) -> bool {
    !grid.is_in_bounds(cell)
}

/// True when `head` overlaps any of the trailing segments
pub fn check_self_collision(head: Cell, trailing: &[Cell]) -> bool {
    trailing.contains(&head)
}

/// Current and best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreState {
    pub current: u32,
    pub highscore: u32,
}

impl ScoreState {
    /// Start a session with a previously stored high score
    pub fn new(highscore: u32) -> Self {
        Self {
            current: 0,
            highscore,
        }
    }

    pub fn record_consumption(&mut self) {
        self.current = self.current.saturating_add(1);
    }

    /// Close the episode: keep the best score and reset the current one.
    /// Returns the high score after the update.
    pub fn finalize_episode(&mut self) -> u32 {
        self.highscore = self.highscore.max(self.current);
        self.current = 0;
        self.highscore
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    #[test]
    fn test_consumption() {
        assert!(check_consumption(Cell::new(20, 20), Cell::new(20, 20)));
        assert!(!check_consumption(Cell::new(20, 20), Cell::new(40, 20)));
    }

    #[test]
    fn test_boundary() {
        let grid = Grid::from_config(&GameConfig::small()).unwrap();
        assert!(!check_boundary(Cell::new(0, 0), &grid));
        assert!(!check_boundary(Cell::new(80, 80), &grid));
        assert!(check_boundary(Cell::new(-20, 0), &grid));
        assert!(check_boundary(Cell::new(100, 0), &grid));
        assert!(check_boundary(Cell::new(0, 100), &grid));
    }

    #[test]
    fn test_self_collision() {
        let trailing = [Cell::new(20, 0), Cell::new(20, 20)];
        assert!(check_self_collision(Cell::new(20, 20), &trailing));
        assert!(!check_self_collision(Cell::new(0, 0), &trailing));
        assert!(!check_self_collision(Cell::new(0, 0), &[]));
    }

    #[test]
    fn test_high_score_tracking() {
        let mut score = ScoreState::new(3);

        for _ in 0..5 {
            score.record_consumption();
        }
        assert_eq!(score.current, 5);
        assert_eq!(score.finalize_episode(), 5);
        assert_eq!(score.current, 0);

        score.record_consumption();
        assert_eq!(score.finalize_episode(), 5); // Should not decrease
        assert_eq!(score.highscore, 5);
    }
}
