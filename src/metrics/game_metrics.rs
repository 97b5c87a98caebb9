use std::time::{Duration, Instant};

use crate::game::EpisodeEnd;

/// Per-session statistics shown next to the board
pub struct SessionMetrics {
    pub episode_start: Instant,
    pub elapsed_time: Duration,
    pub episodes_played: u32,
    pub longest_snake: usize,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            episode_start: Instant::now(),
            elapsed_time: Duration::ZERO,
            episodes_played: 0,
            longest_snake: 1,
        }
    }

    /// Refresh the episode clock and fold in the current snake length
    pub fn update(&mut self, snake_length: usize) {
        self.elapsed_time = self.episode_start.elapsed();
        self.longest_snake = self.longest_snake.max(snake_length);
    }

    pub fn on_episode_end(&mut self, end: &EpisodeEnd) {
        self.episodes_played += 1;
        self.longest_snake = self.longest_snake.max(end.final_length);
        self.episode_start = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
