use std::collections::HashSet;

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, warn};

use super::{
    action::Action,
    config::GameConfig,
    error::GameError,
    food::place_food,
    grid::{Cell, Grid},
    rules::{CollisionType, ScoreState, check_boundary, check_consumption, check_self_collision},
    snake::Snake,
    state::GameState,
};

/// Why an episode ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeEndCause {
    Collision(CollisionType),
    /// The snake filled every cell, leaving no room for food
    BoardCleared,
}

/// Final figures of an episode, emitted on the tick it ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeEnd {
    pub cause: EpisodeEndCause,
    pub final_score: u32,
    pub final_length: usize,
    /// High score after folding in `final_score`
    pub highscore: u32,
    /// Whether `final_score` raised the high score
    pub new_highscore: bool,
}

/// Result of a game step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Set when the episode ended during this step
    pub episode_end: Option<EpisodeEnd>,
}

impl StepResult {
    fn running(ate_food: bool) -> Self {
        Self {
            ate_food,
            episode_end: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> super::EpisodePhase {
        match self.episode_end {
            Some(_) => super::EpisodePhase::Dead,
            None => super::EpisodePhase::Running,
        }
    }

    pub fn terminated(&self) -> bool {
        self.episode_end.is_some()
    }
}

/// The game engine that handles all game rules
pub struct GameEngine {
    grid: Grid,
    rng: StdRng,
}

impl GameEngine {
    /// Create an engine with an entropy-seeded generator
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        Ok(Self {
            grid: Grid::from_config(config)?,
            rng: StdRng::from_entropy(),
        })
    }

    /// Create an engine whose spawns and food placement are reproducible
    pub fn with_seed(config: &GameConfig, seed: u64) -> Result<Self, GameError> {
        Ok(Self {
            grid: Grid::from_config(config)?,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Start a new session carrying over a stored high score
    pub fn reset(&mut self, highscore: u32) -> Result<GameState, GameError> {
        let (snake, food) = self.spawn()?;
        Ok(GameState::new(snake, food, ScoreState::new(highscore)))
    }

    /// Execute one tick of the game
    ///
    /// Collisions and a full board end the episode and respawn in place; they
    /// are reported through [`StepResult::episode_end`], not as errors.
    pub fn step(
        &mut self,
        state: &mut GameState,
        action: Action,
    ) -> Result<StepResult, GameError> {
        if let Action::Move(direction) = action {
            state.snake.heading.request(direction, self.grid.scale());
        }

        let result = self.advance_episode(state)?;
        state.snake.heading.end_tick();
        Ok(result)
    }

    fn advance_episode(&mut self, state: &mut GameState) -> Result<StepResult, GameError> {
        let candidate = state.snake.candidate_head();
        state.steps += 1;

        if check_boundary(candidate, &self.grid) {
            let end = self.end_episode(state, EpisodeEndCause::Collision(CollisionType::Wall))?;
            return Ok(StepResult {
                ate_food: false,
                episode_end: Some(end),
            });
        }

        // Food is tested against the candidate, before the body shifts
        let ate_food = check_consumption(candidate, state.food);

        state.snake.advance(candidate);

        if check_self_collision(state.snake.head(), state.snake.trailing()) {
            let end = self.end_episode(
                state,
                EpisodeEndCause::Collision(CollisionType::SelfCollision),
            )?;
            return Ok(StepResult {
                ate_food: false,
                episode_end: Some(end),
            });
        }

        if !ate_food {
            return Ok(StepResult::running(false));
        }

        state.snake.grow();
        state.score.record_consumption();

        match place_food(&state.occupied(), &self.grid, &mut self.rng) {
            Ok(food) => {
                state.food = food;
                Ok(StepResult::running(true))
            }
            Err(GameError::FoodPlacementExhausted { cells }) => {
                warn!(cells, score = state.score.current, "board cleared");
                let end = self.end_episode(state, EpisodeEndCause::BoardCleared)?;
                Ok(StepResult {
                    ate_food: true,
                    episode_end: Some(end),
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Fold the score into the high score and respawn
    fn end_episode(
        &mut self,
        state: &mut GameState,
        cause: EpisodeEndCause,
    ) -> Result<EpisodeEnd, GameError> {
        let final_score = state.score.current;
        let final_length = state.snake.len();
        let previous_best = state.score.highscore;
        let highscore = state.score.finalize_episode();
        let new_highscore = highscore > previous_best;

        debug!(?cause, final_score, final_length, steps = state.steps, "episode ended");
        if new_highscore {
            info!(highscore, previous = previous_best, "new high score");
        }

        let (snake, food) = self.spawn()?;
        state.snake = snake;
        state.food = food;
        state.steps = 0;

        Ok(EpisodeEnd {
            cause,
            final_score,
            final_length,
            highscore,
            new_highscore,
        })
    }

    /// Single random cell with zero heading, plus food off the snake
    fn spawn(&mut self) -> Result<(Snake, Cell), GameError> {
        let snake = Snake::new(self.grid.random_cell(&mut self.rng));
        let occupied: HashSet<Cell> = [snake.head()].into_iter().collect();
        let food = place_food(&occupied, &self.grid, &mut self.rng)?;
        Ok((snake, food))
    }
}
