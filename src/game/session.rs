use std::collections::VecDeque;

use tracing::{debug, info};

use super::{
    action::{Action, Direction},
    config::GameConfig,
    engine::{GameEngine, StepResult},
    error::GameError,
    grid::Grid,
    state::{GameState, Snapshot},
};

/// Direction requests kept between two ticks; later ones are dropped
pub const MAX_PENDING_INPUTS: usize = 8;

/// Owns the engine and the state of one player's session
///
/// Input layers call [`submit_direction`](Self::submit_direction) as often as
/// they like; the driver calls [`tick`](Self::tick) once per interval and
/// renders the [`Snapshot`] it gets back.
pub struct GameSession {
    config: GameConfig,
    engine: GameEngine,
    state: GameState,
    pending: VecDeque<Direction>,
}

impl GameSession {
    /// Start a session, seeding the score board with a stored high score
    pub fn new(config: GameConfig, highscore: u32) -> Result<Self, GameError> {
        let engine = GameEngine::new(&config)?;
        Self::with_engine(config, engine, highscore)
    }

    /// Start a session with a reproducible random sequence
    pub fn with_seed(config: GameConfig, highscore: u32, seed: u64) -> Result<Self, GameError> {
        let engine = GameEngine::with_seed(&config, seed)?;
        Self::with_engine(config, engine, highscore)
    }

    fn with_engine(
        config: GameConfig,
        mut engine: GameEngine,
        highscore: u32,
    ) -> Result<Self, GameError> {
        let state = engine.reset(highscore)?;
        info!(
            width = config.width,
            height = config.height,
            scale = config.scale,
            highscore,
            "game session started"
        );

        Ok(Self {
            config,
            engine,
            state,
            pending: VecDeque::with_capacity(MAX_PENDING_INPUTS),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn highscore(&self) -> u32 {
        self.state.score.highscore
    }

    /// Queue a direction request for the next tick
    pub fn submit_direction(&mut self, direction: Direction) {
        if self.pending.len() >= MAX_PENDING_INPUTS {
            debug!(?direction, "input queue full, dropping request");
            return;
        }
        self.pending.push_back(direction);
    }

    /// Advance the game by one tick
    ///
    /// Pending requests are drained in arrival order and the first one the
    /// current heading accepts is applied; the rest are discarded.
    pub fn tick(&mut self) -> Result<StepResult, GameError> {
        let heading = self.state.snake.heading;
        let accepted = self
            .pending
            .drain(..)
            .find(|direction| heading.accepts(*direction));

        self.engine.step(&mut self.state, Action::from(accepted))
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, CollisionType, EpisodeEndCause, Heading, ScoreState, Snake};
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    const SCALE: i32 = 20;

    fn session() -> GameSession {
        GameSession::with_seed(GameConfig::small(), 0, 9).unwrap()
    }

    fn place(session: &mut GameSession, body: Vec<Cell>, heading: Direction, food: Cell) {
        let state = session.state_mut();
        state.snake = Snake::with_body(body, Heading::towards(heading, SCALE)).unwrap();
        state.food = food;
    }

    #[test]
    fn test_invalid_configuration_fails_fast() {
        let result = GameSession::new(GameConfig::new(110, 100), 0);
        assert!(matches!(
            result,
            Err(GameError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_first_accepted_request_wins() {
        let mut session = session();
        place(
            &mut session,
            vec![Cell::new(40, 40)],
            Direction::Right,
            Cell::new(0, 0),
        );

        session.submit_direction(Direction::Up);
        session.submit_direction(Direction::Down);
        session.tick().unwrap();

        assert_eq!(session.state().snake.heading.direction(), Some(Direction::Up));
        assert_eq!(session.state().snake.head(), Cell::new(40, 20));
    }

    #[test]
    fn test_rejected_request_does_not_use_the_tick() {
        let mut session = session();
        place(
            &mut session,
            vec![Cell::new(40, 40), Cell::new(20, 40)],
            Direction::Right,
            Cell::new(0, 0),
        );

        session.submit_direction(Direction::Left);
        session.submit_direction(Direction::Right);
        session.submit_direction(Direction::Down);
        session.tick().unwrap();

        assert_eq!(
            session.state().snake.heading.direction(),
            Some(Direction::Down)
        );
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut session = session();
        place(
            &mut session,
            vec![Cell::new(40, 40), Cell::new(20, 40)],
            Direction::Right,
            Cell::new(0, 0),
        );

        session.submit_direction(Direction::Left);
        session.tick().unwrap();

        let heading = session.state().snake.heading;
        assert_eq!((heading.dx, heading.dy), (SCALE, 0));
    }

    #[test]
    fn test_same_direction_is_idempotent() {
        let mut session = session();
        place(
            &mut session,
            vec![Cell::new(40, 40)],
            Direction::Down,
            Cell::new(0, 0),
        );

        session.submit_direction(Direction::Down);
        session.tick().unwrap();

        assert_eq!(
            session.state().snake.heading.direction(),
            Some(Direction::Down)
        );
        assert_eq!(session.state().snake.head(), Cell::new(40, 60));
    }

    #[test]
    fn test_queue_is_drained_each_tick() {
        let mut session = session();
        place(
            &mut session,
            vec![Cell::new(40, 40)],
            Direction::Right,
            Cell::new(0, 0),
        );

        session.submit_direction(Direction::Up);
        session.submit_direction(Direction::Left);
        session.tick().unwrap();
        // The leftover Left request must not leak into this tick
        session.tick().unwrap();

        assert_eq!(session.state().snake.heading.direction(), Some(Direction::Up));
        assert_eq!(session.state().snake.head(), Cell::new(40, 0));
    }

    #[test]
    fn test_queue_is_bounded() {
        let mut session = session();
        for _ in 0..MAX_PENDING_INPUTS * 2 {
            session.submit_direction(Direction::Up);
        }
        assert_eq!(session.pending.len(), MAX_PENDING_INPUTS);
    }

    #[test]
    fn test_growth_law() {
        let mut session = session();
        place(
            &mut session,
            vec![Cell::new(40, 40), Cell::new(40, 60)],
            Direction::Up,
            Cell::new(40, 20),
        );
        let len_before = session.state().snake.len();
        let score_before = session.state().score.current;

        let result = session.tick().unwrap();

        assert!(result.ate_food);
        assert_eq!(session.state().snake.len(), len_before + 1);
        assert_eq!(session.state().score.current, score_before + 1);
    }

    #[test]
    fn test_boundary_death_resets_episode() {
        let mut session = session();
        place(
            &mut session,
            vec![Cell::new(0, 0)],
            Direction::Left,
            Cell::new(60, 60),
        );

        let result = session.tick().unwrap();

        assert_eq!(
            result.episode_end.map(|end| end.cause),
            Some(EpisodeEndCause::Collision(CollisionType::Wall))
        );
        let snapshot = session.snapshot();
        assert_eq!(snapshot.body.len(), 1);
        assert!(session.state().snake.heading.is_stopped());
        assert_eq!(snapshot.score, 0);
    }

    #[test]
    fn test_highscore_survives_death() {
        let mut session = GameSession::with_seed(GameConfig::small(), 2, 4).unwrap();
        place(
            &mut session,
            vec![Cell::new(80, 0)],
            Direction::Right,
            Cell::new(0, 80),
        );
        session.state_mut().score = ScoreState {
            current: 5,
            highscore: 2,
        };

        let end = session.tick().unwrap().episode_end.unwrap();

        assert_eq!(end.highscore, 5);
        assert_eq!(session.highscore(), 5);
        assert_eq!(session.snapshot().highscore, 5);
    }

    #[test]
    fn test_random_play_keeps_invariants() {
        let mut session = GameSession::with_seed(GameConfig::new(120, 120), 0, 2024).unwrap();
        let mut rng = StdRng::seed_from_u64(77);
        let mut best = session.highscore();
        let mut episodes = 0;

        for _ in 0..5_000 {
            // Bias towards the food so the snake actually grows
            let snapshot = session.snapshot();
            let head = snapshot.body[0];
            let direction = if rng.gen_bool(0.2) {
                Direction::ALL[rng.gen_range(0..4)]
            } else if snapshot.food.x < head.x {
                Direction::Left
            } else if snapshot.food.x > head.x {
                Direction::Right
            } else if snapshot.food.y < head.y {
                Direction::Up
            } else {
                Direction::Down
            };
            session.submit_direction(direction);

            let result = session.tick().unwrap();
            if result.terminated() {
                episodes += 1;
            }

            let snapshot = session.snapshot();
            assert!(!snapshot.body.contains(&snapshot.food));
            assert!(snapshot.highscore >= best);
            best = snapshot.highscore;

            // Only the freshly grown tail may share a cell with its predecessor
            let settled = &snapshot.body[..snapshot.body.len() - 1];
            let distinct: HashSet<Cell> = settled.iter().copied().collect();
            assert_eq!(distinct.len(), settled.len());

            let grid = session.grid();
            assert!(snapshot.body.iter().all(|cell| grid.is_in_bounds(*cell)));
        }

        assert!(episodes > 0);
        assert!(best > 0);
    }
}
