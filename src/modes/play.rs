use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, warn};

use crate::game::{GameConfig, GameSession};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::{Renderer, ThemeName};
use crate::settings::Settings;

/// Frame interval of the renderer, independent of the tick rate
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// Interactive keyboard-driven game in the terminal
pub struct PlayMode {
    session: GameSession,
    settings: Settings,
    settings_path: PathBuf,
    metrics: SessionMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(
        config: GameConfig,
        settings: Settings,
        settings_path: PathBuf,
        seed: Option<u64>,
    ) -> Result<Self> {
        let session = match seed {
            Some(seed) => GameSession::with_seed(config, settings.highscore, seed),
            None => GameSession::new(config, settings.highscore),
        }
        .context("Failed to start game session")?;

        Ok(Self {
            session,
            settings,
            settings_path,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;
        let cleanup = self.cleanup_terminal(&mut terminal);

        self.finish(result, cleanup)
    }

    /// Store settings no matter how the loop ended; the loop's own error
    /// takes precedence over anything that fails while shutting down
    fn finish(&mut self, result: Result<()>, cleanup: Result<()>) -> Result<()> {
        if let Err(err) = &cleanup {
            warn!(?err, "failed to restore terminal");
        }

        let saved = self.persist_settings();
        if let Err(err) = &saved {
            warn!(?err, "failed to store settings");
        }

        info!(
            highscore = self.settings.highscore,
            episodes = self.metrics.episodes_played,
            "game session finished"
        );

        result.and(cleanup).and(saved)
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let tick_interval = Duration::from_millis(self.session.config().tick_interval_ms);
        let mut tick_timer = interval(tick_interval);
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game()?;
                }

                // Render frame
                _ = render_timer.tick() => {
                    let snapshot = self.session.snapshot();
                    self.metrics.update(snapshot.body.len());
                    terminal.draw(|frame| {
                        self.renderer.render(
                            frame,
                            &snapshot,
                            self.session.grid(),
                            self.settings.theme,
                            &self.metrics,
                        );
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => self.session.submit_direction(direction),
                KeyAction::CycleTheme => self.cycle_theme(),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) -> Result<()> {
        let result = self.session.tick().context("Game tick failed")?;

        if let Some(end) = result.episode_end {
            self.metrics.on_episode_end(&end);
            if self.settings.record_highscore(end.highscore) {
                // Losing a save must not end the game
                if let Err(err) = self.settings.save(&self.settings_path) {
                    warn!(?err, "failed to store high score");
                }
            }
        }

        Ok(())
    }

    fn cycle_theme(&mut self) {
        self.settings.theme = self.settings.theme.next();
    }

    pub fn theme(&self) -> ThemeName {
        self.settings.theme
    }

    fn persist_settings(&mut self) -> Result<()> {
        self.settings.record_highscore(self.session.highscore());
        self.settings
            .save(&self.settings_path)
            .context("Failed to save settings on exit")
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
