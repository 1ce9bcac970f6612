use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, GameSession, SessionState, TickResult};
use crate::input::{InputHandler, InputSource, KeyAction, KeyboardInput};
use crate::render::Renderer;

/// Interactive game played from the keyboard in a terminal
pub struct HumanMode {
    session: GameSession,
    renderer: Renderer,
    input_handler: InputHandler,
    keyboard: KeyboardInput,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let session = match seed {
            Some(seed) => GameSession::with_seed(config, seed),
            None => GameSession::new(config),
        };

        Self {
            session,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            keyboard: KeyboardInput::new(),
            should_quit: false,
        }
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

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.session.config().tick_interval());

        // Render at 30 FPS
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = tick_timer.tick() => {
                    self.on_tick();
                }

                _ = render_timer.tick() => {
                    let snapshot = self.session.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.keyboard.push(KeyAction::Quit);
                }
            }

            if self.should_quit {
                info!("quit requested with score {}", self.session.score());
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

            let action = self.input_handler.handle_key_event(key);
            self.keyboard.push(action);
        }
    }

    /// Run one tick: advance the session, or wait for the player to
    /// acknowledge a finished round
    fn on_tick(&mut self) -> Option<TickResult> {
        let poll = self.keyboard.poll();
        if poll.quit {
            self.should_quit = true;
            return None;
        }

        if self.keyboard.take_restart() {
            self.restart();
            return None;
        }

        match self.session.state() {
            SessionState::GameOver(_) => {
                if self.keyboard.take_acknowledgement() {
                    self.restart();
                }
                None
            }
            SessionState::Running => {
                // Enter only means something on the game-over panel
                self.keyboard.take_acknowledgement();

                let direction = poll
                    .direction
                    .unwrap_or_else(|| self.session.snake().direction());
                Some(self.session.advance(direction))
            }
        }
    }

    fn restart(&mut self) {
        self.session.reset();
        self.keyboard.clear();
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
