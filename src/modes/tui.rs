use std::io::{stdout, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use log::{debug, info};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::game::{Direction, Game, GameConfig, TurnOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::render::TuiRenderer;
use crate::stats::SessionStats;

/// Interactive full-screen mode. Still turn-based: the game advances only
/// when a steering key arrives.
pub struct TuiMode {
    config: GameConfig,
    game: Game,
    renderer: TuiRenderer,
    input_handler: InputHandler,
    stats: SessionStats,
    alive: bool,
    should_quit: bool,
}

impl TuiMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let game = Game::from_config(&config)?;
        let renderer = TuiRenderer::new(config.glyphs);
        Ok(Self {
            config,
            game,
            renderer,
            input_handler: InputHandler::new(),
            stats: SessionStats::new(),
            alive: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(out);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor().context("failed to hide cursor")?;
        terminal.clear().context("failed to clear terminal")?;

        let result = self.run_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        // Final summary on the regular screen, as the line mode prints it.
        println!("GAME OVER!");
        println!("Score: {}", self.game.score);

        result
    }

    async fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let mut events = EventStream::new();

        self.draw(terminal)?;

        loop {
            tokio::select! {
                maybe_event = events.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }

            self.draw(terminal)?;
        }

        Ok(())
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let renderer = &self.renderer;
        let game = &self.game;
        let stats = &self.stats;
        let alive = self.alive;
        terminal
            .draw(|frame| renderer.render(frame, game, stats, alive))
            .context("failed to draw frame")?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    if self.alive {
                        self.step(direction);
                    }
                }
                KeyAction::Restart => self.restart()?,
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    fn step(&mut self, direction: Direction) {
        match self.game.turn(Some(direction)) {
            TurnOutcome::Died => {
                self.alive = false;
                self.stats.on_game_over(self.game.score);
                info!("game over, final score {}", self.game.score);
            }
            TurnOutcome::Moved { ate_apple } => {
                if ate_apple {
                    debug!("apple eaten, score now {}", self.game.score);
                }
            }
        }
    }

    fn restart(&mut self) -> Result<()> {
        self.game = Game::from_config(&self.config)?;
        self.alive = true;
        Ok(())
    }

    fn cleanup_terminal(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().context("failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("failed to leave alternate screen")?;
        terminal.show_cursor().context("failed to show cursor")?;
        Ok(())
    }
}
