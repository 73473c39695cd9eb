use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::game::{Direction, Game, GameConfig, TurnOutcome};
use crate::render::TextRenderer;

/// The line-based control loop: print the board, prompt for a direction
/// token, apply one turn, stop on self-collision.
///
/// Turns happen every iteration; an unrecognized token just leaves the
/// heading unchanged.
pub struct PlainMode {
    game: Game,
    renderer: TextRenderer,
}

/// A steering token is a single `u`/`d`/`l`/`r` on its own line.
fn parse_token(line: &str) -> Option<Direction> {
    let mut chars = line.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(token), None) => Direction::from_token(token),
        _ => None,
    }
}

impl PlainMode {
    pub fn new(config: &GameConfig) -> Result<Self> {
        let game = Game::from_config(config)?;
        Ok(Self {
            game,
            renderer: TextRenderer::new(config.glyphs),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_loop(&mut stdin.lock(), &mut stdout.lock())
    }

    fn run_loop<I: BufRead, W: Write>(&mut self, input: &mut I, out: &mut W) -> Result<()> {
        loop {
            self.renderer
                .render(&self.game, out)
                .context("failed to write frame")?;
            write!(out, "Direction: ").context("failed to write prompt")?;
            out.flush().context("failed to flush output")?;

            let mut line = String::new();
            let bytes = input
                .read_line(&mut line)
                .context("failed to read direction")?;
            if bytes == 0 {
                // Input closed; end the session like a quit.
                break;
            }

            match self.game.turn(parse_token(&line)) {
                TurnOutcome::Died => break,
                TurnOutcome::Moved { ate_apple } => {
                    if ate_apple {
                        debug!("apple eaten, score now {}", self.game.score);
                    }
                }
            }
        }

        writeln!(out, "GAME OVER!").context("failed to write summary")?;
        writeln!(out, "Score: {}", self.game.score).context("failed to write summary")?;
        info!("game over, final score {}", self.game.score);
        Ok(())
    }
}
