use rand::rngs::ThreadRng;
use rand::Rng;
use thiserror::Error;

use super::config::GameConfig;
use super::direction::Direction;
use super::state::{Apple, Position, Snake};

/// Construction failures. Everything else that can go wrong mid-game is a
/// normal game rule, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("board dimensions must be positive, got {height}x{width}")]
    InvalidDimensions { height: i32, width: i32 },
}

/// What a cell holds when the board is stamped for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Body,
    Head,
    Apple,
}

/// One rendered board: `height` rows of `width` cells, `None` for empty.
pub type BoardMatrix = Vec<Vec<Option<Cell>>>;

/// Result of one control-loop turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The snake moved; `ate_apple` reports whether it grew and scored.
    Moved { ate_apple: bool },
    /// The next head cell was occupied by the body. The game state is left
    /// untouched: no step applied, no score change.
    Died,
}

/// The whole game: board dimensions, one snake, one apple, the score, and
/// the random source used for apple respawns.
pub struct Game<R: Rng = ThreadRng> {
    pub height: i32,
    pub width: i32,
    pub snake: Snake,
    pub apple: Apple,
    pub score: u32,
    rng: R,
}

impl Game<ThreadRng> {
    /// Build a game on a `height` x `width` board with the given initial
    /// snake, using thread-local randomness for apple placement.
    ///
    /// `body` is ordered tail to head and must be non-empty.
    pub fn new(
        height: i32,
        width: i32,
        body: Vec<Position>,
        direction: Direction,
    ) -> Result<Self, GameError> {
        Game::with_rng(height, width, body, direction, rand::thread_rng())
    }

    /// Build a game from a [`GameConfig`].
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        Game::new(
            config.height,
            config.width,
            config.initial_body(),
            config.initial_direction(),
        )
    }
}

impl<R: Rng> Game<R> {
    /// Like [`Game::new`] but with an injected random source, so tests can
    /// pin apple placement.
    pub fn with_rng(
        height: i32,
        width: i32,
        body: Vec<Position>,
        direction: Direction,
        mut rng: R,
    ) -> Result<Self, GameError> {
        if height <= 0 || width <= 0 {
            return Err(GameError::InvalidDimensions { height, width });
        }
        let apple = Apple::new(height, width, &mut rng);
        Ok(Self {
            height,
            width,
            snake: Snake::new(body, direction),
            apple,
            score: 0,
            rng,
        })
    }

    /// A fresh `height` x `width` grid of empty cells. Rebuilt per call, not
    /// kept as game state.
    pub fn board_matrix(&self) -> BoardMatrix {
        vec![vec![None; self.width as usize]; self.height as usize]
    }

    /// Wrap a proposed position onto the torus.
    ///
    /// Four independent checks, applied in sequence. Movement is one cell per
    /// turn, so only off-by-one overshoot needs handling; there is
    /// deliberately no general modulo wrap.
    pub fn wrap_if_out_of_bounds(&self, step: Position) -> Position {
        let mut step = step;
        if step.row == self.height {
            step.row = 0;
        }
        if step.row < 0 {
            step.row = self.height - 1;
        }
        if step.col == self.width {
            step.col = 0;
        }
        if step.col < 0 {
            step.col = self.width - 1;
        }
        step
    }

    /// Play one turn: optionally steer, advance the head one cell with
    /// wrapping, and either die on self-collision or branch between the
    /// grow-and-score path (apple hit) and the plain shift.
    pub fn turn(&mut self, steer: Option<Direction>) -> TurnOutcome {
        if let Some(direction) = steer {
            self.snake.set_direction(direction);
        }

        let next = self.wrap_if_out_of_bounds(self.snake.next_step());

        // Collision is checked before the step lands, against every segment
        // except the tail that is about to vacate.
        if self.snake.would_collide(next) {
            return TurnOutcome::Died;
        }

        if next == self.apple.position {
            self.score += 1;
            self.apple
                .set_random_position(self.height, self.width, &mut self.rng);
            self.snake.take_step(next, true);
            TurnOutcome::Moved { ate_apple: true }
        } else {
            self.snake.take_step(next, false);
            TurnOutcome::Moved { ate_apple: false }
        }
    }

    /// Stamp the board for rendering: body segments first, then the head
    /// over its body cell, then the apple. The stamping order is part of the
    /// presentation contract.
    pub fn frame(&self) -> BoardMatrix {
        let mut matrix = self.board_matrix();

        for segment in &self.snake.body {
            matrix[segment.row as usize][segment.col as usize] = Some(Cell::Body);
        }

        let head = self.snake.head();
        matrix[head.row as usize][head.col as usize] = Some(Cell::Head);

        let apple = self.apple.position;
        matrix[apple.row as usize][apple.col as usize] = Some(Cell::Apple);

        matrix
    }
}
