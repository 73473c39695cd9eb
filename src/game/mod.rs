//! Core game logic: board, snake, apple and the per-turn update rules.
//!
//! Nothing in here touches the terminal; the modes drive a [`Game`] and the
//! render module draws what [`Game::frame`] reports.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

pub use config::{GameConfig, Glyphs};
pub use direction::Direction;
pub use engine::{BoardMatrix, Cell, Game, GameError, TurnOutcome};
pub use state::{Apple, Position, Snake};
