//! Terminal Snake on a toroidal grid.
//!
//! The `game` module holds all the rules with no I/O attached; `render`,
//! `input` and `modes` are the terminal glue around it.

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
pub mod stats;
