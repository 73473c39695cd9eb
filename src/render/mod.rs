//! Board presentation: a plain-text renderer that reproduces the classic
//! bordered board, and a ratatui renderer for interactive play.

pub mod text;
pub mod tui;

pub use text::TextRenderer;
pub use tui::TuiRenderer;
