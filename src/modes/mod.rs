pub mod plain;
pub mod tui;

pub use plain::PlainMode;
pub use tui::TuiMode;
