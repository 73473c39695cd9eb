use std::io::{self, Write};

use rand::Rng;

use crate::game::{BoardMatrix, Cell, Game, Glyphs};

/// Horizontal border: `+`, `width` dashes, `+`.
pub fn box_row(width: usize) -> String {
    format!("+{}+", "-".repeat(width))
}

/// Renders a stamped board as bordered text, one glyph per cell.
///
/// With default glyphs the output is the classic board:
///
/// ```text
/// +-----+
/// |OOX  |
/// |  *  |
/// +-----+
/// ```
pub struct TextRenderer {
    glyphs: Glyphs,
}

impl TextRenderer {
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    fn glyph(&self, cell: Option<Cell>) -> char {
        match cell {
            Some(Cell::Body) => self.glyphs.body,
            Some(Cell::Head) => self.glyphs.head,
            Some(Cell::Apple) => self.glyphs.apple,
            None => self.glyphs.empty,
        }
    }

    /// Format one frame: top border, `|`-framed rows, bottom border.
    pub fn frame_string(&self, matrix: &BoardMatrix) -> String {
        let width = matrix.first().map_or(0, |row| row.len());
        let mut out = String::new();
        out.push_str(&box_row(width));
        for row in matrix {
            out.push_str("\n|");
            for cell in row {
                out.push(self.glyph(*cell));
            }
            out.push('|');
        }
        out.push('\n');
        out.push_str(&box_row(width));
        out
    }

    /// Write the current game frame to the sink, newline-terminated.
    pub fn render<R: Rng, W: Write>(&self, game: &Game<R>, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.frame_string(&game.frame()))
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(Glyphs::default())
    }
}
