use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{Cell, Game, Glyphs};
use crate::stats::SessionStats;

/// Draws the game into a ratatui frame: stats header, board, controls
/// footer, and a game-over panel once the snake has died.
pub struct TuiRenderer {
    glyphs: Glyphs,
}

impl TuiRenderer {
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    pub fn render<R: Rng>(
        &self,
        frame: &mut Frame,
        game: &Game<R>,
        stats: &SessionStats,
        alive: bool,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.area());

        frame.render_widget(self.header(game, stats), chunks[0]);

        let board_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if alive {
            frame.render_widget(self.board(game), board_area);
        } else {
            frame.render_widget(self.game_over(game), board_area);
        }

        frame.render_widget(self.controls(chunks[2]), chunks[2]);
    }

    fn cell_span(&self, cell: Option<Cell>) -> Span<'static> {
        match cell {
            Some(Cell::Head) => Span::styled(
                format!("{} ", self.glyphs.head),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Some(Cell::Body) => Span::styled(
                format!("{} ", self.glyphs.body),
                Style::default().fg(Color::Green),
            ),
            Some(Cell::Apple) => Span::styled(
                format!("{} ", self.glyphs.apple),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(". ", Style::default().fg(Color::DarkGray)),
        }
    }

    fn board<R: Rng>(&self, game: &Game<R>) -> Paragraph<'static> {
        let lines: Vec<Line> = game
            .frame()
            .into_iter()
            .map(|row| Line::from(row.into_iter().map(|cell| self.cell_span(cell)).collect::<Vec<_>>()))
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn header<R: Rng>(&self, game: &Game<R>, stats: &SessionStats) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                game.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Games: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.games_played.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.format_elapsed(), Style::default().fg(Color::White)),
        ]);

        Paragraph::new(vec![line]).alignment(Alignment::Center)
    }

    fn game_over<R: Rng>(&self, game: &Game<R>) -> Paragraph<'static> {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    game.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn controls(&self, _area: Rect) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("u/d/l/r", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ]);

        Paragraph::new(vec![line]).alignment(Alignment::Center)
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new(Glyphs::default())
    }
}
