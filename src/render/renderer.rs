use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::theme::{Theme, ThemeName};
use crate::game::{Grid, Snapshot};
use crate::metrics::SessionMetrics;

/// What occupies a cell on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Empty,
    Head,
    Body,
    Food,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        snapshot: &Snapshot,
        grid: &Grid,
        theme: ThemeName,
        metrics: &SessionMetrics,
    ) {
        let palette = theme.theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot, metrics, &palette), chunks[0]);
        frame.render_widget(self.render_grid(snapshot, grid, theme, &palette), chunks[1]);
        frame.render_widget(self.render_controls(&palette), chunks[2]);
    }

    fn render_grid(
        &self,
        snapshot: &Snapshot,
        grid: &Grid,
        theme: ThemeName,
        palette: &Theme,
    ) -> Paragraph<'_> {
        let tiles = layout_tiles(snapshot, grid);
        let background = Style::default().bg(palette.background);

        let lines: Vec<Line> = tiles
            .iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|tile| match tile {
                        Tile::Head => Span::styled(
                            "██",
                            background.fg(palette.snake).add_modifier(Modifier::BOLD),
                        ),
                        Tile::Body => Span::styled("▓▓", background.fg(palette.snake)),
                        Tile::Food => Span::styled("██", background.fg(palette.food)),
                        Tile::Empty => Span::styled("  ", background),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(palette.border_color()))
                    .title(format!(" Snake · {} ", theme.label())),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        snapshot: &Snapshot,
        metrics: &SessionMetrics,
        palette: &Theme,
    ) -> Paragraph<'_> {
        let label = Style::default().fg(palette.food);
        let value = Style::default().fg(palette.text).add_modifier(Modifier::BOLD);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(snapshot.score.to_string(), value),
            Span::raw("    "),
            Span::styled("Highscore: ", label),
            Span::styled(snapshot.highscore.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
            Span::raw("    "),
            Span::styled("Games: ", label),
            Span::styled(metrics.episodes_played.to_string(), value),
            Span::raw("    "),
            Span::styled("Longest: ", label),
            Span::styled(metrics.longest_snake.to_string(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self, palette: &Theme) -> Paragraph<'_> {
        let key = Style::default().fg(palette.snake).add_modifier(Modifier::BOLD);

        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", key),
            Span::raw(" or "),
            Span::styled("WASD", key),
            Span::raw(" to move | "),
            Span::styled("T", key),
            Span::raw(" theme | "),
            Span::styled("Q", key),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows of tiles, one per grid cell
fn layout_tiles(snapshot: &Snapshot, grid: &Grid) -> Vec<Vec<Tile>> {
    let mut tiles = vec![vec![Tile::Empty; grid.columns()]; grid.rows()];

    if let Some((column, row)) = grid.index_of(snapshot.food) {
        tiles[row][column] = Tile::Food;
    }

    for cell in snapshot.body.iter().skip(1) {
        if let Some((column, row)) = grid.index_of(*cell) {
            tiles[row][column] = Tile::Body;
        }
    }

    if let Some((column, row)) = snapshot.head().and_then(|head| grid.index_of(head)) {
        tiles[row][column] = Tile::Head;
    }

    tiles
}
