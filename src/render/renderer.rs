use ratatui::{
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{Coordinate, Direction, EndReason, SessionState, Snapshot};

/// What occupies a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Head, pointing where the snake is going
    Head(Direction),
    Body,
    Food,
    Empty,
}

impl Cell {
    pub fn of(snapshot: &Snapshot, pos: Coordinate) -> Self {
        if snapshot.body.first() == Some(&pos) {
            Cell::Head(snapshot.direction)
        } else if snapshot.body.contains(&pos) {
            Cell::Body
        } else if snapshot.food == Some(pos) {
            Cell::Food
        } else {
            Cell::Empty
        }
    }

    fn span(self) -> Span<'static> {
        match self {
            Cell::Head(direction) => Span::styled(
                match direction {
                    Direction::Up => "▲ ",
                    Direction::Down => "▼ ",
                    Direction::Left => "◀ ",
                    Direction::Right => "▶ ",
                },
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
            Cell::Food => Span::styled(
                "O ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Cell::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
        }
    }
}

/// Draws session snapshots into a terminal frame
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot), chunks[0]);

        match snapshot.state {
            SessionState::Running => frame.render_widget(self.render_grid(snapshot), chunks[1]),
            SessionState::GameOver(reason) => {
                frame.render_widget(self.render_game_over(snapshot, reason), chunks[1])
            }
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, snapshot: &Snapshot) -> Paragraph<'static> {
        let lines: Vec<Line> = (0..snapshot.grid_height)
            .map(|y| {
                let spans: Vec<Span> = (0..snapshot.grid_width)
                    .map(|x| Cell::of(snapshot, Coordinate::new(x, y)).span())
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, snapshot: &Snapshot) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.body.len().to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, snapshot: &Snapshot, reason: EndReason) -> Paragraph<'static> {
        let (title, color) = match reason {
            EndReason::BoardFull => ("BOARD FULL - YOU WIN", Color::Green),
            EndReason::Wall | EndReason::SelfCollision => ("GAME OVER", Color::Red),
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
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

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn snapshot(state: SessionState) -> Snapshot {
        Snapshot {
            body: vec![Coordinate::new(1, 1), Coordinate::new(0, 1)],
            food: Some(Coordinate::new(3, 0)),
            score: 30,
            state,
            direction: Direction::Right,
            grid_width: 4,
            grid_height: 3,
        }
    }

    fn draw(snapshot: &Snapshot) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, snapshot))
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_cell_kinds() {
        let snapshot = snapshot(SessionState::Running);
        assert_eq!(
            Cell::of(&snapshot, Coordinate::new(1, 1)),
            Cell::Head(Direction::Right)
        );
        assert_eq!(Cell::of(&snapshot, Coordinate::new(0, 1)), Cell::Body);
        assert_eq!(Cell::of(&snapshot, Coordinate::new(3, 0)), Cell::Food);
        assert_eq!(Cell::of(&snapshot, Coordinate::new(2, 2)), Cell::Empty);
    }

    #[test]
    fn test_running_frame_shows_score_and_grid() {
        let screen = draw(&snapshot(SessionState::Running));
        assert!(screen.contains("Score: 30"));
        assert!(screen.contains("Snake"));
        assert!(!screen.contains("GAME OVER"));
    }

    #[test]
    fn test_head_glyph_follows_heading() {
        let mut snapshot = snapshot(SessionState::Running);
        assert!(draw(&snapshot).contains('▶'));

        snapshot.direction = Direction::Down;
        let screen = draw(&snapshot);
        assert!(screen.contains('▼'));
        assert!(!screen.contains('▶'));
    }

    #[test]
    fn test_game_over_frames() {
        let screen = draw(&snapshot(SessionState::GameOver(EndReason::Wall)));
        assert!(screen.contains("GAME OVER"));
        assert!(screen.contains("Final Score: 30"));

        let screen = draw(&snapshot(SessionState::GameOver(EndReason::BoardFull)));
        assert!(screen.contains("BOARD FULL - YOU WIN"));
    }
}
