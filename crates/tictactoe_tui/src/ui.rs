//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Cell, GameState, Position, rules};

use crate::app::App;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

/// Screen regions for one frame.
struct Screen {
    title: Rect,
    header: Rect,
    board: Rect,
    footer: Rect,
}

fn screen(area: Rect) -> Screen {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Turn indicator
            Constraint::Min(CELL_HEIGHT * 3),
            Constraint::Length(4), // Result and help
        ])
        .split(area);

    Screen {
        title: chunks[0],
        header: chunks[1],
        board: center_rect(chunks[2], CELL_WIDTH * 3, CELL_HEIGHT * 3),
        footer: chunks[3],
    }
}

/// Rectangles of the nine cells, row-major, for a frame of size `area`.
pub fn cell_rects(area: Rect) -> [Rect; 9] {
    let board = screen(area).board;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(board);

    let mut cells = [Rect::default(); 9];
    for (r, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row);
        for (c, col) in cols.iter().enumerate() {
            cells[r * 3 + c] = *col;
        }
    }
    cells
}

/// Finds the cell under a terminal coordinate.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let point = ratatui::layout::Position::new(column, row);
    cell_rects(area)
        .iter()
        .position(|rect| rect.contains(point))
        .and_then(Position::from_index)
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let screen = screen(area);
    let state = app.state();

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, screen.title);

    draw_header(frame, screen.header, state);

    let winning = rules::winning_line(state.board()).map(|(line, _)| line);
    for (pos, rect) in Position::ALL.into_iter().zip(cell_rects(area)) {
        let highlight = winning.is_some_and(|line| line.contains(&pos));
        draw_cell(frame, rect, state.board().get(pos), pos == app.cursor(), highlight);
    }

    draw_footer(frame, screen.footer, state);
}

fn draw_header(frame: &mut Frame, area: Rect, state: &GameState) {
    let text = if state.outcome().is_over() {
        Line::from("Game Over")
    } else {
        let mark = Cell::from(state.current_player());
        Line::from(vec![
            Span::raw("Player Turn: "),
            Span::styled(mark.symbol().to_string(), mark_style(mark)),
        ])
    };

    let header = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, selected: bool, winning: bool) {
    let symbol = match cell {
        Cell::Empty => " ",
        Cell::X => "X",
        Cell::O => "O",
    };

    let mut style = mark_style(cell);
    if winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }

    let border = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, state: &GameState) {
    let lines = if state.outcome().is_over() {
        vec![
            Line::from(Span::styled(
                state.outcome().to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from("[n] New Game   [q] Quit"),
        ]
    } else {
        vec![
            Line::from("Arrows/hjkl move, Enter/Space place, 1-9 pick a cell"),
            Line::from("[n] New Game   [q] Quit"),
        ]
    };

    let footer = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn mark_style(cell: Cell) -> Style {
    match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Cell::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
