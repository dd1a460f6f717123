//! Stateless UI rendering.
//!
//! Everything drawn comes from a [`Snapshot`] plus the board cursor.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::games::tictactoe::{Board, Mark, Position, Square};
use crate::orchestrator::{GameMode, Snapshot};

const HELP: &str =
    "arrows move | enter/space or 1-9 play | [ ] browse history | home start | q quit";

/// Draws the mode menu or the game, depending on the snapshot.
pub fn draw(frame: &mut Frame, snapshot: &Snapshot, cursor: Position) {
    if *snapshot.mode() == GameMode::Unselected {
        draw_menu(frame);
    } else {
        draw_game(frame, snapshot, cursor);
    }
}

fn draw_menu(frame: &mut Frame) {
    let area = center_rect(frame.area(), 30, 9);
    let text = vec![
        Line::from(Span::styled(
            "Choose Game Mode",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("1. Play vs Player"),
        Line::from("2. Play vs AI"),
        Line::from(""),
        Line::from(Span::styled("q to quit", Style::default().fg(Color::DarkGray))),
    ];
    let menu = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic-Tac-Toe"));
    frame.render_widget(menu, area);
}

fn draw_game(frame: &mut Frame, snapshot: &Snapshot, cursor: Position) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(14),   // Body
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(format!("Tic-Tac-Toe - {}", snapshot.mode()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(28), // Info panel
            Constraint::Min(40),    // Board and status
            Constraint::Length(26), // Move list
        ])
        .split(chunks[1]);

    draw_info_panel(frame, body[0], snapshot.image_url());
    draw_board_column(frame, body[1], snapshot, cursor);
    draw_move_list(frame, body[2], snapshot);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}

fn draw_info_panel(frame: &mut Frame, area: Rect, image_url: &str) {
    let info = Paragraph::new(vec![Line::from("Image:"), Line::from(image_url.to_string())])
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Info"));
    frame.render_widget(info, area);
}

fn draw_board_column(frame: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let mut status = snapshot.status().clone();
    if *snapshot.opponent_pending() {
        status.push_str(" (opponent thinking...)");
    }
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, rows[0]);

    draw_board(frame, center_rect(rows[1], 40, 5), snapshot.board(), cursor);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], board, cursor, row);
        if row < 2 {
            let sep = Paragraph::new("────────────┼─────────────┼────────────")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], board, cursor, pos);
        }
        if col < 2 {
            let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, pos: Position) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_move_list(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let current = *snapshot.current_index();
    let items: Vec<ListItem> = snapshot
        .move_labels()
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let style = if index == current {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(format!("{index}. {label}")).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Moves"));
    frame.render_widget(list, area);
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
