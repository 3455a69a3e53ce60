//! Stateless UI rendering and hit testing.
//!
//! Rendering and mouse hit testing share the same layout functions, so a
//! click lands on exactly the cell that was drawn under it.

use morpion_engine::{Color as PlayerColor, Coord, Game, Move};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app::{App, MenuAction};

/// Width of one cell, borders included.
pub const CELL_WIDTH: u16 = 7;
/// Height of one cell, borders included.
pub const CELL_HEIGHT: u16 = 3;

const HELP: &str = "Click a cell or use arrows + Enter | N: play again | Q: quit";

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Menu bar.
    pub menu: Rect,
    /// Status display.
    pub status: Rect,
    /// Area the grid is centered in.
    pub board: Rect,
    /// Key help line.
    pub help: Rect,
}

/// What a screen position points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board cell.
    Cell(Coord),
    /// A menu entry.
    Menu(MenuAction),
}

/// Splits the screen into its regions.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Menu
            Constraint::Length(3), // Status
            Constraint::Min(0),    // Board
            Constraint::Length(1), // Help
        ])
        .split(area);

    ScreenLayout {
        menu: chunks[0],
        status: chunks[1],
        board: chunks[2],
        help: chunks[3],
    }
}

/// Places each menu entry in the menu bar.
pub fn menu_rects(menu: Rect) -> Vec<(MenuAction, Rect)> {
    let mut constraints: Vec<Constraint> = Vec::new();
    for action in MenuAction::ALL {
        constraints.push(Constraint::Length(action.label().len() as u16));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(menu);

    MenuAction::ALL
        .iter()
        .enumerate()
        .map(|(i, action)| (*action, chunks[i * 2]))
        .collect()
}

/// Computes the rectangle of every cell, indexed `[row][col]`.
///
/// Cells that do not fit in `board` are clipped.
pub fn cell_rects(board: Rect, size: usize) -> Vec<Vec<Rect>> {
    let cells = u16::try_from(size).unwrap_or(u16::MAX);
    let grid = center_rect(
        board,
        cells.saturating_mul(CELL_WIDTH),
        cells.saturating_mul(CELL_HEIGHT),
    );

    (0..cells)
        .map(|row| {
            (0..cells)
                .map(|col| {
                    Rect::new(
                        grid.x.saturating_add(col.saturating_mul(CELL_WIDTH)),
                        grid.y.saturating_add(row.saturating_mul(CELL_HEIGHT)),
                        CELL_WIDTH,
                        CELL_HEIGHT,
                    )
                    .intersection(board)
                })
                .collect()
        })
        .collect()
}

/// Finds what lies under the terminal position (`column`, `row`).
pub fn hit_test(area: Rect, size: usize, column: u16, row: u16) -> Option<Hit> {
    let layout = screen_layout(area);
    let position = Position::new(column, row);

    if let Some((action, _)) = menu_rects(layout.menu)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
    {
        return Some(Hit::Menu(action));
    }

    cell_rects(layout.board, size)
        .iter()
        .enumerate()
        .find_map(|(r, cells)| {
            cells
                .iter()
                .position(|rect| rect.contains(position))
                .map(|c| Hit::Cell(Coord::new(r, c)))
        })
}

/// Maps a player color to a terminal color.
///
/// Black maps to the terminal's default foreground so it stays readable on
/// dark themes.
pub fn to_color(color: PlayerColor) -> Color {
    match color {
        PlayerColor::Black => Color::Reset,
        PlayerColor::Red => Color::Red,
        PlayerColor::Green => Color::Green,
        PlayerColor::Yellow => Color::Yellow,
        PlayerColor::Blue => Color::Blue,
        PlayerColor::Magenta => Color::Magenta,
        PlayerColor::Cyan => Color::Cyan,
        PlayerColor::Gray => Color::Gray,
        PlayerColor::White => Color::White,
    }
}

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = screen_layout(frame.area());

    draw_menu(frame, layout.menu);

    let status = app.status();
    let status_text = Paragraph::new(status.text().as_str())
        .style(
            Style::default()
                .fg(to_color(*status.color()))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Morpion"));
    frame.render_widget(status_text, layout.status);

    draw_board(frame, layout.board, app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

fn draw_menu(frame: &mut Frame, area: Rect) {
    let bar = Block::default().style(Style::default().bg(Color::DarkGray));
    frame.render_widget(bar, area);

    for (action, rect) in menu_rects(area) {
        let item = Paragraph::new(action.label())
            .style(Style::default().fg(Color::Black).bg(Color::Gray));
        frame.render_widget(item, rect);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let winning = game.winning_combination();

    for (row, cells) in cell_rects(area, game.size()).into_iter().enumerate() {
        for (col, rect) in cells.into_iter().enumerate() {
            let coord = Coord::new(row, col);
            let Some(mv) = game.board().get(coord) else {
                continue;
            };
            draw_cell(
                frame,
                rect,
                game,
                mv,
                winning.contains(&coord),
                app.cursor() == coord,
            );
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    game: &Game,
    mv: &Move,
    highlighted: bool,
    under_cursor: bool,
) {
    let color = game
        .players()
        .iter()
        .find(|p| p.label() == mv.label())
        .map_or(Color::Reset, |p| to_color(*p.color()));

    let border_style = if highlighted {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if under_cursor {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::LightBlue)
    };
    let border_type = if under_cursor {
        BorderType::Thick
    } else {
        BorderType::Plain
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let paragraph = Paragraph::new(Line::from(mv.label()))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
