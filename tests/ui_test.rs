//! Rendering and hit-testing tests using ratatui's test backend.

use morpion::tui::ui::{CELL_HEIGHT, CELL_WIDTH, Hit, cell_rects, draw, hit_test, screen_layout};
use morpion::{App, MenuAction};
use morpion_engine::{Coord, Game, default_players};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect, style::Color};

fn render(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn text(buffer: &Buffer) -> String {
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_cells_do_not_overlap() {
    let area = Rect::new(0, 0, 80, 30);
    let rects = cell_rects(screen_layout(area).board, 3);
    assert_eq!(rects.len(), 3);

    let top_left = rects[0][0];
    assert_eq!(top_left.width, CELL_WIDTH);
    assert_eq!(top_left.height, CELL_HEIGHT);
    assert_eq!(rects[0][1].x, top_left.x + CELL_WIDTH);
    assert_eq!(rects[1][0].y, top_left.y + CELL_HEIGHT);
}

#[test]
fn test_hit_test_cells_and_menu() {
    let area = Rect::new(0, 0, 60, 24);
    let layout = screen_layout(area);
    let rects = cell_rects(layout.board, 3);

    for row in 0..3 {
        for col in 0..3 {
            let rect = rects[row][col];
            assert_eq!(
                hit_test(area, 3, rect.x + 1, rect.y + 1),
                Some(Hit::Cell(Coord::new(row, col)))
            );
        }
    }

    assert_eq!(
        hit_test(area, 3, layout.menu.x, layout.menu.y),
        Some(Hit::Menu(MenuAction::PlayAgain))
    );
    assert_eq!(hit_test(area, 3, layout.help.x, layout.help.y), None);
}

#[test]
fn test_draw_shows_status_and_labels() {
    let mut app = App::new(Game::default());
    app.play(Coord::new(0, 0));
    app.play(Coord::new(1, 1));

    let screen = text(&render(&app, 60, 24));

    assert!(screen.contains("Play again (n)"));
    assert!(screen.contains("Quit (q)"));
    assert!(screen.contains("X to play."));
    assert!(screen.contains('X'));
    assert!(screen.contains('O'));
}

#[test]
fn test_labels_drawn_in_player_color() {
    let mut app = App::new(Game::default());
    app.play(Coord::new(0, 0));

    let area = Rect::new(0, 0, 60, 24);
    let buffer = render(&app, area.width, area.height);
    let rect = cell_rects(screen_layout(area).board, 3)[0][0];
    let inner = buffer
        .content()
        .iter()
        .enumerate()
        .find(|(i, cell)| {
            let x = (*i as u16) % area.width;
            let y = (*i as u16) / area.width;
            rect.contains((x, y).into()) && cell.symbol() == "X"
        })
        .map(|(_, cell)| cell.clone())
        .unwrap();

    assert_eq!(inner.fg, Color::Blue);
}

#[test]
fn test_winning_cells_highlighted() {
    let mut app = App::new(Game::default());
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        app.play(Coord::new(row, col));
    }
    assert!(app.game().has_winner());

    let area = Rect::new(0, 0, 60, 24);
    let buffer = render(&app, area.width, area.height);
    let rects = cell_rects(screen_layout(area).board, 3);

    for col in 0..3 {
        let corner = rects[0][col];
        assert_eq!(buffer[(corner.x, corner.y)].fg, Color::Red);
    }
    let other = rects[2][2];
    assert_ne!(buffer[(other.x, other.y)].fg, Color::Red);

    let screen = text(&buffer);
    assert!(screen.contains("Player \"X\" won!"));
}

#[test]
fn test_large_board_fits_small_terminal() {
    let game = Game::new(default_players(), 9).unwrap();
    let app = App::new(game);
    // Smaller than the 63x27 grid; cells are clipped instead of panicking.
    let buffer = render(&app, 30, 12);
    assert_eq!(buffer.area.width, 30);
}
