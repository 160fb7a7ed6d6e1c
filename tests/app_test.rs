//! End-to-end tests driving the app with inputs and a headless terminal.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;
use tictac::tui::{App, Direction, EventSource, Flow, Input, draw, step};
use tictac::{Config, Font};
use tictac_core::{GameResult, Mark, Phase, Position, Square};

fn new_app() -> App {
    App::new(Config::default(), Font::bundled().expect("bundled font"))
}

fn render(app: &mut App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    terminal.backend().buffer().clone()
}

fn screen_text(buf: &Buffer) -> Vec<String> {
    (0..buf.area.height)
        .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect())
        .collect()
}

/// Terminal coordinates of the middle of a cell on the default 60x30 board.
fn click_at(pos: Position) -> Input {
    let board = Rect::new(20, 5, 60, 30);
    Input::Click {
        column: board.x + pos.col() as u16 * 20 + 10,
        row: board.y + pos.row() as u16 * 10 + 5,
    }
}

/// Replays queued events, then reports no input.
#[derive(Default)]
struct QueuedEvents(VecDeque<Event>);

impl EventSource for QueuedEvents {
    fn poll_event(&mut self, _timeout: Duration) -> io::Result<Option<Event>> {
        Ok(self.0.pop_front())
    }
}

fn left_click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_board_is_laid_out_on_draw() {
    let mut app = new_app();
    render(&mut app);
    assert_eq!(app.board_area(), Rect::new(20, 5, 60, 30));
}

#[test]
fn test_click_corners_of_board() {
    let mut app = new_app();
    render(&mut app);

    app.handle_input(Input::Click { column: 20, row: 5 });
    app.handle_input(Input::Click { column: 79, row: 34 });

    let board = app.game().board();
    assert_eq!(board.occupant_at(Position::TopLeft), Square::Occupied(Mark::X));
    assert_eq!(
        board.occupant_at(Position::BottomRight),
        Square::Occupied(Mark::O)
    );
}

#[test]
fn test_click_outside_board_is_ignored() {
    let mut app = new_app();
    render(&mut app);

    for (column, row) in [(19, 5), (20, 4), (80, 20), (50, 35), (0, 0)] {
        assert_eq!(app.handle_input(Input::Click { column, row }), Flow::Continue);
    }
    assert_eq!(app.game().board().filled_cells(), 0);
    assert_eq!(app.game().turn(), Mark::X);
}

#[test]
fn test_win_shows_banner_then_resets() {
    let mut app = new_app();
    render(&mut app);

    for pos in [
        Position::TopLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
        Position::BottomRight,
    ] {
        app.handle_input(click_at(pos));
        render(&mut app);
    }

    assert_eq!(app.game().result(), GameResult::Won(Mark::X));
    assert_eq!(app.status_line(), "Winner is X");
    let buf = render(&mut app);
    assert!(
        screen_text(&buf).iter().any(|line| line.contains("Winner is X")),
        "banner not drawn"
    );
    assert_eq!(app.scene().glyph_count(), 5);

    // Input during the display pause does nothing.
    app.handle_input(click_at(Position::BottomLeft));
    assert_eq!(app.game().board().filled_cells(), 5);

    app.finish_round();
    render(&mut app);
    assert_eq!(app.game().phase(), Phase::Playing);
    assert_eq!(app.game().turn(), Mark::X);
    assert_eq!(app.game().board().filled_cells(), 0);
    assert_eq!(app.scene().glyph_count(), 0);
}

#[test]
fn test_tie_banner() {
    let mut app = new_app();
    render(&mut app);

    // X O X / X O O / O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        let pos = Position::from_index(index).expect("index in range");
        app.handle_input(click_at(pos));
    }

    assert_eq!(app.game().result(), GameResult::Tie);
    let buf = render(&mut app);
    let text = screen_text(&buf);
    assert!(text.iter().any(|line| line.contains("Tie")), "banner not drawn");
    assert!(!text.iter().any(|line| line.contains("Winner")));
}

#[test]
fn test_keyboard_play() {
    let mut app = new_app();
    render(&mut app);
    assert_eq!(app.cursor(), Position::Center);

    app.handle_input(Input::Select);
    app.handle_input(Input::Cursor(Direction::Up));
    app.handle_input(Input::Cursor(Direction::Left));
    app.handle_input(Input::Select);
    app.handle_input(Input::Place(Position::BottomRight));

    let board = app.game().board();
    assert_eq!(board.occupant_at(Position::Center), Square::Occupied(Mark::X));
    assert_eq!(board.occupant_at(Position::TopLeft), Square::Occupied(Mark::O));
    assert_eq!(
        board.occupant_at(Position::BottomRight),
        Square::Occupied(Mark::X)
    );
    assert_eq!(app.cursor(), Position::BottomRight);
}

#[test]
fn test_select_on_occupied_cell_keeps_turn() {
    let mut app = new_app();
    render(&mut app);

    app.handle_input(Input::Select);
    app.handle_input(Input::Select);
    assert_eq!(app.game().board().filled_cells(), 1);
    assert_eq!(app.game().turn(), Mark::O);
}

#[test]
fn test_quit() {
    let mut app = new_app();
    assert_eq!(app.handle_input(Input::Quit), Flow::Quit);
}

#[test]
fn test_status_line_names_turn() {
    let mut app = new_app();
    render(&mut app);
    assert!(app.status_line().starts_with("X to move"));
    app.handle_input(Input::Place(Position::Center));
    assert!(app.status_line().starts_with("O to move"));
}

#[test]
fn test_step_applies_one_queued_click() {
    let mut app = new_app();
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("test terminal");
    let mut events = QueuedEvents::default();
    events.0.push_back(left_click(50, 20));
    events.0.push_back(left_click(20, 5));

    let flow = step(&mut terminal, &mut app, &mut events, Duration::ZERO).unwrap();
    assert_eq!(flow, Flow::Continue);
    assert_eq!(app.game().board().filled_cells(), 1);
    assert_eq!(
        app.game().board().occupant_at(Position::Center),
        Square::Occupied(Mark::X)
    );
    assert_eq!(events.0.len(), 1);
}

#[test]
fn test_step_quits_on_quit_key() {
    let mut app = new_app();
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("test terminal");
    let mut events = QueuedEvents::default();
    events
        .0
        .push_back(Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));

    let flow = step(&mut terminal, &mut app, &mut events, Duration::ZERO).unwrap();
    assert_eq!(flow, Flow::Quit);
}

#[test]
fn test_step_holds_result_then_drops_queued_input_and_resets() {
    let mut app = new_app();
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("test terminal");
    let mut events = QueuedEvents::default();

    // X takes the left column while O plays the middle column.
    for pos in [
        Position::TopLeft,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::Center,
        Position::BottomLeft,
    ] {
        events.0.push_back(click_event(pos));
        step(&mut terminal, &mut app, &mut events, Duration::ZERO).unwrap();
    }
    assert_eq!(app.game().result(), GameResult::Won(Mark::X));

    // A click that arrives while the result is up.
    events.0.push_back(click_event(Position::BottomRight));
    let flow = step(&mut terminal, &mut app, &mut events, Duration::ZERO).unwrap();
    assert_eq!(flow, Flow::Continue);

    let shown = screen_text(terminal.backend().buffer());
    assert!(
        shown.iter().any(|line| line.contains("Winner is X")),
        "banner not drawn before the reset"
    );
    assert!(events.0.is_empty());
    assert_eq!(app.game().phase(), Phase::Playing);
    assert_eq!(app.game().turn(), Mark::X);
    assert_eq!(app.game().board().filled_cells(), 0);

    step(&mut terminal, &mut app, &mut events, Duration::ZERO).unwrap();
    let shown = screen_text(terminal.backend().buffer());
    assert!(!shown.iter().any(|line| line.contains("Winner")));
    assert!(shown.iter().any(|line| line.contains("X to move")));
    assert_eq!(app.scene().glyph_count(), 0);
}

fn click_event(pos: Position) -> Event {
    match click_at(pos) {
        Input::Click { column, row } => left_click(column, row),
        _ => unreachable!("click_at always builds a click"),
    }
}
