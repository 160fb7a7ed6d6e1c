//! Application state and logic.

use super::input::{Input, move_cursor};
use crate::config::Config;
use crate::font::Font;
use crate::scene::Scene;
use ratatui::layout::Rect;
use tictac_core::{
    GameController, Geometry, Outcome, Phase, Placement, Position, Rejection,
};
use tracing::{debug, info, instrument};

/// What the event loop should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the loop and close the game.
    Quit,
}

/// Main application state.
///
/// Owns the controller and everything the renderer needs; the event loop
/// borrows it mutably.
#[derive(Debug)]
pub struct App {
    config: Config,
    font: Font,
    game: GameController,
    scene: Scene,
    cursor: Position,
    board_area: Rect,
}

impl App {
    /// Creates a new application with an empty board.
    #[instrument(skip_all)]
    pub fn new(config: Config, font: Font) -> Self {
        Self {
            config,
            font,
            game: GameController::new(),
            scene: Scene::new(),
            cursor: Position::Center,
            board_area: Rect::default(),
        }
    }

    /// Effective configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The round controller.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Cell glyphs for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Terminal area the board occupies after the last layout.
    pub fn board_area(&self) -> Rect {
        self.board_area
    }

    /// Outcome waiting for its display pause, if the round is over.
    pub fn pending_outcome(&self) -> Option<Outcome> {
        match self.game.phase() {
            Phase::Resolved(outcome) => Some(outcome),
            Phase::Playing => None,
        }
    }

    /// Line shown under the board.
    pub fn status_line(&self) -> String {
        match self.pending_outcome() {
            Some(outcome) => outcome.to_string(),
            None => format!(
                "{} to move | click a cell, arrows + Enter, or 1-9 | q quits",
                self.game.turn()
            ),
        }
    }

    /// Places the board in `area` and refreshes cell glyphs to match.
    pub fn layout(&mut self, area: Rect) {
        self.board_area = area;
        let geometry = Geometry::new(u32::from(area.width), u32::from(area.height));
        self.scene.sync(geometry, self.game.board(), &self.font);
    }

    /// Applies one input.
    #[instrument(skip(self))]
    pub fn handle_input(&mut self, input: Input) -> Flow {
        let placement = match input {
            Input::Quit => {
                info!("User quit");
                return Flow::Quit;
            }
            Input::Cursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
                return Flow::Continue;
            }
            Input::Click { column, row } => self.click(column, row),
            Input::Select => self.game.place(self.cursor),
            Input::Place(pos) => {
                self.cursor = pos;
                self.game.place(pos)
            }
        };

        match placement {
            Placement::Rejected(reason) => debug!(%reason, "Input ignored"),
            Placement::Continued { position, mark } | Placement::Resolved { position, mark, .. } => {
                debug!(%mark, %position, "Mark placed");
            }
        }
        Flow::Continue
    }

    /// Ends a resolved round once its result has been shown.
    pub fn finish_round(&mut self) {
        if self.game.finish_round() {
            self.cursor = Position::Center;
        }
    }

    fn click(&mut self, column: u16, row: u16) -> Placement {
        let area = self.board_area;
        let (Some(x), Some(y)) = (column.checked_sub(area.x), row.checked_sub(area.y)) else {
            return Placement::Rejected(Rejection::OutsideBoard);
        };
        let Some(geometry) = self.scene.geometry() else {
            return Placement::Rejected(Rejection::OutsideBoard);
        };
        self.game.click(u32::from(x), u32::from(y), &geometry)
    }
}
