//! Round controller for tic-tac-toe.
//!
//! The controller owns the board and the turn. It is a two-state machine:
//!
//! - `Playing` - placements are accepted, the board is evaluated after each one
//! - `Resolved` - a win or tie was reached; placements are refused until
//!   [`GameController::finish_round`] resets the board
//!
//! Rejected input never changes state or consumes a turn.

use crate::geometry::Geometry;
use crate::rules::evaluate;
use crate::{Board, GameResult, Mark, Outcome, Position};
use derive_more::Display;
use tracing::{debug, info, instrument};

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Accepting placements.
    Playing,
    /// Round is over and waiting to be reset.
    Resolved(Outcome),
}

/// Why a placement was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Rejection {
    /// The point was outside every cell.
    #[display("click outside the board")]
    OutsideBoard,
    /// The target square already holds a mark.
    #[display("{_0} is already occupied")]
    Occupied(Position),
    /// The round is over.
    #[display("round is already resolved")]
    Resolved,
}

/// Effect of a placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Nothing changed.
    Rejected(Rejection),
    /// Mark placed; the game goes on.
    Continued {
        /// Where the mark went.
        position: Position,
        /// Who placed it.
        mark: Mark,
    },
    /// Mark placed and the round is over.
    Resolved {
        /// Where the mark went.
        position: Position,
        /// Who placed it.
        mark: Mark,
        /// How the round ended.
        outcome: Outcome,
    },
}

impl Placement {
    /// Returns the outcome if this placement ended the round.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Placement::Resolved { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }

    /// Checks if the board changed.
    pub fn is_applied(&self) -> bool {
        !matches!(self, Placement::Rejected(_))
    }
}

/// Owns the board and the turn, and drives a round from first mark to reset.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    turn: Mark,
    phase: Phase,
}

impl GameController {
    /// Creates a controller with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            phase: Phase::Playing,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark that will be placed next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Evaluates the board as it stands.
    pub fn result(&self) -> GameResult {
        evaluate(&self.board)
    }

    /// Places the current mark at `pos`.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place(&mut self, pos: Position) -> Placement {
        if let Phase::Resolved(_) = self.phase {
            debug!("Placement ignored, round resolved");
            return Placement::Rejected(Rejection::Resolved);
        }

        let mark = self.turn;
        if !self.board.place_mark(pos, mark) {
            debug!("Placement ignored, square occupied");
            return Placement::Rejected(Rejection::Occupied(pos));
        }
        self.turn = mark.opponent();
        debug!(filled = self.board.filled_cells(), "Mark placed");

        match self.result().outcome() {
            None => Placement::Continued {
                position: pos,
                mark,
            },
            Some(outcome) => {
                info!(board = %self.board, "{outcome}");
                self.phase = Phase::Resolved(outcome);
                Placement::Resolved {
                    position: pos,
                    mark,
                    outcome,
                }
            }
        }
    }

    /// Dispatches a click in viewport coordinates to the cell under it.
    #[instrument(skip(self, geometry))]
    pub fn click(&mut self, x: u32, y: u32, geometry: &Geometry) -> Placement {
        match geometry.cell_at(x, y) {
            Some(pos) => self.place(pos),
            None => {
                debug!("Click outside the board");
                Placement::Rejected(Rejection::OutsideBoard)
            }
        }
    }

    /// Ends a resolved round: clears the board and gives X the first move.
    ///
    /// Returns `false` (and does nothing) while the round is still being played.
    #[instrument(skip(self))]
    pub fn finish_round(&mut self) -> bool {
        if self.phase == Phase::Playing {
            return false;
        }
        self.board.reset();
        self.turn = Mark::X;
        self.phase = Phase::Playing;
        info!("Board reset");
        true
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
