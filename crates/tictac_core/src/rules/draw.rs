//! Draw detection and whole-board evaluation.

use super::win::check_winner;
use crate::{Board, GameResult};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Evaluates the board.
///
/// A completed line wins even when it fills the last square; a full board
/// without a line is a tie.
#[instrument(skip(board), fields(filled = board.filled_cells()))]
pub fn evaluate(board: &Board) -> GameResult {
    if let Some(mark) = check_winner(board) {
        GameResult::Won(mark)
    } else if is_full(board) {
        GameResult::Tie
    } else {
        GameResult::InProgress
    }
}
