//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use tracing::instrument;

/// A mark a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Mark {
    /// Mark X (always moves first).
    #[display("X")]
    X,
    /// Mark O (moves second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Character used to draw this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Occupant of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Square holds a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if nothing has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// 3x3 tic-tac-toe board.
///
/// The fill count is kept alongside the squares and always equals the
/// number of occupied squares.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
    /// Number of occupied squares.
    filled: usize,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at a raw index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Returns the occupant of a position.
    pub fn occupant_at(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Places `mark` at `pos`.
    ///
    /// Returns `false` and leaves the board untouched when the square is
    /// already occupied.
    #[instrument(skip(self), fields(filled = self.filled))]
    pub fn place_mark(&mut self, pos: Position, mark: Mark) -> bool {
        let square = &mut self.squares[pos.to_index()];
        if !square.is_empty() {
            return false;
        }
        *square = Square::Occupied(mark);
        self.filled += 1;
        true
    }

    /// Clears every square.
    #[instrument(skip(self), fields(filled = self.filled))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
        self.filled = 0;
    }

    /// Number of occupied squares.
    pub fn filled_cells(&self) -> usize {
        self.filled
    }

    /// Checks if all nine squares are occupied.
    pub fn is_full(&self) -> bool {
        self.filled == self.squares.len()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                f.write_str("\n-+-+-\n")?;
            }
            for (col, square) in chunk.iter().enumerate() {
                if col > 0 {
                    f.write_str("|")?;
                }
                match square {
                    Square::Empty => write!(f, "{}", row * 3 + col + 1)?,
                    Square::Occupied(mark) => write!(f, "{mark}")?,
                }
            }
        }
        Ok(())
    }
}

/// Result of evaluating a board.
///
/// Always derived from the board, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// No line completed and empty squares remain.
    InProgress,
    /// A line is completed by this mark.
    Won(Mark),
    /// Board full with no completed line.
    Tie,
}

impl GameResult {
    /// Converts to a final outcome, or `None` while the game is still open.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GameResult::InProgress => None,
            GameResult::Won(mark) => Some(Outcome::Won(mark)),
            GameResult::Tie => Some(Outcome::Tie),
        }
    }
}

/// Final outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Outcome {
    /// Mark won the round.
    #[display("Winner is {_0}")]
    Won(Mark),
    /// Board filled with no winner.
    #[display("Tie")]
    Tie,
}
