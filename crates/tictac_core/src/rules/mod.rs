//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Rules are separated from board
//! storage so the controller and the renderer can share them.

pub mod draw;
pub mod win;

pub use draw::{evaluate, is_full};
pub use win::{LINES, check_winner, winning_line};
