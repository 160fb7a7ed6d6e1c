//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Board**: nine squares in row-major order plus a fill count
//! - **Rules**: win detection over the eight triples, and tie detection
//! - **Geometry**: maps viewport coordinates to cells
//! - **Controller**: turn order and the Playing/Resolved round machine
//!
//! # Example
//!
//! ```
//! use tictac_core::{GameController, Mark, Outcome, Position};
//!
//! let mut game = GameController::new();
//! for pos in [
//!     Position::TopLeft,
//!     Position::TopCenter,
//!     Position::Center,
//!     Position::TopRight,
//!     Position::BottomRight,
//! ] {
//!     game.place(pos);
//! }
//! assert_eq!(game.result().outcome(), Some(Outcome::Won(Mark::X)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod controller;
pub mod geometry;
mod position;
pub mod rules;
mod types;

pub use controller::{GameController, Phase, Placement, Rejection};
pub use geometry::{Geometry, Region};
pub use position::Position;
pub use types::{Board, GameResult, Mark, Outcome, Square};
