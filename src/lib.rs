//! Grid snake: a fixed-tick engine plus a crossterm front end.
//!
//! The engine in [`engine`] owns one game session and knows nothing about
//! time or terminals. The front end in [`game`] drives it at a fixed cadence
//! and draws whatever [`engine::GameEngine::snapshot`] reports.

pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod input;
pub mod snake;
pub mod term;

pub use engine::{Crash, GameEngine, GameSession, Phase, Snapshot, TickOutcome};
pub use snake::Direction;

/// Number of rows on the board.
pub const ROWS: i16 = 20;
/// Number of columns on the board.
pub const COLS: i16 = 20;

/// A board position, 0-indexed from the top-left corner.
///
/// Coordinates are signed so that a head stepping off the board can still be
/// represented and rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: i16,
    pub col: i16,
}

impl Cell {
    pub const fn new(row: i16, col: i16) -> Self {
        Cell { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        (0..ROWS).contains(&self.row) && (0..COLS).contains(&self.col)
    }
}

impl From<(i16, i16)> for Cell {
    fn from((row, col): (i16, i16)) -> Self {
        Cell::new(row, col)
    }
}
