//! Error types for the game core.
//!
//! Nothing here is fatal: invalid inputs are rejected without mutating
//! session state and reported back to the caller.

use derive_more::{Display, Error};

/// A rejected move. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The position does not exist on the board.
    #[display("position {position} is out of range for a {cells}-cell board")]
    OutOfRange {
        /// Submitted position.
        position: usize,
        /// Total cell count of the board.
        cells: usize,
    },
    /// The target square is already occupied.
    #[display("position {position} is already occupied")]
    Occupied {
        /// Submitted position.
        position: usize,
    },
    /// No round is in progress.
    #[display("no active round")]
    Inactive,
    /// The acting seat does not hold the current turn mark.
    #[display("move submitted out of turn")]
    OutOfTurn,
}

/// The CPU was asked to move on a board with no empty cells.
///
/// Never reached under correct orchestration, but checked defensively
/// and treated as a no-op by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("no empty cells remain")]
pub struct NoEmptyCells;

/// A rejected configuration change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Configuration is only accepted before the session starts.
    #[display("session already started")]
    AlreadyStarted,
}
