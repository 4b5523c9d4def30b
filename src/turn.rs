//! Move mechanics: validation and application.
//!
//! Round-state checks (active round, whose turn) belong to the session;
//! this module only guards the board itself.

use crate::board::{Board, Mark};
use crate::error::MoveError;
use tracing::instrument;

/// Applies `mark` at `position` on the board.
///
/// Fails without mutation when the position is out of range or the
/// square is already occupied.
#[instrument(skip(board))]
pub fn apply_move(board: &mut Board, position: usize, mark: Mark) -> Result<(), MoveError> {
    if position >= board.cell_count() {
        return Err(MoveError::OutOfRange {
            position,
            cells: board.cell_count(),
        });
    }
    if !board.is_empty(position) {
        return Err(MoveError::Occupied { position });
    }
    board.place(position, mark);
    Ok(())
}
