//! Notifications pushed from the session to the renderer.

use crate::board::Mark;
use crate::config::GameMode;
use crate::round::{RoundResult, SeatAssignment};
use crate::score::Score;
use serde::{Deserialize, Serialize};

/// Outcome events emitted by [`crate::session::GameSession`].
///
/// Events are push-only: the core never blocks on or waits for the
/// renderer, and a disconnected receiver is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Configuration was accepted on the menu screen.
    ModeConfigured {
        /// Chosen opponent type.
        mode: GameMode,
        /// Mark the seat-one human will open with.
        human_mark: Mark,
    },
    /// A fresh round began.
    RoundStarted {
        /// Mark to move first (always X).
        to_move: Mark,
        /// Current seat↔mark table for labelling.
        seats: SeatAssignment,
    },
    /// A mark was placed on the board.
    CellFilled {
        /// Board index of the filled cell.
        position: usize,
        /// Mark now occupying it.
        mark: Mark,
    },
    /// The turn passed to the other mark.
    TurnChanged {
        /// Mark now to move.
        mark: Mark,
    },
    /// The round reached a terminal state.
    RoundEnded {
        /// Win or tie.
        result: RoundResult,
    },
    /// A counter changed (or was zeroed on quit).
    ScoreChanged {
        /// Fresh snapshot of all counters.
        score: Score,
    },
    /// The user asked to reset; the renderer should confirm.
    ResetRequested,
    /// The session ended; the renderer should show the menu.
    MenuRequested,
}
