//! Round lifecycle: results, seat↔mark assignment, and the
//! winner-leads rule for who moves first in the next round.

use crate::board::Mark;
use crate::score::PlayerSlot;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Terminal value of a completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    /// The round was won by the given mark.
    Win(Mark),
    /// The board filled with no winner.
    Tie,
}

/// Explicit mapping between seats and the marks they currently play.
///
/// This is session state, never derived from presentation. Storing the
/// seat-one mark is enough; seat two always holds the opponent mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    player_one_mark: Mark,
}

impl SeatAssignment {
    /// Creates an assignment with seat one holding `player_one_mark`.
    pub fn new(player_one_mark: Mark) -> Self {
        Self { player_one_mark }
    }

    /// The mark the given seat plays with this round.
    pub fn mark_of(&self, seat: PlayerSlot) -> Mark {
        match seat {
            PlayerSlot::One => self.player_one_mark,
            PlayerSlot::Two => self.player_one_mark.opponent(),
        }
    }

    /// The seat holding the given mark this round.
    pub fn slot_of(&self, mark: Mark) -> PlayerSlot {
        if mark == self.player_one_mark {
            PlayerSlot::One
        } else {
            PlayerSlot::Two
        }
    }

    /// The seat that moves first this round (X always opens).
    pub fn first_mover(&self) -> PlayerSlot {
        self.slot_of(Mark::X)
    }

    /// The same table with the marks exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            player_one_mark: self.player_one_mark.opponent(),
        }
    }
}

/// Computes the seat assignment and first-mover for the next round.
///
/// Winner-leads rule: the seat that won a round holds X (and therefore
/// opens) in the next one, which swaps the marks whenever the round was
/// won by the seat that moved second. A tie changes nothing; across
/// consecutive ties the carried first-mover stays whoever led last.
#[instrument]
pub fn prepare_next_round(
    seats: SeatAssignment,
    last_first_mover: PlayerSlot,
    result: RoundResult,
) -> (SeatAssignment, PlayerSlot) {
    match result {
        RoundResult::Win(mark) => {
            let winner = seats.slot_of(mark);
            let next = if winner != last_first_mover {
                debug!(?winner, "Winner moved second; swapping marks");
                seats.swapped()
            } else {
                seats
            };
            (next, winner)
        }
        RoundResult::Tie => (seats, last_first_mover),
    }
}
