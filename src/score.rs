//! Seats and score tracking across rounds.

use crate::config::GameMode;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A fixed seat at the table.
///
/// Seats keep their score counter and label for the whole session even
/// when the marks they play with swap between rounds. In CPU mode seat
/// one is the human and seat two the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    /// First seat (the human in CPU mode).
    One,
    /// Second seat (the computer in CPU mode).
    Two,
}

impl PlayerSlot {
    /// The other seat.
    pub fn other(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    /// Display label for this seat under the given mode.
    pub fn label(self, mode: GameMode) -> &'static str {
        match (mode, self) {
            (GameMode::Cpu, PlayerSlot::One) => "YOU",
            (GameMode::Cpu, PlayerSlot::Two) => "CPU",
            (GameMode::Multiplayer, PlayerSlot::One) => "P1",
            (GameMode::Multiplayer, PlayerSlot::Two) => "P2",
        }
    }
}

/// Read-only score snapshot handed to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Rounds won by seat one.
    pub player_one: u32,
    /// Rounds won by seat two.
    pub player_two: u32,
    /// Tied rounds.
    pub ties: u32,
}

/// Win/tie counters keyed by seat.
///
/// Counters survive round transitions and reset only on full quit.
#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    score: Score,
}

impl ScoreTracker {
    /// Creates a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a round win for the given seat.
    pub fn record_win(&mut self, seat: PlayerSlot) {
        match seat {
            PlayerSlot::One => self.score.player_one += 1,
            PlayerSlot::Two => self.score.player_two += 1,
        }
        debug!(?seat, score = ?self.score, "Recorded win");
    }

    /// Records a tied round.
    pub fn record_tie(&mut self) {
        self.score.ties += 1;
        debug!(score = ?self.score, "Recorded tie");
    }

    /// Current counters.
    pub fn snapshot(&self) -> Score {
        self.score
    }

    /// Zeroes all counters.
    pub fn reset(&mut self) {
        self.score = Score::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_per_seat() {
        let mut tracker = ScoreTracker::new();
        tracker.record_win(PlayerSlot::One);
        tracker.record_win(PlayerSlot::One);
        tracker.record_win(PlayerSlot::Two);
        tracker.record_tie();
        assert_eq!(
            tracker.snapshot(),
            Score { player_one: 2, player_two: 1, ties: 1 }
        );
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut tracker = ScoreTracker::new();
        tracker.record_win(PlayerSlot::Two);
        tracker.record_tie();
        tracker.reset();
        assert_eq!(tracker.snapshot(), Score::default());
    }
}
