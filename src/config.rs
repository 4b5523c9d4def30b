//! Session configuration.

use crate::board::Mark;
use serde::{Deserialize, Serialize};

/// Game mode: who sits in seat two.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Human vs computer.
    Cpu,
    /// Human vs human on the same board.
    Multiplayer,
}

/// Configuration chosen on the menu screen before a session starts.
///
/// `human_mark` and the board contents may change between rounds (mark
/// swap on loss); `board_size` is fixed for the session's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Mark chosen by the seat-one human for the first round.
    pub human_mark: Mark,
    /// Opponent type.
    pub mode: GameMode,
    /// Board side length.
    pub board_size: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            mode: GameMode::Cpu,
            board_size: 3,
        }
    }
}
