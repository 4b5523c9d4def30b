//! CPU move selection.

use crate::board::Board;
use crate::error::NoEmptyCells;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Computer-controlled player.
///
/// The policy is deliberately the weakest possible: a uniform-random
/// sample over the empty squares, no lookahead. Stronger policies
/// (minimax, alpha-beta) can replace the internals without changing the
/// contract: [`CpuPlayer::choose_move`] takes a board snapshot and
/// returns one legal position.
#[derive(Debug, Clone)]
pub struct CpuPlayer {
    rng: SmallRng,
}

impl CpuPlayer {
    /// Creates a CPU player seeded from the system entropy source.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    /// Creates a CPU player with a fixed seed, for deterministic play.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Chooses an empty position uniformly at random.
    ///
    /// Fails on a full board; the session guards against calling in
    /// that state.
    pub fn choose_move(&mut self, board: &Board) -> Result<usize, NoEmptyCells> {
        let open = board.empty_positions();
        if open.is_empty() {
            return Err(NoEmptyCells);
        }
        let position = open[self.rng.random_range(0..open.len())];
        debug!(position, candidates = open.len(), "CPU chose position");
        Ok(position)
    }
}

impl Default for CpuPlayer {
    fn default() -> Self {
        Self::new()
    }
}
