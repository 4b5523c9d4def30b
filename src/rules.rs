//! Win detection and winning-line generation.

use crate::board::{Board, Mark, Square};
use tracing::instrument;

/// The winning lines for a square board of a given size.
///
/// Generated once per session and reused for every winner check: the
/// set is invariant for a fixed board size. For side length `n` there
/// are exactly `2n + 2` lines: `n` rows, `n` columns, and the two
/// diagonals (strides `n + 1` and `n - 1` from the board corners).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLines {
    size: usize,
    lines: Vec<Vec<usize>>,
}

impl WinningLines {
    /// Generates the winning lines for an `n`×`n` board.
    #[instrument]
    pub fn for_size(n: usize) -> Self {
        let mut lines = Vec::with_capacity(2 * n + 2);

        for row in 0..n {
            lines.push((0..n).map(|col| row * n + col).collect());
        }
        for col in 0..n {
            lines.push((0..n).map(|row| row * n + col).collect());
        }
        lines.push((0..n).map(|d| d * (n + 1)).collect());
        lines.push((0..n).map(|d| (d + 1) * (n - 1)).collect());

        Self { size: n, lines }
    }

    /// Board side length these lines were generated for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of lines (`2n + 2`).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True iff there are no lines (never for `n > 0`).
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates over the lines.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.lines.iter().map(|line| line.as_slice())
    }
}

/// Checks the board for a winner.
///
/// A line wins when its first cell is occupied and every cell on the
/// line holds the same mark. All lines are scanned; under legal play at
/// most one line is satisfied, so scan order does not affect the result.
#[instrument(skip(board, lines))]
pub fn check_winner(board: &Board, lines: &WinningLines) -> Option<Mark> {
    for line in lines.iter() {
        let first = match board.get(line[0]) {
            Some(Square::Occupied(mark)) => mark,
            _ => continue,
        };
        if line
            .iter()
            .all(|&position| board.get(position) == Some(Square::Occupied(first)))
        {
            return Some(first);
        }
    }
    None
}
