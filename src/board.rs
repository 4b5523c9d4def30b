//! Board representation: marks, squares, and the flat cell grid.

use serde::{Deserialize, Serialize};

/// A player mark. X always moves first within a round; which seat
/// holds X can change between rounds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Mark {
    /// The X mark (first mover).
    X,
    /// The O mark (second mover).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// An N×N board stored as a flat row-major cell vector.
///
/// Index `i` maps to row `i / size`, column `i % size`. Within a round
/// cells only ever transition Empty → Occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Square>,
}

impl Board {
    /// Creates an empty board with `size * size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Square::Empty; size * size],
        }
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size²`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Gets the square at the given position, `None` if out of range.
    pub fn get(&self, position: usize) -> Option<Square> {
        self.cells.get(position).copied()
    }

    /// Checks whether the square at `position` is empty.
    pub fn is_empty(&self, position: usize) -> bool {
        matches!(self.get(position), Some(Square::Empty))
    }

    /// True iff no empty square remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&square| square != Square::Empty)
    }

    /// Indices of all empty squares, ascending.
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &square)| square == Square::Empty)
            .map(|(position, _)| position)
            .collect()
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.cells
    }

    /// Writes a mark without validation. Callers go through
    /// [`crate::turn::apply_move`], which checks bounds and occupancy.
    pub(crate) fn place(&mut self, position: usize, mark: Mark) {
        self.cells[position] = Square::Occupied(mark);
    }

    /// Formats the board as a human-readable grid for logs and consoles.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.cells[row * self.size + col] {
                    Square::Empty => '.',
                    Square::Occupied(Mark::X) => 'X',
                    Square::Occupied(Mark::O) => 'O',
                };
                result.push(symbol);
                if col < self.size - 1 {
                    result.push(' ');
                }
            }
            if row < self.size - 1 {
                result.push('\n');
            }
        }
        result
    }
}
