//! The rectangular card grid.
//!
//! ## Invariants
//!
//! - Rectangular: every row has the same length.
//! - Even cell count, so every card has a partner.
//! - Every content value appears in exactly two cells.
//!
//! The public path to a `Grid` is through a validated
//! [`LevelDescriptor`](crate::level::LevelDescriptor), which enforces all
//! three before a grid is ever built. `from_matrix` therefore only asserts.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};

/// A (row, column) position on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Ordered 2D arrangement of cards, stored row-major.
///
/// The grid owns its cards exclusively. Mutation goes through the match
/// engine; observers read through `get` and `iter`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cards: Vec<Card>,
}

impl Grid {
    /// Build a grid from a value matrix, allocating card IDs row-major.
    ///
    /// ## Panics
    ///
    /// Panics if the matrix is empty, ragged, or has an odd cell count.
    /// Callers are expected to pass matrices from a validated level
    /// descriptor.
    #[must_use]
    pub fn from_matrix(matrix: &[Vec<i32>]) -> Self {
        assert!(
            !matrix.is_empty() && !matrix[0].is_empty(),
            "Grid matrix must be non-empty"
        );
        let cols = matrix[0].len();
        assert!(
            matrix.iter().all(|row| row.len() == cols),
            "Grid matrix must be rectangular"
        );
        assert!(
            (matrix.len() * cols) % 2 == 0,
            "Grid cell count must be even"
        );

        let mut cards = Vec::with_capacity(matrix.len() * cols);
        for row in matrix {
            for &value in row {
                let id = CardId::new(cards.len() as u32);
                cards.push(Card::new(id, value));
            }
        }

        Self {
            rows: matrix.len(),
            cols,
            cards,
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the grid has no cells (never true for a built grid).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Total number of pairs on the grid.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Check whether a position is on the grid.
    #[must_use]
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Get the card at a position.
    #[must_use]
    pub fn get(&self, pos: GridPos) -> Option<&Card> {
        if self.contains(pos) {
            self.cards.get(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    /// Get a mutable card at a position.
    pub(crate) fn get_mut(&mut self, pos: GridPos) -> Option<&mut Card> {
        if self.contains(pos) {
            self.cards.get_mut(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    /// Iterate over all cards, row-major.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Iterate over all positions, row-major.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| GridPos::new(row, col)))
    }
}
