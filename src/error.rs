//! Level loading errors.
//!
//! There is deliberately no error type for flips: invalid flip requests are
//! silent no-ops (see the session module). Errors exist only at the level
//! loading seam, where externally-sourced data can be malformed.

use thiserror::Error;

/// Why a level could not be loaded.
///
/// Callers are expected to fall back to a known-good default level rather
/// than crash (see `SessionController::start_or_default`).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LevelError {
    /// The matrix has no rows, or its first row has no cells.
    #[error("level matrix is empty")]
    EmptyMatrix,

    /// Not all rows have the same length.
    #[error("level matrix rows have unequal lengths")]
    RaggedRows,

    /// The total cell count is odd, so the cards cannot all pair up.
    #[error("level matrix has an odd cell count ({0})")]
    OddCellCount(usize),

    /// A content value does not appear exactly twice.
    #[error("value {value} appears {count} times, expected exactly 2")]
    UnpairedValue { value: i32, count: usize },

    /// A flat matrix cannot be reshaped into the advertised grid size.
    #[error("flat matrix of {len} cells does not divide into rows of {grid_size}")]
    BadFlatMatrix { len: usize, grid_size: usize },

    /// The level provider failed to produce a response.
    #[error("level provider failed: {0}")]
    Provider(String),
}
