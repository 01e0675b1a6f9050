//! Validated level descriptors.
//!
//! A `LevelDescriptor` is the only way level data reaches a session: its
//! constructor runs the matrix validator, so a descriptor in hand means the
//! grid invariants hold.

use crate::error::LevelError;
use crate::level::validator::check_matrix;

/// A validated level: grid matrix, display-asset keys, optional time limit.
///
/// ## Asset Mapping
///
/// Content values map to asset keys by sorted-value rank: the Nth distinct
/// value (ascending) maps to the Nth key in `asset_keys`. A rank past the end
/// of the key list falls back to the first key, matching how the presentation
/// layer treats missing art.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelDescriptor {
    level_number: u32,
    matrix: Vec<Vec<i32>>,
    asset_keys: Vec<String>,
    time_limit: Option<u32>,
    /// Distinct matrix values, ascending. Backs `asset_key_for`.
    distinct_values: Vec<i32>,
}

impl LevelDescriptor {
    /// Build a descriptor, validating the matrix.
    pub fn new(
        level_number: u32,
        matrix: Vec<Vec<i32>>,
        asset_keys: Vec<String>,
        time_limit: Option<u32>,
    ) -> Result<Self, LevelError> {
        check_matrix(&matrix)?;

        let mut distinct_values: Vec<i32> = matrix.iter().flatten().copied().collect();
        distinct_values.sort_unstable();
        distinct_values.dedup();

        Ok(Self {
            level_number,
            matrix,
            asset_keys,
            time_limit,
            distinct_values,
        })
    }

    /// The level number this descriptor was built for.
    #[must_use]
    pub fn level_number(&self) -> u32 {
        self.level_number
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.matrix.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.matrix[0].len()
    }

    /// Total number of pairs.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        (self.rows() * self.cols()) / 2
    }

    /// The validated value matrix.
    #[must_use]
    pub fn matrix(&self) -> &[Vec<i32>] {
        &self.matrix
    }

    /// The ordered display-asset keys.
    #[must_use]
    pub fn asset_keys(&self) -> &[String] {
        &self.asset_keys
    }

    /// Time limit in seconds, `None` for untimed levels.
    #[must_use]
    pub fn time_limit(&self) -> Option<u32> {
        self.time_limit
    }

    /// Asset key for a content value, by sorted-value rank.
    ///
    /// Returns `None` only when the value is not on the grid or the key list
    /// is empty; a rank past the end of the list falls back to the first key.
    #[must_use]
    pub fn asset_key_for(&self, value: i32) -> Option<&str> {
        let rank = self.distinct_values.binary_search(&value).ok()?;
        self.asset_keys
            .get(rank)
            .or_else(|| self.asset_keys.first())
            .map(String::as_str)
    }
}
