//! Matrix validation.
//!
//! Level matrices can come from outside the process (a level service), so
//! they are checked defensively before a session accepts them. Checks run in
//! order and short-circuit on the first failure:
//!
//! 1. Non-empty (at least one row, first row has cells)
//! 2. Rectangular (all rows equal length)
//! 3. Even cell count
//! 4. Every distinct value occurs exactly twice

use rustc_hash::FxHashMap;

use crate::error::LevelError;

/// Check a matrix, reporting which invariant failed.
///
/// `UnpairedValue` reports the first offending value in row-major order, so
/// the error is deterministic for a given matrix.
pub fn check_matrix(matrix: &[Vec<i32>]) -> Result<(), LevelError> {
    if matrix.is_empty() || matrix[0].is_empty() {
        return Err(LevelError::EmptyMatrix);
    }

    let cols = matrix[0].len();
    if matrix.iter().any(|row| row.len() != cols) {
        return Err(LevelError::RaggedRows);
    }

    let total = matrix.len() * cols;
    if total % 2 != 0 {
        return Err(LevelError::OddCellCount(total));
    }

    let mut counts: FxHashMap<i32, usize> = FxHashMap::default();
    for row in matrix {
        for &value in row {
            *counts.entry(value).or_insert(0) += 1;
        }
    }

    for row in matrix {
        for &value in row {
            let count = counts[&value];
            if count != 2 {
                return Err(LevelError::UnpairedValue { value, count });
            }
        }
    }

    Ok(())
}

/// Check a matrix, returning a plain bool.
///
/// This never fails loudly; it is the defensive front door for
/// externally-sourced level data.
#[must_use]
pub fn validate_matrix(matrix: &[Vec<i32>]) -> bool {
    check_matrix(matrix).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_matrix() {
        assert!(validate_matrix(&[vec![1, 2], vec![2, 1]]));
        assert!(check_matrix(&[vec![1, 2, 3], vec![3, 2, 1]]).is_ok());
    }

    #[test]
    fn test_empty_matrix() {
        assert_eq!(check_matrix(&[]), Err(LevelError::EmptyMatrix));
        assert_eq!(check_matrix(&[vec![]]), Err(LevelError::EmptyMatrix));
        assert!(!validate_matrix(&[]));
    }

    #[test]
    fn test_ragged_rows() {
        assert_eq!(
            check_matrix(&[vec![1, 2], vec![1]]),
            Err(LevelError::RaggedRows)
        );
    }

    #[test]
    fn test_odd_cell_count() {
        assert_eq!(
            check_matrix(&[vec![1, 2, 3], vec![1, 2, 3], vec![1, 2, 3]]),
            Err(LevelError::OddCellCount(9))
        );
    }

    #[test]
    fn test_unpaired_value() {
        // 1 appears three times, 3 appears once
        assert_eq!(
            check_matrix(&[vec![1, 1], vec![1, 3]]),
            Err(LevelError::UnpairedValue { value: 1, count: 3 })
        );
    }

    #[test]
    fn test_unpaired_reports_first_in_row_major_order() {
        // Both 5 and 9 are singletons; 5 comes first row-major.
        assert_eq!(
            check_matrix(&[vec![5, 1], vec![1, 9]]),
            Err(LevelError::UnpairedValue { value: 5, count: 1 })
        );
    }

    #[test]
    fn test_checks_short_circuit_in_order() {
        // Ragged AND odd AND unpaired: ragged wins.
        assert_eq!(
            check_matrix(&[vec![1, 2, 3], vec![1]]),
            Err(LevelError::RaggedRows)
        );
    }
}
