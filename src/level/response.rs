//! The level-service wire shape.
//!
//! Backends disagree on how they ship a matrix: some send a nested
//! `int[][]`, some a flat `int[]` plus a grid size. `LevelResponse` accepts
//! both, along with the camelCase field names some services use.
//!
//! A response is untrusted until `into_descriptor()` validates it.

use serde::{Deserialize, Serialize};

use crate::error::LevelError;
use crate::level::descriptor::LevelDescriptor;

/// A matrix as it appears on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatrixPayload {
    /// Row-major nested rows.
    Nested(Vec<Vec<i32>>),
    /// Flat row-major cells; `grid_size` gives the column count.
    Flat(Vec<i32>),
}

/// What a level service returns for one level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelResponse {
    #[serde(alias = "levelNumber")]
    pub level_number: u32,

    pub matrix: MatrixPayload,

    /// Column count for flat matrices; ignored for nested ones.
    #[serde(default, alias = "gridSize")]
    pub grid_size: Option<usize>,

    #[serde(default, alias = "imageSet", alias = "assetKeys")]
    pub asset_keys: Vec<String>,

    #[serde(default, alias = "timeLimit")]
    pub time_limit: Option<u32>,
}

impl LevelResponse {
    /// Validate and convert into a descriptor.
    ///
    /// Flat matrices require a `grid_size` that evenly divides the cell
    /// count; either way the resulting matrix goes through the full
    /// validator.
    pub fn into_descriptor(self) -> Result<LevelDescriptor, LevelError> {
        let matrix = match self.matrix {
            MatrixPayload::Nested(rows) => rows,
            MatrixPayload::Flat(cells) => {
                let grid_size = self.grid_size.unwrap_or(0);
                if grid_size == 0 || cells.len() % grid_size != 0 {
                    return Err(LevelError::BadFlatMatrix {
                        len: cells.len(),
                        grid_size,
                    });
                }
                cells.chunks(grid_size).map(<[i32]>::to_vec).collect()
            }
        };

        LevelDescriptor::new(self.level_number, matrix, self.asset_keys, self.time_limit)
    }

    /// Build the wire shape for a descriptor (nested matrix form).
    ///
    /// Used by generator-backed providers and test fixtures.
    #[must_use]
    pub fn from_descriptor(desc: &LevelDescriptor) -> Self {
        Self {
            level_number: desc.level_number(),
            matrix: MatrixPayload::Nested(desc.matrix().to_vec()),
            grid_size: None,
            asset_keys: desc.asset_keys().to_vec(),
            time_limit: desc.time_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_matrix_round_trip() {
        let json = r#"{
            "level_number": 2,
            "matrix": [[1, 2], [2, 1]],
            "asset_keys": ["strawberry", "banana"],
            "time_limit": 180
        }"#;

        let response: LevelResponse = serde_json::from_str(json).unwrap();
        let desc = response.into_descriptor().unwrap();

        assert_eq!(desc.level_number(), 2);
        assert_eq!((desc.rows(), desc.cols()), (2, 2));
        assert_eq!(desc.time_limit(), Some(180));
    }

    #[test]
    fn test_camel_case_aliases() {
        let json = r#"{
            "levelNumber": 1,
            "matrix": [1, 2, 1, 2],
            "gridSize": 2,
            "imageSet": ["strawberry", "banana"],
            "timeLimit": null
        }"#;

        let response: LevelResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.level_number, 1);
        assert_eq!(response.grid_size, Some(2));
        assert_eq!(response.time_limit, None);

        let desc = response.into_descriptor().unwrap();
        assert_eq!((desc.rows(), desc.cols()), (2, 2));
        assert_eq!(desc.asset_key_for(1), Some("strawberry"));
    }

    #[test]
    fn test_flat_matrix_reshapes_row_major() {
        let response = LevelResponse {
            level_number: 1,
            matrix: MatrixPayload::Flat(vec![1, 2, 3, 3, 2, 1]),
            grid_size: Some(3),
            asset_keys: vec![],
            time_limit: None,
        };

        let desc = response.into_descriptor().unwrap();
        assert_eq!(desc.matrix(), &[vec![1, 2, 3], vec![3, 2, 1]]);
    }

    #[test]
    fn test_flat_matrix_without_grid_size() {
        let response = LevelResponse {
            level_number: 1,
            matrix: MatrixPayload::Flat(vec![1, 1]),
            grid_size: None,
            asset_keys: vec![],
            time_limit: None,
        };

        assert_eq!(
            response.into_descriptor(),
            Err(LevelError::BadFlatMatrix { len: 2, grid_size: 0 })
        );
    }

    #[test]
    fn test_flat_matrix_indivisible() {
        let response = LevelResponse {
            level_number: 1,
            matrix: MatrixPayload::Flat(vec![1, 2, 3, 1, 2, 3, 4, 4]),
            grid_size: Some(3),
            asset_keys: vec![],
            time_limit: None,
        };

        assert_eq!(
            response.into_descriptor(),
            Err(LevelError::BadFlatMatrix { len: 8, grid_size: 3 })
        );
    }

    #[test]
    fn test_invalid_matrix_rejected() {
        let response = LevelResponse {
            level_number: 1,
            matrix: MatrixPayload::Nested(vec![vec![1, 1], vec![1, 2]]),
            grid_size: None,
            asset_keys: vec![],
            time_limit: None,
        };

        assert!(matches!(
            response.into_descriptor(),
            Err(LevelError::UnpairedValue { .. })
        ));
    }

    #[test]
    fn test_from_descriptor_round_trips() {
        let desc = LevelDescriptor::new(
            5,
            vec![vec![1, 2], vec![2, 1]],
            vec!["strawberry".to_string(), "banana".to_string()],
            Some(90),
        )
        .unwrap();

        let round_tripped = LevelResponse::from_descriptor(&desc)
            .into_descriptor()
            .unwrap();
        assert_eq!(round_tripped, desc);
    }
}
