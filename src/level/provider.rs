//! Level providers: the injection seam between sessions and level sources.
//!
//! Real deployments would put an HTTP client behind `LevelProvider`. This
//! crate ships two in-memory implementations:
//!
//! - `MockLevelProvider`: stands in for a level server, serving shuffled
//!   flat-matrix responses per level (the wire shape real backends use).
//! - `GeneratorProvider`: adapts `LevelGenerator` so a fully offline caller
//!   can still drive a `SessionController`.

use crate::core::GameRng;
use crate::error::LevelError;
use crate::level::generator::{self, LevelGenerator};
use crate::level::response::{LevelResponse, MatrixPayload};

/// Source of level data for a session controller.
///
/// `fetch` takes `&mut self` because providers may hold RNG or connection
/// state. Failures surface as `LevelError::Provider`; the controller decides
/// whether to fall back.
pub trait LevelProvider {
    /// Fetch the wire response for a level number.
    fn fetch(&mut self, level_number: u32) -> Result<LevelResponse, LevelError>;
}

/// Per-level grid shape served by the mock: (columns, pairs).
const MOCK_CONFIGS: [(usize, usize); 6] = [
    (2, 2),  // level 1: 2x2
    (4, 4),  // level 2: 2x4
    (4, 6),  // level 3: 3x4
    (4, 8),  // level 4: 4x4
    (5, 10), // level 5: 4x5
    (6, 18), // level 6: 6x6
];

/// In-memory stand-in for a level server.
///
/// Serves flat shuffled matrices with a `grid_size`, the same shape a mock
/// backend would return. Levels past the table are capped at the last config.
/// Deterministic under a fixed seed.
#[derive(Clone, Debug)]
pub struct MockLevelProvider {
    rng: GameRng,
}

impl MockLevelProvider {
    /// Create a mock provider with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a mock provider seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }
}

impl LevelProvider for MockLevelProvider {
    fn fetch(&mut self, level_number: u32) -> Result<LevelResponse, LevelError> {
        let capped = level_number.clamp(1, MOCK_CONFIGS.len() as u32);
        let (cols, pairs) = MOCK_CONFIGS[(capped - 1) as usize];

        let mut cells: Vec<i32> = Vec::with_capacity(pairs * 2);
        for v in 1..=pairs as i32 {
            cells.push(v);
            cells.push(v);
        }
        self.rng.shuffle(&mut cells);

        Ok(LevelResponse {
            level_number,
            matrix: MatrixPayload::Flat(cells),
            grid_size: Some(cols),
            asset_keys: generator::asset_keys_for(pairs),
            time_limit: Some(generator::time_limit_for(capped)),
        })
    }
}

/// Adapts a [`LevelGenerator`] to the provider seam.
#[derive(Clone, Debug)]
pub struct GeneratorProvider {
    generator: LevelGenerator,
}

impl GeneratorProvider {
    /// Create a generator-backed provider with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            generator: LevelGenerator::new(seed),
        }
    }

    /// Create a generator-backed provider seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            generator: LevelGenerator::from_entropy(),
        }
    }
}

impl LevelProvider for GeneratorProvider {
    fn fetch(&mut self, level_number: u32) -> Result<LevelResponse, LevelError> {
        Ok(LevelResponse::from_descriptor(
            &self.generator.generate(level_number),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::validator::validate_matrix;

    #[test]
    fn test_mock_responses_validate() {
        let mut provider = MockLevelProvider::new(42);
        for level in 1..=8 {
            let desc = provider.fetch(level).unwrap().into_descriptor().unwrap();
            assert!(validate_matrix(desc.matrix()), "level {} invalid", level);
        }
    }

    #[test]
    fn test_mock_shapes() {
        let mut provider = MockLevelProvider::new(42);

        let l1 = provider.fetch(1).unwrap().into_descriptor().unwrap();
        assert_eq!((l1.rows(), l1.cols()), (2, 2));

        let l3 = provider.fetch(3).unwrap().into_descriptor().unwrap();
        assert_eq!((l3.rows(), l3.cols()), (3, 4));

        let l6 = provider.fetch(6).unwrap().into_descriptor().unwrap();
        assert_eq!((l6.rows(), l6.cols()), (6, 6));
    }

    #[test]
    fn test_mock_caps_past_table() {
        let mut provider = MockLevelProvider::new(42);
        let l99 = provider.fetch(99).unwrap();

        // Level number flows through; the shape is capped at 6x6.
        assert_eq!(l99.level_number, 99);
        let desc = l99.into_descriptor().unwrap();
        assert_eq!((desc.rows(), desc.cols()), (6, 6));
    }

    #[test]
    fn test_mock_is_deterministic() {
        let mut p1 = MockLevelProvider::new(7);
        let mut p2 = MockLevelProvider::new(7);

        assert_eq!(p1.fetch(4).unwrap(), p2.fetch(4).unwrap());
    }

    #[test]
    fn test_mock_serves_asset_keys_and_time_limit() {
        let mut provider = MockLevelProvider::new(42);
        let response = provider.fetch(2).unwrap();

        assert_eq!(response.asset_keys.len(), 4);
        assert_eq!(response.asset_keys[0], "strawberry");
        assert_eq!(response.time_limit, Some(120));
    }

    #[test]
    fn test_generator_provider() {
        let mut provider = GeneratorProvider::new(42);
        let desc = provider.fetch(5).unwrap().into_descriptor().unwrap();
        assert_eq!(desc.level_number(), 5);
        assert!(validate_matrix(desc.matrix()));
    }
}
