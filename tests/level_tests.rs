//! Level generation and validation tests.
//!
//! The load-bearing property: the validator accepts everything the generator
//! (and both providers) produce, for any level number and any seed.

use proptest::prelude::*;

use memory_match::{
    validate_matrix, GeneratorProvider, LevelGenerator, LevelProvider, LevelResponse,
    MockLevelProvider,
};

// =============================================================================
// Generator / Validator Properties
// =============================================================================

proptest! {
    /// Every generated level has an even cell count and exactly-paired values.
    #[test]
    fn prop_generator_output_validates(seed in any::<u64>(), level in 1u32..=40) {
        let mut generator = LevelGenerator::new(seed);
        let desc = generator.generate(level);

        prop_assert!(validate_matrix(desc.matrix()));
        prop_assert_eq!((desc.rows() * desc.cols()) % 2, 0);
        prop_assert_eq!(desc.asset_keys().len(), desc.total_pairs());
    }

    /// Seeded generation is reproducible.
    #[test]
    fn prop_seeded_generation_reproducible(seed in any::<u64>(), level in 1u32..=20) {
        let mut gen1 = LevelGenerator::new(seed);
        let mut gen2 = LevelGenerator::new(seed);

        prop_assert_eq!(gen1.generate(level), gen2.generate(level));
    }

    /// Mock provider responses survive the full wire -> descriptor path.
    #[test]
    fn prop_mock_provider_validates(seed in any::<u64>(), level in 1u32..=12) {
        let mut provider = MockLevelProvider::new(seed);
        let desc = provider.fetch(level).unwrap().into_descriptor().unwrap();

        prop_assert!(validate_matrix(desc.matrix()));
    }
}

// =============================================================================
// Wire Shape
// =============================================================================

/// A camelCase response with a flat matrix parses and reshapes.
#[test]
fn test_parse_camel_case_flat_response() {
    let json = r#"{
        "levelNumber": 3,
        "matrix": [1, 2, 3, 4, 4, 3, 2, 1],
        "gridSize": 4,
        "imageSet": ["strawberry", "banana", "kiwi", "orange"],
        "timeLimit": 180
    }"#;

    let response: LevelResponse = serde_json::from_str(json).unwrap();
    let desc = response.into_descriptor().unwrap();

    assert_eq!((desc.rows(), desc.cols()), (2, 4));
    assert_eq!(desc.total_pairs(), 4);
    assert_eq!(desc.time_limit(), Some(180));
    assert_eq!(desc.asset_key_for(3), Some("kiwi"));
}

/// Generator-backed provider serves the generator's descriptor unchanged.
#[test]
fn test_generator_provider_round_trip() {
    let mut generator = LevelGenerator::new(42);
    let mut provider = GeneratorProvider::new(42);

    let direct = generator.generate(8);
    let via_wire = provider.fetch(8).unwrap().into_descriptor().unwrap();

    assert_eq!(direct, via_wire);
}

/// An invalid matrix off the wire is rejected, not accepted as a session.
#[test]
fn test_invalid_wire_matrix_rejected() {
    let json = r#"{
        "level_number": 1,
        "matrix": [[1, 2, 3], [1, 2, 3], [1, 2, 3]],
        "asset_keys": []
    }"#;

    let response: LevelResponse = serde_json::from_str(json).unwrap();
    assert!(response.into_descriptor().is_err());
}
