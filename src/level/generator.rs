//! Level generation.
//!
//! Levels 1-3 are fixed, predictable layouts for early play. Beyond that,
//! grids are generated: side length grows as a step function of the level
//! number (capped at 6), pair values are laid out twice each and shuffled
//! with a uniform Fisher-Yates pass, then reshaped row-major.
//!
//! ## Even-Area Policy
//!
//! `side * side` is odd for odd side lengths, which would leave one card
//! without a partner. The generator keeps grids rectangular by dropping a
//! column instead: an odd side produces a `side x (side - 1)` grid.
//!
//! ## Determinism
//!
//! Generation draws from a seeded [`GameRng`], so a fixed seed reproduces the
//! same sequence of levels. Unseeded output still satisfies the validator.

use crate::core::GameRng;
use crate::level::descriptor::LevelDescriptor;

/// Ordered display-asset pool; the first `pairs` entries become a level's
/// asset keys.
const ASSET_POOL: [&str; 15] = [
    "strawberry",
    "banana",
    "kiwi",
    "orange",
    "grape",
    "apple",
    "cherry",
    "lemon",
    "peach",
    "pear",
    "watermelon",
    "pineapple",
    "mango",
    "blueberry",
    "raspberry",
];

/// Highest level number with a fixed, predetermined layout.
pub const FIXED_LEVELS: u32 = 3;

/// Maximum generated grid side length.
const MAX_SIDE: u32 = 6;

/// Turns level numbers into validated level descriptors.
#[derive(Clone, Debug)]
pub struct LevelGenerator {
    rng: GameRng,
}

impl LevelGenerator {
    /// Create a generator with a fixed seed (reproducible output).
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a generator seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Generate the descriptor for a level number.
    ///
    /// Levels `1..=FIXED_LEVELS` return predetermined grids; higher levels
    /// are shuffled.
    pub fn generate(&mut self, level_number: u32) -> LevelDescriptor {
        match Self::fixed_level(level_number) {
            Some(desc) => desc,
            None => self.random_level(level_number),
        }
    }

    /// The predetermined layout for an early level, if there is one.
    ///
    /// These are static: no RNG involved, so they double as the known-good
    /// fallback when a provider hands back garbage.
    #[must_use]
    pub fn fixed_level(level_number: u32) -> Option<LevelDescriptor> {
        let (matrix, pairs, time_limit) = match level_number {
            1 => (
                // 2x3, 3 pairs
                vec![vec![1, 2, 3], vec![3, 1, 2]],
                3,
                120,
            ),
            2 => (
                // 3x4, 6 pairs
                vec![vec![1, 2, 3, 4], vec![5, 6, 1, 2], vec![3, 4, 5, 6]],
                6,
                180,
            ),
            3 => (
                // 4x4, 8 pairs
                vec![
                    vec![1, 2, 3, 4],
                    vec![5, 6, 7, 8],
                    vec![8, 7, 6, 5],
                    vec![4, 3, 2, 1],
                ],
                8,
                300,
            ),
            _ => return None,
        };

        let desc = LevelDescriptor::new(
            level_number,
            matrix,
            asset_keys_for(pairs),
            Some(time_limit),
        );
        debug_assert!(desc.is_ok(), "fixed levels must validate");
        desc.ok()
    }

    fn random_level(&mut self, level_number: u32) -> LevelDescriptor {
        let side = (3 + (level_number.saturating_sub(1)) / 2).min(MAX_SIDE) as usize;

        // Odd side -> drop a column to keep the cell count even.
        let rows = side;
        let cols = if side % 2 == 1 { side - 1 } else { side };
        let pairs = (rows * cols) / 2;

        let mut values: Vec<i32> = Vec::with_capacity(pairs * 2);
        for v in 1..=pairs as i32 {
            values.push(v);
            values.push(v);
        }
        self.rng.shuffle(&mut values);

        let matrix: Vec<Vec<i32>> = values.chunks(cols).map(<[i32]>::to_vec).collect();

        let desc = LevelDescriptor::new(
            level_number,
            matrix,
            asset_keys_for(pairs),
            Some(time_limit_for(level_number)),
        );
        debug_assert!(desc.is_ok(), "generated levels must validate");
        desc.expect("generated matrix is paired by construction")
    }
}

/// Asset keys for a pair count: the pool prefix, extended with synthesized
/// names when a large grid needs more keys than the pool holds.
#[must_use]
pub(crate) fn asset_keys_for(pairs: usize) -> Vec<String> {
    let mut keys: Vec<String> = ASSET_POOL
        .iter()
        .take(pairs)
        .map(|s| (*s).to_string())
        .collect();
    for n in ASSET_POOL.len()..pairs {
        keys.push(format!("fruit-{}", n + 1));
    }
    keys
}

/// Time limit in seconds for a generated level.
#[must_use]
pub(crate) fn time_limit_for(level_number: u32) -> u32 {
    60 + level_number * 30
}
