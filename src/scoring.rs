//! Scoring: configuration and the pure delta function.
//!
//! A matched pair is worth
//! `base_score + time_bonus - move_penalty`, floored at `min_score`, where:
//!
//! - `time_bonus = time_remaining * time_bonus_factor` (0 when untimed)
//! - `move_penalty = penalty_per_move * (moves - move_threshold)` once the
//!   move count passes the threshold
//!
//! All constants are configuration, not hard truths. The mismatch penalty is
//! configurable too, because the two source prototypes disagreed: one docked
//! points on a mismatch, the other didn't. The default is no penalty.

use serde::{Deserialize, Serialize};

/// Scoring constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreConfig {
    /// Points for a matched pair before bonuses and penalties.
    pub base_score: i64,
    /// Points per second of remaining time.
    pub time_bonus_factor: i64,
    /// Moves allowed before the move penalty kicks in.
    pub move_threshold: u32,
    /// Penalty per move above the threshold.
    pub penalty_per_move: i64,
    /// Floor for a single pair's delta.
    pub min_score: i64,
    /// Points docked on a mismatch (0 disables; session score never goes
    /// below zero).
    pub mismatch_penalty: i64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            base_score: 100,
            time_bonus_factor: 2,
            move_threshold: 10,
            penalty_per_move: 5,
            min_score: 10,
            mismatch_penalty: 0,
        }
    }
}

impl ScoreConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base score.
    #[must_use]
    pub fn with_base_score(mut self, base: i64) -> Self {
        self.base_score = base;
        self
    }

    /// Set the per-second time bonus factor.
    #[must_use]
    pub fn with_time_bonus_factor(mut self, factor: i64) -> Self {
        self.time_bonus_factor = factor;
        self
    }

    /// Set the move threshold.
    #[must_use]
    pub fn with_move_threshold(mut self, threshold: u32) -> Self {
        self.move_threshold = threshold;
        self
    }

    /// Set the penalty per move above the threshold.
    #[must_use]
    pub fn with_penalty_per_move(mut self, penalty: i64) -> Self {
        self.penalty_per_move = penalty;
        self
    }

    /// Set the per-pair minimum delta.
    #[must_use]
    pub fn with_min_score(mut self, min: i64) -> Self {
        self.min_score = min;
        self
    }

    /// Set the mismatch penalty (0 disables).
    #[must_use]
    pub fn with_mismatch_penalty(mut self, penalty: i64) -> Self {
        self.mismatch_penalty = penalty;
        self
    }
}

/// Score delta for a matched pair.
///
/// Pure function of the move count so far and the remaining time
/// (`None` for untimed levels).
#[must_use]
pub fn score_delta(config: &ScoreConfig, moves: u32, time_remaining: Option<u32>) -> i64 {
    let time_bonus = i64::from(time_remaining.unwrap_or(0)) * config.time_bonus_factor;
    let excess_moves = i64::from(moves.saturating_sub(config.move_threshold));
    let move_penalty = excess_moves * config.penalty_per_move;

    (config.base_score + time_bonus - move_penalty).max(config.min_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScoreConfig::default();
        assert_eq!(config.base_score, 100);
        assert_eq!(config.time_bonus_factor, 2);
        assert_eq!(config.move_threshold, 10);
        assert_eq!(config.penalty_per_move, 5);
        assert_eq!(config.min_score, 10);
        assert_eq!(config.mismatch_penalty, 0);
    }

    #[test]
    fn test_builder() {
        let config = ScoreConfig::new()
            .with_base_score(50)
            .with_mismatch_penalty(2)
            .with_min_score(1);

        assert_eq!(config.base_score, 50);
        assert_eq!(config.mismatch_penalty, 2);
        assert_eq!(config.min_score, 1);
    }

    #[test]
    fn test_untimed_base_only() {
        let config = ScoreConfig::default();
        assert_eq!(score_delta(&config, 1, None), 100);
    }

    #[test]
    fn test_time_bonus() {
        let config = ScoreConfig::default();
        // 30 seconds left * factor 2 = +60
        assert_eq!(score_delta(&config, 1, Some(30)), 160);
    }

    #[test]
    fn test_move_penalty_above_threshold() {
        let config = ScoreConfig::default();
        // At the threshold: no penalty yet
        assert_eq!(score_delta(&config, 10, None), 100);
        // 4 moves over: -20
        assert_eq!(score_delta(&config, 14, None), 80);
    }

    #[test]
    fn test_floor_at_min_score() {
        let config = ScoreConfig::default();
        // 40 excess moves would be -200, floored at 10
        assert_eq!(score_delta(&config, 50, None), 10);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = ScoreConfig::new().with_mismatch_penalty(5);
        let json = serde_json::to_string(&config).unwrap();
        let back: ScoreConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
