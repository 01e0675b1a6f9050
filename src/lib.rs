//! # memory-match
//!
//! A card-matching (memory/concentration) game engine. The crate owns the
//! game logic only: level/matrix generation, the flip-compare-resolve state
//! machine, and scoring. Rendering, animation, and real networking live in a
//! presentation layer that consumes the events this crate emits.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven Time**: No threads and no internal timers. The host calls
//!    `tick()` once per second for the countdown and `resolve()` after its
//!    own reveal delay. Deferred work is guarded by a session generation
//!    token, so callbacks scheduled against a discarded session are no-ops.
//!
//! 2. **Injected Collaborators**: Level data arrives through the
//!    `LevelProvider` trait. No process-wide singletons.
//!
//! 3. **Silent Invalid Input**: Out-of-bounds or logically-invalid flips are
//!    ignored, not errors. They arise naturally from UI races (double-taps).
//!    Invalid *level data* is an error (`LevelError`) with a documented
//!    fallback.
//!
//! ## Modules
//!
//! - `core`: Cards, the grid, deterministic RNG
//! - `level`: Descriptors, generation, validation, the wire shape, providers
//! - `scoring`: Score configuration and the pure delta function
//! - `session`: The match engine state machine and session controller
//! - `error`: Level loading errors

pub mod core;
pub mod error;
pub mod level;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Card, CardId, GameRng, Grid, GridPos};

pub use crate::error::LevelError;

pub use crate::level::{
    check_matrix, validate_matrix, GeneratorProvider, LevelDescriptor, LevelGenerator,
    LevelProvider, LevelResponse, MatrixPayload, MockLevelProvider,
};

pub use crate::scoring::{score_delta, ScoreConfig};

pub use crate::session::{
    CompletionReason, MatchEngine, ResolutionHandle, SessionController, SessionEvent,
};
