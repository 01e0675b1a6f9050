//! Core engine types: cards, the grid, and deterministic RNG.
//!
//! These are the fundamental building blocks the rest of the crate is built
//! on. Nothing in here knows about levels, scoring, or sessions.

pub mod card;
pub mod grid;
pub mod rng;

pub use card::{Card, CardId};
pub use grid::{Grid, GridPos};
pub use rng::GameRng;
