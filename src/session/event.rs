//! Session events.
//!
//! The engine never calls into the presentation layer. Every state change is
//! announced as a `SessionEvent`; operations return the events they caused
//! and the controller keeps the full history. Observers subscribe to events
//! and read published state; they never mutate engine-owned data.

use serde::{Deserialize, Serialize};

use crate::core::GridPos;

/// Why a session ended. The two outcomes are mutually exclusive: whichever
/// fires first wins and the session stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionReason {
    /// Every pair was matched.
    Solved,
    /// The countdown hit zero first.
    TimedOut,
}

/// A state change emitted by the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new session began.
    LevelStarted {
        level: u32,
        rows: usize,
        cols: usize,
    },
    /// A card turned face-up.
    CardFlipped { pos: GridPos },
    /// Two pending cards were compared.
    PairResolved {
        matched: bool,
        first: GridPos,
        second: GridPos,
    },
    /// The score changed (match reward or mismatch penalty).
    ScoreChanged { score: i64 },
    /// The session ended.
    Completed {
        reason: CompletionReason,
        final_score: i64,
        moves: u32,
    },
}
