//! A single card on the grid.
//!
//! Every card carries a content value shared with exactly one other card on
//! the same grid, and cycles through three states:
//!
//! ```text
//! FaceDown -> FaceUp -> Matched   (terminal)
//!     ^          |
//!     +----------+   (mismatch flips back)
//! ```
//!
//! The grid owns its cards exclusively; observers only ever see `&Card`.

use serde::{Deserialize, Serialize};

/// Stable identifier for a card within one session.
///
/// Allocated row-major when the grid is built. IDs are not reused across
/// sessions and carry no meaning beyond identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Runtime state of one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Stable per-session identity.
    pub id: CardId,
    /// Content value, shared with exactly one other card on the grid.
    pub value: i32,
    /// Currently showing its face.
    pub face_up: bool,
    /// Resolved as part of a matched pair (terminal).
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, value: i32) -> Self {
        Self {
            id,
            value,
            face_up: false,
            matched: false,
        }
    }

    /// Turn the card face-up.
    pub fn flip_up(&mut self) {
        self.face_up = true;
    }

    /// Turn the card face-down (mismatch revert).
    pub fn flip_down(&mut self) {
        self.face_up = false;
    }

    /// Mark the card as matched. Matched cards stay face-up.
    pub fn mark_matched(&mut self) {
        self.matched = true;
        self.face_up = true;
    }

    /// Reset to the initial face-down, unmatched state.
    pub fn reset(&mut self) {
        self.face_up = false;
        self.matched = false;
    }
}
