//! The card-matching state machine.
//!
//! ## Card States
//!
//! `FaceDown -> FaceUp -> Matched` (terminal), or `FaceUp -> FaceDown` when
//! a pair mismatches. At most two cards are face-up-unresolved at once,
//! system-wide: the third flip is rejected until the pending pair resolves.
//!
//! ## Deferred Resolution
//!
//! When the second card flips, the engine does not compare immediately: the
//! host is expected to wait its reveal delay (so a human sees both faces)
//! and then call [`MatchEngine::resolve`] with the handle from
//! [`MatchEngine::pending_resolution`]. The handle carries the session
//! generation; a handle from a discarded session mismatches and the call is
//! a no-op. That is the whole cancellation story: no timers, no threads.
//!
//! ## Countdown
//!
//! Timed levels count down one second per host [`MatchEngine::tick`].
//! Reaching zero completes the session with `TimedOut`, distinct from
//! `Solved`. Ticks after completion are no-ops, so nothing dangles.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{Grid, GridPos};
use crate::level::LevelDescriptor;
use crate::scoring::{score_delta, ScoreConfig};

use super::event::{CompletionReason, SessionEvent};

/// Token for a deferred resolution, bound to one session generation.
///
/// The host schedules its reveal delay, then hands the token back to
/// `resolve`. Tokens minted by an earlier session are silently ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct ResolutionHandle {
    generation: u64,
}

impl ResolutionHandle {
    /// The session generation this handle belongs to.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Live state of one playthrough of a single level.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    level: LevelDescriptor,
    grid: Grid,
    config: ScoreConfig,
    /// Face-up-but-unresolved positions: 0, 1, or 2 entries, never more.
    pending: SmallVec<[GridPos; 2]>,
    /// A second flip happened and resolution is owed.
    resolution_armed: bool,
    moves: u32,
    matched_pairs: usize,
    score: i64,
    time_remaining: Option<u32>,
    completion: Option<CompletionReason>,
    generation: u64,
}

impl MatchEngine {
    /// Start an engine for a validated level (generation 0).
    #[must_use]
    pub fn new(level: LevelDescriptor, config: ScoreConfig) -> Self {
        Self::with_generation(level, config, 0)
    }

    /// Start an engine tagged with a session generation.
    ///
    /// The controller bumps the generation on every start/restart/advance so
    /// deferred work from replaced sessions dies on arrival.
    #[must_use]
    pub fn with_generation(level: LevelDescriptor, config: ScoreConfig, generation: u64) -> Self {
        let grid = Grid::from_matrix(level.matrix());
        let time_remaining = level.time_limit();

        Self {
            level,
            grid,
            config,
            pending: SmallVec::new(),
            resolution_armed: false,
            moves: 0,
            matched_pairs: 0,
            score: 0,
            time_remaining,
            completion: None,
            generation,
        }
    }

    // === Observed State ===

    /// The level this session is playing.
    #[must_use]
    pub fn level(&self) -> &LevelDescriptor {
        &self.level
    }

    /// The live grid (read-only; mutation goes through flip/resolve).
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Moves taken (a move = two cards flipped, counted once).
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Pairs matched so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Total pairs on the grid.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.grid.total_pairs()
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Seconds left, `None` for untimed levels.
    #[must_use]
    pub fn time_remaining(&self) -> Option<u32> {
        self.time_remaining
    }

    /// How this session ended, if it has.
    #[must_use]
    pub fn completion(&self) -> Option<CompletionReason> {
        self.completion
    }

    /// True once the session has ended (solved or timed out).
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completion.is_some()
    }

    /// The generation this engine was created with.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // === Operations ===

    /// Flip the card at a position.
    ///
    /// Silently a no-op (empty vec, no move counted) when the position is off
    /// the grid, the card is matched or already face-up, two cards are
    /// already pending resolution, or the session has ended. UI races like a
    /// double-tap land here; they are not errors.
    ///
    /// When this flip is the second of a pair the move counter increments
    /// immediately and a resolution is armed; see
    /// [`pending_resolution`](Self::pending_resolution).
    pub fn flip(&mut self, pos: GridPos) -> Vec<SessionEvent> {
        if self.is_completed() || self.pending.len() >= 2 {
            return Vec::new();
        }

        let Some(card) = self.grid.get(pos) else {
            return Vec::new();
        };
        if card.matched || card.face_up {
            return Vec::new();
        }

        // Checked above; the position is on the grid.
        if let Some(card) = self.grid.get_mut(pos) {
            card.flip_up();
        }
        self.pending.push(pos);
        trace!(row = pos.row, col = pos.col, "card flipped");

        if self.pending.len() == 2 {
            self.moves += 1;
            self.resolution_armed = true;
        }

        vec![SessionEvent::CardFlipped { pos }]
    }

    /// Handle for the resolution owed after a second flip, if any.
    #[must_use]
    pub fn pending_resolution(&self) -> Option<ResolutionHandle> {
        self.resolution_armed.then_some(ResolutionHandle {
            generation: self.generation,
        })
    }

    /// Resolve the two pending cards.
    ///
    /// No-op for stale handles (generation mismatch), when fewer than two
    /// cards pend, or after completion. Equal values mark both cards matched
    /// and score the pair; unequal values flip both back down and apply the
    /// configured mismatch penalty (session score never drops below zero).
    pub fn resolve(&mut self, handle: ResolutionHandle) -> Vec<SessionEvent> {
        if handle.generation != self.generation {
            debug!(
                handle_generation = handle.generation,
                engine_generation = self.generation,
                "stale resolution handle ignored"
            );
            return Vec::new();
        }
        if self.is_completed() || self.pending.len() < 2 {
            return Vec::new();
        }

        let first = self.pending[0];
        let second = self.pending[1];
        self.pending.clear();
        self.resolution_armed = false;

        // Both pending positions were validated at flip time.
        let first_value = self.grid.get(first).map(|c| c.value);
        let second_value = self.grid.get(second).map(|c| c.value);
        let matched = first_value.is_some() && first_value == second_value;

        let mut events = vec![SessionEvent::PairResolved {
            matched,
            first,
            second,
        }];

        if matched {
            for pos in [first, second] {
                if let Some(card) = self.grid.get_mut(pos) {
                    card.mark_matched();
                }
            }
            self.matched_pairs += 1;

            let delta = score_delta(&self.config, self.moves, self.time_remaining);
            self.score += delta;
            debug!(delta, score = self.score, "pair matched");
            events.push(SessionEvent::ScoreChanged { score: self.score });

            if self.matched_pairs == self.total_pairs() {
                self.complete(CompletionReason::Solved, &mut events);
            }
        } else {
            for pos in [first, second] {
                if let Some(card) = self.grid.get_mut(pos) {
                    card.flip_down();
                }
            }

            if self.config.mismatch_penalty > 0 {
                let docked = (self.score - self.config.mismatch_penalty).max(0);
                if docked != self.score {
                    self.score = docked;
                    events.push(SessionEvent::ScoreChanged { score: self.score });
                }
            }
        }

        events
    }

    /// Advance the countdown by one second.
    ///
    /// No-op for untimed levels or after completion. Hitting zero completes
    /// the session with `TimedOut`.
    pub fn tick(&mut self) -> Vec<SessionEvent> {
        if self.is_completed() {
            return Vec::new();
        }
        let Some(remaining) = self.time_remaining else {
            return Vec::new();
        };

        let remaining = remaining.saturating_sub(1);
        self.time_remaining = Some(remaining);

        let mut events = Vec::new();
        if remaining == 0 {
            self.complete(CompletionReason::TimedOut, &mut events);
        }
        events
    }

    fn complete(&mut self, reason: CompletionReason, events: &mut Vec<SessionEvent>) {
        self.completion = Some(reason);
        debug!(?reason, score = self.score, moves = self.moves, "session completed");
        events.push(SessionEvent::Completed {
            reason,
            final_score: self.score,
            moves: self.moves,
        });
    }
}
