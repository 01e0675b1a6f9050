//! The session controller: glue between level sources and the match engine.
//!
//! Owns at most one [`MatchEngine`] and a monotonically increasing session
//! generation. Every start/restart/advance replaces the engine under a new
//! generation, which is what invalidates deferred resolutions and countdown
//! callbacks left over from the previous session.
//!
//! Collaborators are injected: the controller is generic over its
//! [`LevelProvider`], never reaching for a global service.

use im::Vector;
use tracing::{debug, warn};

use crate::core::GridPos;
use crate::error::LevelError;
use crate::level::{GeneratorProvider, LevelDescriptor, LevelGenerator, LevelProvider};
use crate::scoring::ScoreConfig;

use super::engine::{MatchEngine, ResolutionHandle};
use super::event::SessionEvent;

/// Owns one live session at a time.
pub struct SessionController<P: LevelProvider> {
    provider: P,
    config: ScoreConfig,
    engine: Option<MatchEngine>,
    level_number: u32,
    generation: u64,
    history: Vector<SessionEvent>,
}

impl SessionController<GeneratorProvider> {
    /// A controller with no external level source: levels come from the
    /// built-in generator.
    #[must_use]
    pub fn local(seed: u64) -> Self {
        Self::new(GeneratorProvider::new(seed))
    }
}

impl<P: LevelProvider> SessionController<P> {
    /// Create a controller with default scoring.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, ScoreConfig::default())
    }

    /// Create a controller with explicit scoring configuration.
    #[must_use]
    pub fn with_config(provider: P, config: ScoreConfig) -> Self {
        Self {
            provider,
            config,
            engine: None,
            level_number: 1,
            generation: 0,
            history: Vector::new(),
        }
    }

    // === Lifecycle ===

    /// Start a session for a level number.
    ///
    /// Fetches from the provider and validates. On failure nothing changes:
    /// the previous session (if any) keeps running and the error surfaces to
    /// the caller, who may prefer [`start_or_default`](Self::start_or_default).
    pub fn start(&mut self, level_number: u32) -> Result<(), LevelError> {
        let descriptor = self.provider.fetch(level_number)?.into_descriptor()?;
        self.start_session(descriptor);
        Ok(())
    }

    /// Start a session from an already-validated descriptor.
    pub fn start_with_descriptor(&mut self, descriptor: LevelDescriptor) {
        self.start_session(descriptor);
    }

    /// Start a session, falling back to the known-good default level when
    /// the provider fails or serves an invalid matrix.
    ///
    /// The fallback is the generator's fixed level 1, so the session always
    /// starts; the failure is logged, not surfaced.
    pub fn start_or_default(&mut self, level_number: u32) {
        if let Err(err) = self.start(level_number) {
            warn!(level_number, %err, "level load failed, falling back to default level");
            let fallback =
                LevelGenerator::fixed_level(1).expect("fixed level 1 always exists");
            self.start_session(fallback);
        }
    }

    /// Restart the current level with a freshly fetched grid.
    pub fn restart(&mut self) -> Result<(), LevelError> {
        self.start(self.level_number)
    }

    /// Advance to the next level.
    pub fn advance(&mut self) -> Result<(), LevelError> {
        self.start(self.level_number + 1)
    }

    /// End the current session without starting another (logout).
    ///
    /// Bumps the generation so any still-scheduled host callback dies.
    pub fn end_session(&mut self) {
        self.engine = None;
        self.generation += 1;
        debug!(generation = self.generation, "session ended");
    }

    fn start_session(&mut self, descriptor: LevelDescriptor) {
        self.generation += 1;
        self.level_number = descriptor.level_number();

        let event = SessionEvent::LevelStarted {
            level: descriptor.level_number(),
            rows: descriptor.rows(),
            cols: descriptor.cols(),
        };
        debug!(
            level = descriptor.level_number(),
            rows = descriptor.rows(),
            cols = descriptor.cols(),
            generation = self.generation,
            "session started"
        );

        self.engine = Some(MatchEngine::with_generation(
            descriptor,
            self.config.clone(),
            self.generation,
        ));
        self.record(std::slice::from_ref(&event));
    }

    // === Delegated Operations ===
    //
    // All of these are no-ops when no session is active.

    /// Flip the card at (row, col).
    pub fn flip(&mut self, row: usize, col: usize) -> Vec<SessionEvent> {
        let events = match self.engine.as_mut() {
            Some(engine) => engine.flip(GridPos::new(row, col)),
            None => Vec::new(),
        };
        self.record(&events);
        events
    }

    /// Handle for a deferred resolution, if one is owed.
    #[must_use]
    pub fn pending_resolution(&self) -> Option<ResolutionHandle> {
        self.engine.as_ref().and_then(MatchEngine::pending_resolution)
    }

    /// Resolve a pending pair. Stale handles are ignored.
    pub fn resolve(&mut self, handle: ResolutionHandle) -> Vec<SessionEvent> {
        let events = match self.engine.as_mut() {
            Some(engine) => engine.resolve(handle),
            None => Vec::new(),
        };
        self.record(&events);
        events
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> Vec<SessionEvent> {
        let events = match self.engine.as_mut() {
            Some(engine) => engine.tick(),
            None => Vec::new(),
        };
        self.record(&events);
        events
    }

    // === Observed State ===

    /// The live engine, if a session is active.
    #[must_use]
    pub fn engine(&self) -> Option<&MatchEngine> {
        self.engine.as_ref()
    }

    /// The level number of the current (or most recent) session.
    #[must_use]
    pub fn level_number(&self) -> u32 {
        self.level_number
    }

    /// The current session generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Every event emitted so far, oldest first.
    ///
    /// Backed by a persistent vector, so observers can snapshot the history
    /// cheaply with `clone()`.
    #[must_use]
    pub fn events(&self) -> &Vector<SessionEvent> {
        &self.history
    }

    fn record(&mut self, events: &[SessionEvent]) {
        for event in events {
            self.history.push_back(event.clone());
        }
    }
}
