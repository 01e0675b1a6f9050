//! Session layer: the match engine state machine and its controller.
//!
//! ## Key Types
//!
//! - `MatchEngine`: owns the live grid; flip, resolve, tick
//! - `SessionController`: one engine at a time; start/restart/advance
//! - `SessionEvent`: typed events the presentation layer subscribes to
//! - `ResolutionHandle`: cancellable deferred-resolution token

pub mod controller;
pub mod engine;
pub mod event;

pub use controller::SessionController;
pub use engine::{MatchEngine, ResolutionHandle};
pub use event::{CompletionReason, SessionEvent};
