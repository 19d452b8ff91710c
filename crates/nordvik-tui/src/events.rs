//! UI event types.
//!
//! All external inputs (terminal, async auth results) are converted to
//! `UiEvent` before being processed by the reducer.
//!
//! ## Inbox Pattern
//!
//! Async operations send their result events directly to the runtime's
//! inbox; the runtime drains the inbox each frame. There is no cancellation:
//! the mock auth round trip always runs to completion, and when two attempts
//! overlap the later result simply overwrites state.

use crossterm::event::Event as CrosstermEvent;
use nordvik_core::auth::AuthError;
use nordvik_core::user::User;

/// Unified event enum for the portal TUI.
///
/// All inputs are converted to this type before processing. The reducer
/// (`update`) pattern-matches on these events to update state.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (for the busy spinner).
    Tick,

    /// Terminal input event (key, resize).
    Terminal(CrosstermEvent),

    /// Async sign-in attempt completed.
    LoginResult { result: Result<User, AuthError> },

    /// Async registration attempt completed.
    RegisterResult { result: Result<(), AuthError> },
}
