//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

use nordvik_core::auth::Credentials;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Spawn an async sign-in attempt against the authenticator.
    ///
    /// Carries no cancellation token: overlapping attempts each resolve
    /// independently and the later result overwrites state.
    SpawnLogin { credentials: Credentials },

    /// Spawn an async registration attempt.
    SpawnRegister { credentials: Credentials },

    /// Open a URL in the system browser.
    OpenBrowser { url: String },
}
