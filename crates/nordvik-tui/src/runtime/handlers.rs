//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that return `UiEvent`. The runtime
//! spawns them via `spawn_effect` and sends results to the inbox. They do
//! NOT mutate state directly.

use nordvik_core::auth::{Authenticator, Credentials, MockAuthenticator};

use crate::events::UiEvent;

/// Runs a sign-in attempt against the authenticator.
pub async fn login(authenticator: MockAuthenticator, credentials: Credentials) -> UiEvent {
    let result = authenticator.authenticate(&credentials).await;
    UiEvent::LoginResult { result }
}

/// Runs a registration attempt against the authenticator.
pub async fn register(authenticator: MockAuthenticator, credentials: Credentials) -> UiEvent {
    let result = authenticator.register(&credentials).await;
    UiEvent::RegisterResult { result }
}

/// Opens a URL in the system browser, detached from the TUI process.
pub fn open_browser(url: &str) {
    tracing::info!(%url, "opening service link");
    if let Err(error) = open::that_detached(url) {
        tracing::warn!(%url, %error, "failed to open browser");
    }
}
