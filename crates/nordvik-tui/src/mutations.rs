//! Cross-slice state mutations.
//!
//! Overlays and feature reducers return these mutations to request changes
//! outside their own slice. The main reducer applies them in order, so every
//! session transition flows through one place.

use nordvik_core::user::User;

/// Mutations for cross-slice state changes.
#[derive(Debug)]
pub enum StateMutation {
    Session(SessionMutation),
    SetNotice(Option<String>),
}

/// Session slice mutations requested by other slices.
#[derive(Debug)]
pub enum SessionMutation {
    /// Replace the current user and hide the sign-in view.
    Login(User),
    /// Clear the user and hide the sign-in view.
    Logout,
    ShowLoginView,
    HideLoginView,
    /// Append a linked account (no-op when a field is blank).
    AddLinkedAccount { login: String, secret: String },
    /// Remove a linked account by id (no-op for unknown ids).
    RemoveLinkedAccount { id: String },
    /// Register a warranty door purchased today (no-op when a field is blank).
    AddWarrantyDoor { model: String, serial: String },
}
