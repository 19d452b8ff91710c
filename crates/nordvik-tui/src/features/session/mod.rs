//! Session feature slice.
//!
//! Wraps the core [`nordvik_core::session::Session`] store: applies
//! cross-slice mutations to it and turns async auth results into mutations
//! plus an instruction for the login overlay.

mod update;

pub use update::{LoginOverlayAction, apply, handle_login_result, handle_register_result};
