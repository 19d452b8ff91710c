//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components that temporarily take over keyboard
//! input. Each overlay is self-contained: it owns its state, key handler,
//! and render function.
//!
//! - `login.rs`: sign-in / registration form
//! - `accounts.rs`: linked-accounts manager
//! - `warranty.rs`: warranty door registration
//! - `profile.rs`: installer profile (display only)
//! - `render_utils.rs`: shared popup rendering helpers

pub mod accounts;
pub mod login;
pub mod profile;
pub mod render_utils;
pub mod warranty;

pub use accounts::AccountsState;
use crossterm::event::KeyEvent;
pub use login::{FormMode, LoginState};
pub use profile::ProfileState;
use ratatui::Frame;
use ratatui::layout::Rect;
pub use warranty::WarrantyState;

use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::state::TuiState;

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub mutations: Vec<StateMutation>,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            mutations: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    #[must_use]
    pub fn with_mutations(mut self, mutations: Vec<StateMutation>) -> Self {
        self.mutations = mutations;
        self
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

/// The active modal overlay, if any.
#[derive(Debug)]
pub enum Overlay {
    Login(LoginState),
    Accounts(AccountsState),
    Warranty(WarrantyState),
    Profile(ProfileState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        match self {
            Overlay::Login(state) => state.render(frame, area, tui),
            Overlay::Accounts(state) => state.render(frame, area, tui),
            Overlay::Warranty(state) => state.render(frame, area, tui),
            Overlay::Profile(state) => state.render(frame, area, tui),
        }
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Login(state) => state.handle_key(tui, key),
            Overlay::Accounts(state) => state.handle_key(tui, key),
            Overlay::Warranty(state) => state.handle_key(tui, key),
            Overlay::Profile(state) => state.handle_key(tui, key),
        }
    }
}

/// Routes a key to the active overlay. Returns `None` when no overlay is
/// open (the key falls through to the main screen).
pub fn handle_overlay_key(
    tui: &TuiState,
    overlay: &mut Option<Overlay>,
    key: KeyEvent,
) -> Option<OverlayUpdate> {
    overlay.as_mut().map(|active| active.handle_key(tui, key))
}
