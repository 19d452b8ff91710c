//! Application state composition.
//!
//! This module defines the top-level state hierarchy for the TUI:
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── session: Session        (current user, sign-in view flag)
//! │   ├── catalog: CatalogState   (service links, selection)
//! │   ├── notice: Option<String>  (one-line status message)
//! │   └── spinner_frame: usize    (busy animation)
//! └── overlay: Option<Overlay>    (modal overlays)
//! ```
//!
//! ## Split State Architecture
//!
//! State is split between `TuiState` (non-overlay) and `Option<Overlay>`:
//! overlay handlers can take `&mut self` and read `&TuiState` at the same
//! time without borrow conflicts.

use nordvik_core::config::Config;
use nordvik_core::session::Session;

use crate::catalog::CatalogState;
use crate::overlays::Overlay;

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    /// Creates a fresh, signed-out portal state from config.
    pub fn new(config: &Config) -> Self {
        Self {
            tui: TuiState::new(config),
            overlay: None,
        }
    }
}

/// TUI application state (non-overlay).
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// The single owned session object (user + sign-in view flag).
    pub session: Session,
    /// Service catalog state (links, selection).
    pub catalog: CatalogState,
    /// One-line status message shown in the status bar.
    pub notice: Option<String>,
    /// Spinner animation frame counter (busy forms).
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            session: Session::new(),
            catalog: CatalogState::new(config.catalog()),
            notice: None,
            spinner_frame: 0,
        }
    }
}
