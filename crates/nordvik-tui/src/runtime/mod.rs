//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! The runtime uses an "inbox" for async event collection:
//! - Handlers send `UiEvent`s directly to `inbox_tx`
//! - Runtime drains `inbox_rx` each frame to collect results
//!
//! Auth tasks are never cancelled: when two attempts overlap, both resolve
//! and the later result overwrites state.

mod handlers;

use std::future::Future;
use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use nordvik_core::auth::MockAuthenticator;
use nordvik_core::config::Config;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick cadence; renders are capped at this rate.
const TICK_DURATION: Duration = Duration::from_millis(100);

/// How long to block waiting for terminal input each loop.
const POLL_DURATION: Duration = Duration::from_millis(50);

/// Full-screen portal runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop, panic, or quit.
pub struct PortalRuntime {
    /// Terminal instance.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state (split: tui + overlay).
    pub state: AppState,
    /// The mock auth service behind the `Authenticator` seam.
    authenticator: MockAuthenticator,
    /// Inbox sender - handlers send events here.
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    /// Inbox receiver - runtime drains this each frame.
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    /// Last time a Tick event was emitted.
    last_tick: Instant,
}

impl PortalRuntime {
    /// Creates a new portal runtime, entering the alternate screen.
    pub fn new(config: Config) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let authenticator = MockAuthenticator::new(config.auth_delay());
        let state = AppState::new(&config);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            authenticator,
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop until quit.
    pub fn run(&mut self) -> Result<()> {
        let result = self.event_loop();
        let _ = terminal::restore_terminal();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.tui.should_quit {
            let events = self.collect_events()?;

            for event in events {
                // Only Tick triggers render - this caps the frame rate at
                // tick cadence; other events batch renders to the next Tick.
                let marks_dirty = matches!(&event, UiEvent::Tick);

                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            if dirty {
                // State is a separate field, no borrow conflict with draw.
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects pending events: inbox results, terminal input, tick.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        while let Ok(event) = self.inbox_rx.try_recv() {
            events.push(event);
        }

        if event::poll(POLL_DURATION).context("Failed to poll terminal events")? {
            events.push(UiEvent::Terminal(
                event::read().context("Failed to read terminal event")?,
            ));
        }

        if self.last_tick.elapsed() >= TICK_DURATION {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => self.state.tui.should_quit = true,
            UiEffect::SpawnLogin { credentials } => {
                tracing::debug!("spawning sign-in attempt");
                self.spawn_effect(handlers::login(self.authenticator.clone(), credentials));
            }
            UiEffect::SpawnRegister { credentials } => {
                tracing::debug!("spawning registration attempt");
                self.spawn_effect(handlers::register(self.authenticator.clone(), credentials));
            }
            UiEffect::OpenBrowser { url } => handlers::open_browser(&url),
        }
    }

    /// Spawns a pure async handler and forwards its event to the inbox.
    fn spawn_effect(&self, handler: impl Future<Output = UiEvent> + Send + 'static) {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(handler.await);
        });
    }
}

impl Drop for PortalRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
