//! Full-screen portal TUI for Nordvik One.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
pub use features::{catalog, session, statusline};
use nordvik_core::config::Config;
pub use runtime::PortalRuntime;

/// Runs the interactive portal.
pub fn run_portal(config: &Config) -> Result<()> {
    // The portal requires a terminal to render
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The portal requires a terminal.\n\
             Use `nordvik links list` for non-interactive output."
        );
    }

    let mut runtime = PortalRuntime::new(config.clone())?;
    runtime.run()?;

    // Print goodbye after the TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
