//! Default command: the interactive portal.

use anyhow::Result;
use nordvik_core::config::Config;

pub fn run(config: &Config) -> Result<()> {
    nordvik_tui::run_portal(config)
}
