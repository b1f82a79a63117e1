//! Full-screen TUI for EmojLover: the picker grid and the swipe viewer.

pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use emojlover_core::Config;
pub use runtime::TuiRuntime;

/// Runs the picker until the user quits.
///
/// # Errors
/// Fails when stdout is not a terminal or the terminal cannot be set up.
pub fn run_picker(config: &Config) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "EmojLover needs a terminal.\n\
             Use `emojlover list` for non-interactive output."
        );
    }

    let mut runtime = TuiRuntime::new(config)?;
    runtime.run()
}
