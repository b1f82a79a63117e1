//! Full-screen TUI runtime.
//!
//! A single-threaded loop: poll the interrupt flag, feed terminal events
//! through the reducer, execute effects, draw when something changed.

use std::io::{Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use emojlover_core::{Config, interrupt};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick cadence while the live preview is pulsing (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll timeout when nothing is animating.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Owns the terminal and state. Restores the terminal on drop.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    last_tick: Instant,
}

impl TuiRuntime {
    pub fn new(config: &Config) -> Result<Self> {
        // Panic hook goes in before the alternate screen.
        terminal::install_panic_hook();
        interrupt::set_restore_hook(|| {
            let _ = terminal::restore_terminal();
        });
        interrupt::reset();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        Ok(Self {
            terminal,
            state: AppState::new(config),
            last_tick: Instant::now(),
        })
    }

    /// Runs the event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_mouse_capture()?;
        info!(
            emojis = self.state.tui.picker.len(),
            "picker session started"
        );

        let result = self.event_loop();

        let _ = terminal::disable_mouse_capture();
        info!("picker session ended");
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.tui.should_quit {
            take_interrupt(&mut self.state)?;

            let size = self.terminal.size()?;
            self.dispatch(UiEvent::Frame {
                width: size.width,
                height: size.height,
            });

            // Draw before reading the next input.
            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }

            let mut events = Vec::new();
            dirty = self.collect_events(&mut events)?;
            for event in events {
                self.dispatch(event);
            }
        }

        Ok(())
    }

    /// Polls the terminal and appends what arrived. Returns whether a redraw
    /// is needed.
    fn collect_events(&mut self, events: &mut Vec<UiEvent>) -> Result<bool> {
        let animating = self.state.tui.picker.is_animating();
        let poll_duration = if animating {
            FRAME_DURATION.saturating_sub(self.last_tick.elapsed())
        } else {
            IDLE_POLL_DURATION
        };

        let mut dirty = false;
        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
            dirty = true;
        }

        if animating && self.last_tick.elapsed() >= FRAME_DURATION {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
            dirty = true;
        } else if !animating {
            self.last_tick = Instant::now();
        }

        Ok(dirty)
    }

    fn dispatch(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                debug!("quit requested");
                self.state.tui.should_quit = true;
            }
            UiEffect::Bell => {
                let backend = self.terminal.backend_mut();
                let _ = backend.write_all(b"\x07");
                let _ = backend.flush();
            }
        }
    }
}

/// Turns a pending Ctrl+C into a quit and an `InterruptedError`, so the
/// process exits with status 130.
fn take_interrupt(state: &mut AppState) -> Result<()> {
    if !interrupt::is_interrupted() {
        return Ok(());
    }
    interrupt::reset();
    info!("interrupted");
    update::update(state, UiEvent::Interrupt);
    Err(interrupt::InterruptedError.into())
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}

#[cfg(test)]
mod tests {
    use emojlover_core::Config;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_interrupt_quits_with_interrupted_error() {
        let mut state = AppState::with_rng(&Config::default(), StdRng::seed_from_u64(7));
        assert!(take_interrupt(&mut state).is_ok());
        assert!(!state.tui.should_quit);

        interrupt::trigger_ctrl_c();
        let err = take_interrupt(&mut state).unwrap_err();
        assert!(err.downcast_ref::<interrupt::InterruptedError>().is_some());
        assert!(state.tui.should_quit);
        assert!(!interrupt::is_interrupted());
    }
}
