//! Events fed to the reducer.

use crossterm::event::Event;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Animation tick.
    Tick,
    /// Current terminal size, sent before the other events of a loop pass.
    Frame { width: u16, height: u16 },
    /// Raw terminal input.
    Terminal(Event),
    /// Ctrl+C signal observed by the runtime.
    Interrupt,
}
