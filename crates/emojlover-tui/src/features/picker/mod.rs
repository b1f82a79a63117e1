//! Picker screen: title, live preview slot and the emoji grid.

pub mod layout;
mod render;
mod state;
mod update;

pub use layout::{GridGeometry, PickerLayout};
pub use render::render_picker;
pub use state::{EditState, LIVE_PULSE_TICKS, PickerState};
pub use update::{PickerOutcome, handle_key, handle_mouse, tick};
