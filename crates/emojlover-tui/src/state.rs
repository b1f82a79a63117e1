//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── picker: PickerState   (collection, selection, focus, edit mode)
//! │   ├── viewport: Rect        (last known terminal size)
//! │   └── rng: StdRng           (live preview picks)
//! └── overlay: Option<Overlay>  (the full-screen viewer, when open)
//! ```
//!
//! State is split between `TuiState` and `Option<Overlay>` so overlay
//! handlers can borrow the overlay mutably while reading `TuiState`.

use emojlover_core::{Config, Palette};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::layout::Rect;

use crate::features::picker::PickerState;
use crate::overlays::Overlay;

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates state with a caller-provided RNG (seeded in tests).
    pub fn with_rng(config: &Config, rng: StdRng) -> Self {
        Self {
            tui: TuiState::new(config, rng),
            overlay: None,
        }
    }

    /// Whether a viewer is currently presented.
    pub fn viewer_open(&self) -> bool {
        matches!(self.overlay, Some(Overlay::Viewer(_)))
    }
}

/// TUI application state (non-overlay).
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    pub picker: PickerState,
    /// Heading shown above the live preview.
    pub title: String,
    pub palette: Palette,
    pub min_swipe_distance: u16,
    /// Terminal area, updated from `UiEvent::Frame`.
    pub viewport: Rect,
    pub rng: StdRng,
}

impl TuiState {
    pub fn new(config: &Config, rng: StdRng) -> Self {
        Self {
            should_quit: false,
            picker: PickerState::new(config.picker()),
            title: config.title.clone(),
            palette: config.palette(),
            min_swipe_distance: config.min_swipe_distance,
            viewport: Rect::default(),
            rng,
        }
    }
}
