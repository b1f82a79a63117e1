//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components that take over keyboard and mouse input
//! while open. Each overlay owns its state, input handlers and render
//! function.
//!
//! - `viewer.rs`: full-screen swipeable emoji viewer
//! - `render_utils.rs`: shared rendering helpers

pub mod render_utils;
pub mod viewer;

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
pub use viewer::ViewerState;

use crate::effects::UiEffect;

/// Transition returned by overlay input handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay input handlers.
#[derive(Debug, PartialEq, Eq)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
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
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

#[derive(Debug)]
pub enum Overlay {
    Viewer(ViewerState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::Viewer(v) => v.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Viewer(v) => v.handle_key(key),
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> OverlayUpdate {
        match self {
            Overlay::Viewer(v) => v.handle_mouse(mouse, area),
        }
    }
}

/// Extension trait for `Option<Overlay>` providing convenience render helpers.
pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect);
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(overlay) = self {
            overlay.render(frame, area);
        }
    }
}
