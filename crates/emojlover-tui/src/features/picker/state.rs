use std::collections::BTreeSet;

use emojlover_core::PickerSurface;

/// Ticks the live preview stays highlighted after a tap (~500ms at 60fps).
pub const LIVE_PULSE_TICKS: u8 = 30;

/// List-edit mode: marked tiles are deleted together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditState {
    pub active: bool,
    pub marked: BTreeSet<usize>,
}

impl EditState {
    pub fn toggle_mode(&mut self) {
        self.active = !self.active;
        self.marked.clear();
    }

    pub fn toggle_mark(&mut self, index: usize) {
        if !self.marked.remove(&index) {
            self.marked.insert(index);
        }
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marked.contains(&index)
    }
}

/// Picker screen state.
#[derive(Debug, Clone)]
pub struct PickerState {
    pub surface: PickerSurface,
    /// Keyboard focus on the grid.
    pub focus: usize,
    /// First visible grid row.
    pub scroll: usize,
    pub edit: EditState,
    /// Remaining highlight ticks for the live preview.
    pub live_pulse: u8,
}

impl PickerState {
    pub fn new(surface: PickerSurface) -> Self {
        Self {
            surface,
            focus: 0,
            scroll: 0,
            edit: EditState::default(),
            live_pulse: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.surface.collection().len()
    }

    pub fn is_animating(&self) -> bool {
        self.live_pulse > 0
    }

    /// Clamps focus after the collection shrank.
    pub fn clamp_focus(&mut self) {
        self.focus = self.focus.min(self.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_mode_clears_marks() {
        let mut edit = EditState::default();
        edit.toggle_mode();
        edit.toggle_mark(2);
        edit.toggle_mark(4);
        edit.toggle_mark(2);
        assert!(edit.is_marked(4));
        assert!(!edit.is_marked(2));

        edit.toggle_mode();
        assert!(!edit.active);
        assert!(edit.marked.is_empty());
    }
}
