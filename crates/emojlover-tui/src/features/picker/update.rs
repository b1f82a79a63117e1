//! Picker input handling.
//!
//! Tile taps record a selection and hand a snapshot cursor back to the
//! reducer, which presents it as the viewer overlay.

use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use emojlover_core::ViewerCursor;
use ratatui::layout::Position;
use tracing::{debug, info};

use super::layout::{GridGeometry, PickerLayout};
use super::state::{LIVE_PULSE_TICKS, PickerState};
use crate::state::TuiState;

/// What the reducer should do after a picker input.
#[derive(Debug)]
pub enum PickerOutcome {
    Stay,
    Open(ViewerCursor),
    Quit,
}

fn geometry(tui: &TuiState) -> GridGeometry {
    PickerLayout::compute(tui.viewport).grid_geometry()
}

pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> PickerOutcome {
    let grid = geometry(tui);
    let editing = tui.picker.edit.active;

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => move_focus(&mut tui.picker, &grid, Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => {
            move_focus(&mut tui.picker, &grid, Direction::Right);
        }
        KeyCode::Up | KeyCode::Char('k') => move_focus(&mut tui.picker, &grid, Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => move_focus(&mut tui.picker, &grid, Direction::Down),
        KeyCode::Char('e') => toggle_edit(&mut tui.picker),
        KeyCode::Esc if editing => toggle_edit(&mut tui.picker),
        KeyCode::Esc | KeyCode::Char('q') => return PickerOutcome::Quit,
        KeyCode::Enter | KeyCode::Char(' ') if editing => {
            if tui.picker.len() > 0 {
                let focus = tui.picker.focus;
                tui.picker.edit.toggle_mark(focus);
            }
        }
        KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('d') if editing => {
            delete_marked(&mut tui.picker, &grid);
        }
        KeyCode::Enter => {
            let focus = tui.picker.focus;
            return select_tile(&mut tui.picker, focus);
        }
        KeyCode::Char(' ' | 'r') => tap_live(tui),
        _ => {}
    }
    PickerOutcome::Stay
}

pub fn handle_mouse(tui: &mut TuiState, mouse: MouseEvent) -> PickerOutcome {
    let layout = PickerLayout::compute(tui.viewport);
    let grid = layout.grid_geometry();
    let at = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::ScrollUp if grid.area.contains(at) => {
            tui.picker.scroll = tui.picker.scroll.saturating_sub(1);
        }
        MouseEventKind::ScrollDown if grid.area.contains(at) => {
            let max = grid.max_scroll(tui.picker.len());
            tui.picker.scroll = (tui.picker.scroll + 1).min(max);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if layout.edit_button.contains(at) {
                toggle_edit(&mut tui.picker);
            } else if layout.live.contains(at) {
                tap_live(tui);
            } else if let Some(index) = grid.tile_at(at, tui.picker.scroll, tui.picker.len()) {
                tui.picker.focus = index;
                if tui.picker.edit.active {
                    tui.picker.edit.toggle_mark(index);
                } else {
                    return select_tile(&mut tui.picker, index);
                }
            }
        }
        _ => {}
    }
    PickerOutcome::Stay
}

/// Advances the live preview animation.
pub fn tick(picker: &mut PickerState) {
    picker.live_pulse = picker.live_pulse.saturating_sub(1);
}

fn select_tile(picker: &mut PickerState, index: usize) -> PickerOutcome {
    if picker.surface.select(index).is_none() {
        return PickerOutcome::Stay;
    }
    picker
        .surface
        .present()
        .map_or(PickerOutcome::Stay, PickerOutcome::Open)
}

fn tap_live(tui: &mut TuiState) {
    let glyph = tui.picker.surface.tap_live(&mut tui.rng);
    debug!(%glyph, "live preview tapped");
    tui.picker.live_pulse = LIVE_PULSE_TICKS;
}

fn toggle_edit(picker: &mut PickerState) {
    picker.edit.toggle_mode();
    debug!(active = picker.edit.active, "edit mode toggled");
}

/// Deletes the marked tiles, or the focused tile when nothing is marked.
fn delete_marked(picker: &mut PickerState, grid: &GridGeometry) {
    if picker.len() == 0 {
        return;
    }
    let positions = if picker.edit.marked.is_empty() {
        BTreeSet::from([picker.focus])
    } else {
        std::mem::take(&mut picker.edit.marked)
    };
    let removed = picker.surface.delete(&positions);
    info!(removed, remaining = picker.len(), "deleted emojis");

    picker.clamp_focus();
    picker.scroll = picker.scroll.min(grid.max_scroll(picker.len()));
    picker.scroll = grid.scroll_to(picker.scroll, picker.focus);
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Left,
    Right,
    Up,
    Down,
}

fn move_focus(picker: &mut PickerState, grid: &GridGeometry, direction: Direction) {
    let len = picker.len();
    if len == 0 {
        return;
    }
    let focus = picker.focus;
    picker.focus = match direction {
        Direction::Left => focus.saturating_sub(1),
        Direction::Right => (focus + 1).min(len - 1),
        Direction::Up => focus.checked_sub(grid.columns).unwrap_or(focus),
        Direction::Down if focus + grid.columns < len => focus + grid.columns,
        Direction::Down => focus,
    };
    picker.scroll = grid.scroll_to(picker.scroll, picker.focus);
}
