//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use emojlover_core::ViewerCursor;
use ratatui::layout::Rect;
use tracing::debug;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::picker::{self, PickerLayout, PickerOutcome};
use crate::overlays::{Overlay, OverlayTransition, OverlayUpdate, ViewerState};
use crate::state::{AppState, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            picker::tick(&mut app.tui.picker);
            vec![]
        }
        UiEvent::Frame { width, height } => {
            handle_frame(&mut app.tui, width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::Interrupt => quit(&mut app.tui),
    }
}

fn handle_frame(tui: &mut TuiState, width: u16, height: u16) {
    let viewport = Rect::new(0, 0, width, height);
    if tui.viewport == viewport {
        return;
    }
    tui.viewport = viewport;

    let grid = PickerLayout::compute(viewport).grid_geometry();
    let picker = &mut tui.picker;
    picker.scroll = picker.scroll.min(grid.max_scroll(picker.len()));
    picker.scroll = grid.scroll_to(picker.scroll, picker.focus);
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Resize(width, height) => {
            handle_frame(&mut app.tui, width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return quit(&mut app.tui);
    }

    if let Some(overlay) = &mut app.overlay {
        let update = overlay.handle_key(key);
        return apply_overlay_update(app, update);
    }

    let outcome = picker::handle_key(&mut app.tui, key);
    apply_picker_outcome(app, outcome)
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    if let Some(overlay) = &mut app.overlay {
        let update = overlay.handle_mouse(mouse, app.tui.viewport);
        return apply_overlay_update(app, update);
    }

    let outcome = picker::handle_mouse(&mut app.tui, mouse);
    apply_picker_outcome(app, outcome)
}

fn apply_picker_outcome(app: &mut AppState, outcome: PickerOutcome) -> Vec<UiEffect> {
    match outcome {
        PickerOutcome::Stay => vec![],
        PickerOutcome::Open(cursor) => {
            present_viewer(app, cursor);
            vec![]
        }
        PickerOutcome::Quit => quit(&mut app.tui),
    }
}

fn apply_overlay_update(app: &mut AppState, update: OverlayUpdate) -> Vec<UiEffect> {
    if update.transition == OverlayTransition::Close {
        dismiss_viewer(app);
    }
    update.effects
}

fn present_viewer(app: &mut AppState, cursor: ViewerCursor) {
    let viewer = ViewerState::open(
        cursor,
        app.tui.palette.clone(),
        app.tui.min_swipe_distance,
    );
    app.overlay = Some(Overlay::Viewer(viewer));
}

/// Tears down the viewer and discards the selection that opened it.
fn dismiss_viewer(app: &mut AppState) {
    app.overlay = None;
    app.tui.picker.surface.clear_selection();
    debug!("viewer dismissed");
}

fn quit(tui: &mut TuiState) -> Vec<UiEffect> {
    tui.should_quit = true;
    vec![UiEffect::Quit]
}
