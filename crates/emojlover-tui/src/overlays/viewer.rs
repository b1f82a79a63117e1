//! Full-screen emoji viewer overlay.
//!
//! Shows one glyph of a collection snapshot at a time on a colored
//! background. A horizontal mouse drag (or the arrow keys) moves the cursor;
//! the background follows the cursor position through the palette.
//!
//! Drags are evaluated only when the button is released: the press records
//! the origin, intermediate motion is ignored, and the net displacement is
//! classified by [`classify_drag`]. A release without a recorded press (for
//! example the tail of the click that opened the viewer) is dropped.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use emojlover_core::{Gesture, Palette, PaletteColor, Swipe, ViewerCursor, classify_drag};
use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use tracing::debug;

use super::OverlayUpdate;
use super::render_utils::{InputHint, centered_fixed, render_hints};
use crate::effects::UiEffect;

const CLOSE_BUTTON_WIDTH: u16 = 5;
const CLOSE_BUTTON_HEIGHT: u16 = 3;

/// Maps a palette entry onto a terminal color.
pub fn terminal_color(color: PaletteColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

/// Hit area of the close control in the top-right corner.
pub fn close_button_rect(area: Rect) -> Rect {
    let width = CLOSE_BUTTON_WIDTH.min(area.width);
    let height = CLOSE_BUTTON_HEIGHT.min(area.height);
    Rect::new(area.right() - width, area.y, width, height)
}

#[derive(Debug)]
pub struct ViewerState {
    cursor: ViewerCursor,
    palette: Palette,
    background: PaletteColor,
    min_swipe_distance: u16,
    drag_origin: Option<Position>,
}

impl ViewerState {
    pub fn open(cursor: ViewerCursor, palette: Palette, min_swipe_distance: u16) -> Self {
        let background = cursor.background(&palette);
        debug!(position = cursor.position(), len = cursor.len(), "viewer opened");
        Self {
            cursor,
            palette,
            background,
            min_swipe_distance,
            drag_origin: None,
        }
    }

    pub fn cursor(&self) -> &ViewerCursor {
        &self.cursor
    }

    pub fn background(&self) -> PaletteColor {
        self.background
    }

    /// Moves the cursor and recolors. Boundary swipes ring the bell.
    fn swipe(&mut self, swipe: Swipe) -> OverlayUpdate {
        if self.cursor.apply(swipe) {
            self.background = self.cursor.background(&self.palette);
            debug!(
                position = self.cursor.position(),
                background = self.background.name(),
                "viewer moved"
            );
            OverlayUpdate::stay()
        } else {
            OverlayUpdate::stay().with_ui_effects(vec![UiEffect::Bell])
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | 'x') if !ctrl => OverlayUpdate::close(),
            KeyCode::Right | KeyCode::Char('l') => self.swipe(Swipe::Left),
            KeyCode::Left | KeyCode::Char('h') => self.swipe(Swipe::Right),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> OverlayUpdate {
        let at = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag_origin = Some(at);
                OverlayUpdate::stay()
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(origin) = self.drag_origin.take() else {
                    return OverlayUpdate::stay();
                };
                let dx = i32::from(at.x) - i32::from(origin.x);
                let dy = i32::from(at.y) - i32::from(origin.y);
                match classify_drag(dx, dy, self.min_swipe_distance) {
                    Gesture::Tap if close_button_rect(area).contains(at) => OverlayUpdate::close(),
                    Gesture::Swipe(swipe) => self.swipe(swipe),
                    Gesture::Tap | Gesture::Ignored => OverlayUpdate::stay(),
                }
            }
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let bg = terminal_color(self.background);
        let fg = if self.background.is_light() {
            Color::Black
        } else {
            Color::White
        };
        let base = Style::default().bg(bg).fg(fg);

        frame.render_widget(Block::default().style(base), area);

        let close = close_button_rect(area);
        frame.render_widget(
            Paragraph::new(vec![Line::default(), Line::from("✕")])
                .alignment(Alignment::Center)
                .style(base.add_modifier(Modifier::BOLD)),
            close,
        );

        let glyph_area = centered_fixed(area.width, 3, area);
        let counter = format!("{} / {}", self.cursor.position() + 1, self.cursor.len());
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(self.cursor.glyph()).style(base.add_modifier(Modifier::BOLD)),
                Line::default(),
                Line::from(counter).style(base.add_modifier(Modifier::DIM)),
            ])
            .alignment(Alignment::Center)
            .style(base),
            glyph_area,
        );

        if area.height > 1 {
            let hints_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);
            let hints = [
                InputHint::new("← drag →", "browse"),
                InputHint::new("Esc", "close"),
            ];
            render_hints(frame, hints_area, &hints, fg, fg);
        }
    }
}
