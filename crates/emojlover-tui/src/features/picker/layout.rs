//! Picker screen geometry.
//!
//! Layout is a pure function of the terminal size, so the reducer can hit-test
//! mouse clicks against exactly the rectangles the renderer draws into.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │            🌟 EmojLover 🌟        [Edit] │ title bar
//! │ Welcome to EmojLover!                    │ heading
//! │ ┌─────────┐                              │
//! │ │   😀    │                              │ live preview
//! │ └─────────┘                              │
//! │ Choose your Emoji:                       │ grid label
//! │ ┌──────┐ ┌──────┐ ┌──────┐ ...           │
//! │ │  😀  │ │  🥰  │ │  🐱  │               │ grid (scrolls by row)
//! │ └──────┘ └──────┘ └──────┘               │
//! │   hints                                  │ footer
//! └──────────────────────────────────────────┘
//! ```

use ratatui::layout::{Constraint, Layout, Position, Rect};

pub const TILE_WIDTH: u16 = 8;
pub const TILE_HEIGHT: u16 = 3;
pub const TILE_GAP: u16 = 1;

const LIVE_HEIGHT: u16 = 5;
const LIVE_WIDTH: u16 = 11;
const EDIT_BUTTON_WIDTH: u16 = 8;

/// Rectangles of the picker screen for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerLayout {
    pub title: Rect,
    pub edit_button: Rect,
    pub heading: Rect,
    pub live: Rect,
    pub grid_label: Rect,
    pub grid: Rect,
    pub footer: Rect,
}

impl PickerLayout {
    pub fn compute(area: Rect) -> Self {
        let [title, heading, live_row, grid_label, grid, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(LIVE_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let button_width = EDIT_BUTTON_WIDTH.min(title.width);
        let edit_button = Rect::new(
            title.right().saturating_sub(button_width),
            title.y,
            button_width,
            title.height,
        );
        let live = Rect::new(
            live_row.x + 1u16.min(live_row.width),
            live_row.y,
            LIVE_WIDTH.min(live_row.width.saturating_sub(1)),
            live_row.height,
        );
        let grid = Rect::new(
            grid.x + 1u16.min(grid.width),
            grid.y,
            grid.width.saturating_sub(2),
            grid.height,
        );

        Self {
            title,
            edit_button,
            heading,
            live,
            grid_label,
            grid,
            footer,
        }
    }

    pub fn grid_geometry(&self) -> GridGeometry {
        GridGeometry::new(self.grid)
    }
}

/// Adaptive tile grid: as many fixed-width columns as fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub area: Rect,
    pub columns: usize,
    pub visible_rows: usize,
}

impl GridGeometry {
    pub fn new(area: Rect) -> Self {
        let columns = ((area.width + TILE_GAP) / (TILE_WIDTH + TILE_GAP)).max(1);
        let visible_rows = (area.height / TILE_HEIGHT).max(1);
        Self {
            area,
            columns: usize::from(columns),
            visible_rows: usize::from(visible_rows),
        }
    }

    pub fn row_of(&self, index: usize) -> usize {
        index / self.columns
    }

    pub fn total_rows(&self, len: usize) -> usize {
        len.div_ceil(self.columns)
    }

    /// Largest useful scroll offset for `len` tiles.
    pub fn max_scroll(&self, len: usize) -> usize {
        self.total_rows(len).saturating_sub(self.visible_rows)
    }

    /// Adjusts `scroll` so the row holding `index` is on screen.
    pub fn scroll_to(&self, scroll: usize, index: usize) -> usize {
        let row = self.row_of(index);
        if row < scroll {
            row
        } else if row >= scroll + self.visible_rows {
            row + 1 - self.visible_rows
        } else {
            scroll
        }
    }

    /// Screen rectangle for tile `index`, or `None` when scrolled off.
    pub fn tile_rect(&self, index: usize, scroll: usize) -> Option<Rect> {
        let row = self.row_of(index);
        if row < scroll || row >= scroll + self.visible_rows {
            return None;
        }
        let col = (index % self.columns) as u16;
        let visible_row = (row - scroll) as u16;
        let rect = Rect::new(
            self.area.x + col * (TILE_WIDTH + TILE_GAP),
            self.area.y + visible_row * TILE_HEIGHT,
            TILE_WIDTH,
            TILE_HEIGHT,
        );
        Some(rect.intersection(self.area)).filter(|r| !r.is_empty())
    }

    /// Tile under a screen cell, if any.
    pub fn tile_at(&self, position: Position, scroll: usize, len: usize) -> Option<usize> {
        if !self.area.contains(position) {
            return None;
        }
        let dx = position.x - self.area.x;
        let dy = position.y - self.area.y;
        let stride = TILE_WIDTH + TILE_GAP;
        if dx % stride >= TILE_WIDTH {
            return None;
        }
        let col = usize::from(dx / stride);
        if col >= self.columns {
            return None;
        }
        let visible_row = usize::from(dy / TILE_HEIGHT);
        // The partial strip below the last full row is left blank.
        if visible_row >= self.visible_rows {
            return None;
        }
        let row = visible_row + scroll;
        let index = row * self.columns + col;
        (index < len).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_adapt_to_width() {
        assert_eq!(GridGeometry::new(Rect::new(0, 0, 8, 9)).columns, 1);
        assert_eq!(GridGeometry::new(Rect::new(0, 0, 16, 9)).columns, 1);
        assert_eq!(GridGeometry::new(Rect::new(0, 0, 17, 9)).columns, 2);
        assert_eq!(GridGeometry::new(Rect::new(0, 0, 78, 9)).columns, 8);
        assert_eq!(GridGeometry::new(Rect::new(0, 0, 3, 9)).columns, 1);
    }

    #[test]
    fn test_tile_rect_and_hit_test_agree() {
        let grid = GridGeometry::new(Rect::new(1, 10, 40, 9));
        assert_eq!(grid.columns, 4);
        assert_eq!(grid.visible_rows, 3);
        for index in 0..12 {
            let rect = grid.tile_rect(index, 0).unwrap();
            let center = Position::new(rect.x + rect.width / 2, rect.y + 1);
            assert_eq!(grid.tile_at(center, 0, 12), Some(index));
        }
    }

    #[test]
    fn test_hit_test_gap_and_past_end() {
        let grid = GridGeometry::new(Rect::new(0, 0, 40, 9));
        // Column gap between tile 0 and tile 1.
        assert_eq!(grid.tile_at(Position::new(8, 1), 0, 12), None);
        // Only 5 tiles: second row, second column is index 5.
        assert_eq!(grid.tile_at(Position::new(10, 4), 0, 5), None);
        assert_eq!(grid.tile_at(Position::new(0, 4), 0, 5), Some(4));
    }

    #[test]
    fn test_hit_test_ignores_partial_row() {
        let layout = PickerLayout::compute(Rect::new(0, 0, 20, 26));
        let grid = layout.grid_geometry();
        assert_eq!(grid.area, Rect::new(1, 8, 18, 17));
        assert_eq!((grid.columns, grid.visible_rows), (2, 5));

        let below_last_row = Position::new(2, 23);
        assert_eq!(grid.tile_at(below_last_row, 0, 13), None);
        assert!(grid.tile_rect(10, 0).is_none());
        assert_eq!(grid.tile_at(Position::new(2, 20), 0, 13), Some(8));
    }

    #[test]
    fn test_hit_test_respects_scroll() {
        let grid = GridGeometry::new(Rect::new(0, 0, 17, 3));
        assert_eq!(grid.visible_rows, 1);
        assert_eq!(grid.tile_at(Position::new(0, 0), 2, 6), Some(4));
        assert!(grid.tile_rect(0, 2).is_none());
        assert!(grid.tile_rect(5, 2).is_some());
    }

    #[test]
    fn test_scroll_to_keeps_focus_visible() {
        let grid = GridGeometry::new(Rect::new(0, 0, 17, 6));
        assert_eq!((grid.columns, grid.visible_rows), (2, 2));
        assert_eq!(grid.scroll_to(0, 3), 0);
        assert_eq!(grid.scroll_to(0, 4), 1);
        assert_eq!(grid.scroll_to(3, 2), 1);
        assert_eq!(grid.max_scroll(13), 5);
    }

    #[test]
    fn test_layout_places_edit_button_at_right() {
        let layout = PickerLayout::compute(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.edit_button.right(), 80);
        assert_eq!(layout.edit_button.y, 0);
        assert_eq!(layout.live.height, 5);
        assert_eq!(layout.footer.y, 23);
        assert_eq!(layout.grid.y, 8);
        assert_eq!(layout.grid.height, 15);
    }
}
