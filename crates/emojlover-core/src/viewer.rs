//! Full-screen viewer cursor.
//!
//! The viewer receives an immutable snapshot of the collection and a start
//! position, then moves one step at a time in response to horizontal swipes.
//! The cursor never leaves `[0, len - 1]`; swipes past either end are no-ops.
//!
//! ```text
//!   swipe left  (dx < 0): i -> i + 1   while i < len - 1
//!   swipe right (dx > 0): i -> i - 1   while i > 0
//! ```

use std::sync::Arc;

use crate::palette::{Palette, PaletteColor};

/// Direction of a recognized horizontal swipe, named by finger motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moves right-to-left; shows the next glyph.
    Left,
    /// Finger moves left-to-right; shows the previous glyph.
    Right,
}

/// Result of evaluating a completed drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Motion stayed under the minimum distance.
    Tap,
    /// Horizontal swipe.
    Swipe(Swipe),
    /// Long enough to count as a drag, but with no horizontal component.
    Ignored,
}

/// Classifies a completed drag from its net displacement in cells.
///
/// Intermediate motion is never looked at. The minimum distance is compared
/// against the Euclidean length of the displacement; only when it is met is
/// the sign of `dx` evaluated.
pub fn classify_drag(dx: i32, dy: i32, min_distance: u16) -> Gesture {
    let distance = f64::from(dx).hypot(f64::from(dy));
    if distance < f64::from(min_distance) {
        return Gesture::Tap;
    }
    match dx.signum() {
        -1 => Gesture::Swipe(Swipe::Left),
        1 => Gesture::Swipe(Swipe::Right),
        _ => Gesture::Ignored,
    }
}

/// Cursor into a viewer snapshot.
#[derive(Debug, Clone)]
pub struct ViewerCursor {
    glyphs: Arc<[String]>,
    position: usize,
}

impl ViewerCursor {
    /// Opens a cursor at `position`.
    ///
    /// Returns `None` when the snapshot is empty or `position` is out of
    /// range.
    pub fn open(glyphs: Arc<[String]>, position: usize) -> Option<Self> {
        if position >= glyphs.len() {
            return None;
        }
        Some(Self { glyphs, position })
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn glyph(&self) -> &str {
        &self.glyphs[self.position]
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 == self.glyphs.len()
    }

    /// Applies a swipe. Returns `true` if the cursor moved.
    pub fn apply(&mut self, swipe: Swipe) -> bool {
        match swipe {
            Swipe::Left if !self.is_last() => {
                self.position += 1;
                true
            }
            Swipe::Right if !self.is_first() => {
                self.position -= 1;
                true
            }
            _ => false,
        }
    }

    /// Background for the current position.
    pub fn background(&self, palette: &Palette) -> PaletteColor {
        palette.color_for(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(glyphs: &[&str]) -> Arc<[String]> {
        glyphs.iter().map(|g| (*g).to_string()).collect()
    }

    fn rgb_palette() -> Palette {
        Palette::new(vec![
            PaletteColor::Red,
            PaletteColor::Green,
            PaletteColor::Blue,
        ])
        .unwrap()
    }

    #[test]
    fn test_open_rejects_empty_and_out_of_range() {
        assert!(ViewerCursor::open(snapshot(&[]), 0).is_none());
        assert!(ViewerCursor::open(snapshot(&["A"]), 1).is_none());
        assert!(ViewerCursor::open(snapshot(&["A"]), 0).is_some());
    }

    #[test]
    fn test_swipe_left_advances_until_last() {
        let glyphs = snapshot(&["A", "B", "C", "D", "E"]);
        for start in 0..glyphs.len() {
            let mut cursor = ViewerCursor::open(Arc::clone(&glyphs), start).unwrap();
            let moved = cursor.apply(Swipe::Left);
            if start < glyphs.len() - 1 {
                assert!(moved);
                assert_eq!(cursor.position(), start + 1);
            } else {
                assert!(!moved);
                assert_eq!(cursor.position(), start);
            }
        }
    }

    #[test]
    fn test_swipe_right_retreats_until_first() {
        let glyphs = snapshot(&["A", "B", "C", "D", "E"]);
        for start in 0..glyphs.len() {
            let mut cursor = ViewerCursor::open(Arc::clone(&glyphs), start).unwrap();
            let moved = cursor.apply(Swipe::Right);
            if start > 0 {
                assert!(moved);
                assert_eq!(cursor.position(), start - 1);
            } else {
                assert!(!moved);
                assert_eq!(cursor.position(), 0);
            }
        }
    }

    #[test]
    fn test_single_glyph_never_moves() {
        let mut cursor = ViewerCursor::open(snapshot(&["A"]), 0).unwrap();
        assert!(!cursor.apply(Swipe::Left));
        assert!(!cursor.apply(Swipe::Right));
        assert_eq!(cursor.glyph(), "A");
    }

    #[test]
    fn test_browse_scenario_recolors_per_position() {
        let palette = rgb_palette();
        let mut cursor = ViewerCursor::open(snapshot(&["A", "B", "C"]), 0).unwrap();
        assert_eq!(cursor.glyph(), "A");
        assert_eq!(cursor.background(&palette), PaletteColor::Red);

        cursor.apply(Swipe::Left);
        assert_eq!((cursor.position(), cursor.glyph()), (1, "B"));
        assert_eq!(cursor.background(&palette), PaletteColor::Green);

        cursor.apply(Swipe::Left);
        assert_eq!((cursor.position(), cursor.glyph()), (2, "C"));
        assert_eq!(cursor.background(&palette), PaletteColor::Blue);

        assert!(!cursor.apply(Swipe::Left));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.background(&palette), PaletteColor::Blue);
    }

    #[test]
    fn test_background_matches_position_after_any_sequence() {
        let palette = rgb_palette();
        let glyphs = snapshot(&["A", "B", "C", "D", "E", "F", "G"]);
        let mut cursor = ViewerCursor::open(glyphs, 3).unwrap();
        let moves = [
            Swipe::Left,
            Swipe::Left,
            Swipe::Left,
            Swipe::Left,
            Swipe::Right,
            Swipe::Right,
            Swipe::Right,
            Swipe::Right,
            Swipe::Right,
            Swipe::Right,
            Swipe::Right,
            Swipe::Left,
        ];
        for swipe in moves {
            cursor.apply(swipe);
            assert_eq!(
                cursor.background(&palette),
                palette.colors()[cursor.position() % palette.len()]
            );
        }
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_classify_drag_threshold() {
        assert_eq!(classify_drag(0, 0, 3), Gesture::Tap);
        assert_eq!(classify_drag(-2, 0, 3), Gesture::Tap);
        assert_eq!(classify_drag(2, 2, 3), Gesture::Tap);
        assert_eq!(classify_drag(-3, 0, 3), Gesture::Swipe(Swipe::Left));
        assert_eq!(classify_drag(3, 0, 3), Gesture::Swipe(Swipe::Right));
        assert_eq!(classify_drag(-1, 5, 3), Gesture::Swipe(Swipe::Left));
    }

    #[test]
    fn test_classify_drag_vertical_only_is_ignored() {
        assert_eq!(classify_drag(0, 4, 3), Gesture::Ignored);
        assert_eq!(classify_drag(0, -10, 3), Gesture::Ignored);
    }
}
