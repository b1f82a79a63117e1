//! Picker surface model: the canonical collection, the pending selection and
//! the live preview slot.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::collection::EmojiCollection;
use crate::viewer::ViewerCursor;

/// Glyph shown in the live preview before the first tap.
pub const DEFAULT_LIVE_EMOJI: &str = "😀";

/// The tile that was tapped, recorded at tap time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub position: usize,
    pub glyph: String,
}

/// Single glyph slot that changes to a random collection member on tap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivePreview {
    glyph: String,
    fallback: String,
}

impl LivePreview {
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            fallback: initial.clone(),
            glyph: initial,
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Replaces the glyph with a uniform pick from `collection`.
    ///
    /// An empty collection resets the slot to its initial glyph.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, collection: &EmojiCollection, rng: &mut R) {
        self.glyph = collection
            .as_slice()
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone());
    }
}

impl Default for LivePreview {
    fn default() -> Self {
        Self::new(DEFAULT_LIVE_EMOJI)
    }
}

/// Owner of the emoji collection.
#[derive(Debug, Clone)]
pub struct PickerSurface {
    collection: EmojiCollection,
    selection: Option<Selection>,
    live: LivePreview,
}

impl PickerSurface {
    pub fn new(collection: EmojiCollection, live: LivePreview) -> Self {
        Self {
            collection,
            selection: None,
            live,
        }
    }

    pub fn collection(&self) -> &EmojiCollection {
        &self.collection
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn live(&self) -> &LivePreview {
        &self.live
    }

    /// Records a tap on the tile at `position`.
    ///
    /// Returns `None` (and leaves the selection alone) if there is no tile
    /// at that position.
    pub fn select(&mut self, position: usize) -> Option<&Selection> {
        let glyph = self.collection.get(position)?.to_string();
        debug!(position, %glyph, "tile selected");
        self.selection = Some(Selection { position, glyph });
        self.selection.as_ref()
    }

    /// Consumes the pending selection into a viewer over a snapshot of the
    /// collection.
    pub fn present(&self) -> Option<ViewerCursor> {
        let selection = self.selection.as_ref()?;
        ViewerCursor::open(self.collection.snapshot(), selection.position)
    }

    /// Called when the viewer is dismissed.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Removes a batch of positions from the collection.
    ///
    /// If the selected position is in the batch the selection is cleared.
    /// Otherwise it keeps the position and glyph recorded at tap time, even
    /// when earlier removals leave that position past the end; `present`
    /// then returns `None`. Returns the number of glyphs removed.
    pub fn delete(&mut self, positions: &BTreeSet<usize>) -> usize {
        if self
            .selection
            .as_ref()
            .is_some_and(|s| positions.contains(&s.position))
        {
            debug!("selected tile deleted, clearing selection");
            self.selection = None;
        }
        let removed = self.collection.remove_positions(positions);
        debug!(removed, remaining = self.collection.len(), "tiles deleted");
        removed
    }

    /// Taps the live preview slot.
    pub fn tap_live<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &str {
        self.live.shuffle(&self.collection, rng);
        self.live.glyph()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn picker(glyphs: &[&str]) -> PickerSurface {
        PickerSurface::new(
            EmojiCollection::new(glyphs.iter().copied()),
            LivePreview::default(),
        )
    }

    #[test]
    fn test_select_records_position_and_glyph() {
        let mut picker = picker(&["A", "B", "C"]);
        let selection = picker.select(1).cloned();
        assert_eq!(
            selection,
            Some(Selection {
                position: 1,
                glyph: "B".to_string()
            })
        );
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut picker = picker(&["A"]);
        picker.select(0);
        assert!(picker.select(5).is_none());
        assert_eq!(picker.selection().map(|s| s.position), Some(0));
    }

    #[test]
    fn test_present_opens_viewer_at_selection() {
        let mut picker = picker(&["A", "B", "C"]);
        assert!(picker.present().is_none());
        picker.select(2);
        let viewer = picker.present().unwrap();
        assert_eq!(viewer.position(), 2);
        assert_eq!(viewer.glyph(), "C");
    }

    #[test]
    fn test_delete_including_selection_clears_it() {
        let mut picker = picker(&["A", "B", "C", "D"]);
        picker.select(2);
        picker.delete(&BTreeSet::from([0, 2]));
        assert!(picker.selection().is_none());
        assert_eq!(picker.collection().as_slice(), ["B", "D"]);
    }

    #[test]
    fn test_delete_excluding_selection_keeps_it() {
        let mut picker = picker(&["A", "B", "C", "D"]);
        picker.select(2);
        picker.delete(&BTreeSet::from([0, 3]));
        assert_eq!(
            picker.selection(),
            Some(&Selection {
                position: 2,
                glyph: "C".to_string()
            })
        );
    }

    #[test]
    fn test_kept_selection_past_end_presents_nothing() {
        let mut picker = picker(&["A", "B", "C", "D"]);
        picker.select(2);
        picker.delete(&BTreeSet::from([0, 3]));
        assert_eq!(picker.collection().as_slice(), ["B", "C"]);
        assert_eq!(picker.selection().map(|s| s.position), Some(2));
        assert!(picker.present().is_none());
    }

    #[test]
    fn test_open_viewer_unaffected_by_delete() {
        let mut picker = picker(&["A", "B", "C"]);
        picker.select(1);
        let viewer = picker.present().unwrap();
        picker.delete(&BTreeSet::from([0, 1, 2]));
        assert!(picker.collection().is_empty());
        assert_eq!(viewer.len(), 3);
        assert_eq!(viewer.glyph(), "B");
    }

    #[test]
    fn test_clear_selection() {
        let mut picker = picker(&["A"]);
        picker.select(0);
        picker.clear_selection();
        assert!(picker.selection().is_none());
    }

    #[test]
    fn test_live_preview_stays_in_collection() {
        let mut picker = picker(&["A", "B", "C"]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(picker.live().glyph(), DEFAULT_LIVE_EMOJI);
        for _ in 0..100 {
            let glyph = picker.tap_live(&mut rng).to_string();
            assert!(["A", "B", "C"].contains(&glyph.as_str()), "{glyph}");
        }
    }

    #[test]
    fn test_live_preview_reaches_every_glyph() {
        let mut picker = picker(&["A", "B", "C"]);
        let mut rng = StdRng::seed_from_u64(42);
        let seen: BTreeSet<String> = (0..100)
            .map(|_| picker.tap_live(&mut rng).to_string())
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_live_preview_empty_collection_falls_back() {
        let mut picker = PickerSurface::new(EmojiCollection::default(), LivePreview::new("⭐"));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(picker.tap_live(&mut rng), "⭐");
    }
}
