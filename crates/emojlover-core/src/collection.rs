//! The ordered emoji collection owned by the picker.

use std::collections::BTreeSet;
use std::sync::Arc;

/// Glyphs shipped with the application when the config does not override them.
pub const DEFAULT_EMOJIS: &[&str] = &[
    "😀", "🥰", "🐱", "🚀", "🌈", "🍕", "🏀", "🍀", "🎉", "🎈", "📚", "🎸", "🏖️",
];

/// Ordered sequence of glyphs. Order is both display and browsing order.
///
/// Duplicates are allowed. The only mutation is removal by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiCollection {
    glyphs: Vec<String>,
}

impl EmojiCollection {
    pub fn new<I, S>(glyphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            glyphs: glyphs.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a comma separated list (`"😀,🐱"`), skipping blank entries.
    pub fn parse_list(list: &str) -> Self {
        Self::new(
            list.split(',')
                .map(str::trim)
                .filter(|glyph| !glyph.is_empty()),
        )
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.glyphs.get(position).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.glyphs.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.glyphs
    }

    /// Returns an immutable copy for the viewer.
    ///
    /// Later removals on `self` are not visible through the snapshot.
    pub fn snapshot(&self) -> Arc<[String]> {
        Arc::from(self.glyphs.as_slice())
    }

    /// Removes every position in `positions` in one batch.
    ///
    /// Positions refer to the collection as it was before the call, so the
    /// removal walks from the back. Out-of-range positions are ignored.
    /// Returns the number of glyphs actually removed.
    pub fn remove_positions(&mut self, positions: &BTreeSet<usize>) -> usize {
        let mut removed = 0;
        for &position in positions.iter().rev() {
            if position < self.glyphs.len() {
                self.glyphs.remove(position);
                removed += 1;
            }
        }
        removed
    }
}

/// Collection seeded with [`DEFAULT_EMOJIS`].
pub fn default_collection() -> EmojiCollection {
    EmojiCollection::new(DEFAULT_EMOJIS.iter().copied())
}
