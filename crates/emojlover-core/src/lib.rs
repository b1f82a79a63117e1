//! Core model for EmojLover: the emoji collection, picker selection, live
//! preview, the full-screen viewer cursor and its background palette, plus
//! configuration, logging and interrupt plumbing shared by the front ends.

pub mod collection;
pub mod config;
pub mod interrupt;
pub mod logging;
pub mod palette;
pub mod picker;
pub mod viewer;

pub use collection::EmojiCollection;
pub use config::Config;
pub use palette::{Palette, PaletteColor};
pub use picker::{LivePreview, PickerSurface, Selection};
pub use viewer::{Gesture, Swipe, ViewerCursor, classify_drag};
