//! Background palette for the full-screen viewer.
//!
//! The viewer background is a pure function of the cursor position:
//! `palette[position % palette.len()]`. Revisiting a position always yields
//! the same color.

use serde::{Deserialize, Serialize};

/// Named palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    Red,
    Green,
    Blue,
    Orange,
    Pink,
    Purple,
    Yellow,
    Cyan,
    Indigo,
    Mint,
    Teal,
    Brown,
    Gray,
    White,
    Black,
}

impl PaletteColor {
    /// Every named color, in declaration order.
    pub fn all() -> &'static [PaletteColor] {
        &[
            PaletteColor::Red,
            PaletteColor::Green,
            PaletteColor::Blue,
            PaletteColor::Orange,
            PaletteColor::Pink,
            PaletteColor::Purple,
            PaletteColor::Yellow,
            PaletteColor::Cyan,
            PaletteColor::Indigo,
            PaletteColor::Mint,
            PaletteColor::Teal,
            PaletteColor::Brown,
            PaletteColor::Gray,
            PaletteColor::White,
            PaletteColor::Black,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Red => "red",
            PaletteColor::Green => "green",
            PaletteColor::Blue => "blue",
            PaletteColor::Orange => "orange",
            PaletteColor::Pink => "pink",
            PaletteColor::Purple => "purple",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Cyan => "cyan",
            PaletteColor::Indigo => "indigo",
            PaletteColor::Mint => "mint",
            PaletteColor::Teal => "teal",
            PaletteColor::Brown => "brown",
            PaletteColor::Gray => "gray",
            PaletteColor::White => "white",
            PaletteColor::Black => "black",
        }
    }

    /// sRGB components, matching the iOS system colors.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            PaletteColor::Red => (255, 59, 48),
            PaletteColor::Green => (52, 199, 89),
            PaletteColor::Blue => (0, 122, 255),
            PaletteColor::Orange => (255, 149, 0),
            PaletteColor::Pink => (255, 45, 85),
            PaletteColor::Purple => (175, 82, 222),
            PaletteColor::Yellow => (255, 204, 0),
            PaletteColor::Cyan => (50, 173, 230),
            PaletteColor::Indigo => (88, 86, 214),
            PaletteColor::Mint => (0, 199, 190),
            PaletteColor::Teal => (48, 176, 199),
            PaletteColor::Brown => (162, 132, 94),
            PaletteColor::Gray => (142, 142, 147),
            PaletteColor::White => (255, 255, 255),
            PaletteColor::Black => (0, 0, 0),
        }
    }

    /// Hex form, e.g. `#ff3b30`.
    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Whether dark foreground text reads better on this background.
    pub fn is_light(self) -> bool {
        let (r, g, b) = self.rgb();
        // Rec. 601 luma
        let luma = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
        luma > 150_000
    }
}

/// Non-empty ordered list of colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<PaletteColor>,
}

impl Palette {
    /// Returns `None` for an empty list.
    pub fn new(colors: Vec<PaletteColor>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn colors(&self) -> &[PaletteColor] {
        &self.colors
    }

    /// Background for a cursor position.
    pub fn color_for(&self, position: usize) -> PaletteColor {
        self.colors[position % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: default_palette_colors(),
        }
    }
}

/// Red, green, blue, orange, pink, purple, yellow.
pub fn default_palette_colors() -> Vec<PaletteColor> {
    vec![
        PaletteColor::Red,
        PaletteColor::Green,
        PaletteColor::Blue,
        PaletteColor::Orange,
        PaletteColor::Pink,
        PaletteColor::Purple,
        PaletteColor::Yellow,
    ]
}
