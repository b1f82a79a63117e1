//! Configuration management for EmojLover.
//!
//! Loads configuration from ${EMOJLOVER_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::collection::{DEFAULT_EMOJIS, EmojiCollection};
use crate::palette::{Palette, PaletteColor, default_palette_colors};
use crate::picker::{DEFAULT_LIVE_EMOJI, LivePreview, PickerSurface};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for EmojLover configuration and data directories.
    //!
    //! EMOJLOVER_HOME resolution order:
    //! 1. EMOJLOVER_HOME environment variable (if set)
    //! 2. ~/.config/emojlover (default)
    //! 3. ./.emojlover when no home directory can be determined

    use std::path::PathBuf;

    pub const HOME_ENV: &str = "EMOJLOVER_HOME";

    /// Returns the EmojLover home directory.
    pub fn emojlover_home() -> PathBuf {
        if let Some(home) = std::env::var_os(HOME_ENV) {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".emojlover"),
            |h| h.join(".config").join("emojlover"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        emojlover_home().join("config.toml")
    }

    /// Returns the directory holding rolling TUI log files.
    pub fn logs_dir() -> PathBuf {
        emojlover_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Heading shown on the picker screen.
    pub title: String,

    /// Grid glyphs, in display order.
    pub emojis: Vec<String>,

    /// Live preview glyph before the first tap.
    pub default_live_emoji: String,

    /// Viewer background colors.
    pub palette: Vec<PaletteColor>,

    /// Minimum drag distance in cells for a swipe.
    pub min_swipe_distance: u16,

    /// Log filter when EMOJLOVER_LOG is unset.
    pub log_level: String,
}

impl Config {
    const DEFAULT_TITLE: &str = "Welcome to EmojLover!";
    const DEFAULT_MIN_SWIPE_DISTANCE: u16 = 3;
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?
        } else {
            Config::default()
        };
        config
            .validate()
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Checks values serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            anyhow::bail!("palette must contain at least one color");
        }
        if self.min_swipe_distance == 0 {
            anyhow::bail!("min_swipe_distance must be at least 1");
        }
        Ok(())
    }

    /// Replaces the grid glyphs from a comma separated list.
    pub fn override_emojis(&mut self, list: &str) {
        self.emojis = EmojiCollection::parse_list(list).as_slice().to_vec();
    }

    pub fn collection(&self) -> EmojiCollection {
        EmojiCollection::new(self.emojis.iter().cloned())
    }

    /// Palette built from the config. Falls back to the default palette when
    /// the list is empty (only reachable if `validate` was skipped).
    pub fn palette(&self) -> Palette {
        Palette::new(self.palette.clone()).unwrap_or_default()
    }

    /// Fresh picker for a session.
    pub fn picker(&self) -> PickerSurface {
        PickerSurface::new(
            self.collection(),
            LivePreview::new(self.default_live_emoji.clone()),
        )
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: Self::DEFAULT_TITLE.to_string(),
            emojis: DEFAULT_EMOJIS.iter().map(|g| (*g).to_string()).collect(),
            default_live_emoji: DEFAULT_LIVE_EMOJI.to_string(),
            palette: default_palette_colors(),
            min_swipe_distance: Self::DEFAULT_MIN_SWIPE_DISTANCE,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_template_matches_defaults() {
        let parsed: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "emojis = [\"🐶\", \"🐱\"]\npalette = [\"mint\"]\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.emojis, vec!["🐶", "🐱"]);
        assert_eq!(config.palette, vec![PaletteColor::Mint]);
        assert_eq!(config.min_swipe_distance, 3);
        assert_eq!(config.default_live_emoji, "😀");
    }

    #[test]
    fn test_empty_palette_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "palette = []\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("palette"));
    }

    #[test]
    fn test_zero_swipe_distance_is_rejected() {
        let config = Config {
            min_swipe_distance: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_color_fails_to_parse() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "palette = [\"magenta-ish\"]\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_init_writes_template_and_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Config::init(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("min_swipe_distance = 3"));
        assert!(!path.with_extension("toml.tmp").exists());

        let err = Config::init(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_override_emojis() {
        let mut config = Config::default();
        config.override_emojis("🐶, 🐱");
        assert_eq!(config.collection().as_slice(), ["🐶", "🐱"]);
    }

    #[test]
    fn test_picker_uses_configured_live_glyph() {
        let config = Config {
            default_live_emoji: "⭐".to_string(),
            ..Config::default()
        };
        assert_eq!(config.picker().live().glyph(), "⭐");
    }
}
