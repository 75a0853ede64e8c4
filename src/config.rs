//! Persistent defaults for the display commands.
//!
//! An optional TOML file supplies defaults for the knobs that are mostly a
//! matter of taste (sample text, widths, gutter). A missing file means
//! built-in defaults; command-line flags override whatever the file says.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Defaults shared by the theme displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sample text rendered in each row-major grid cell.
    pub text: String,
    /// Cell width in the row-major theme grid.
    pub cell_width: usize,
    /// Padding around the `fg/bg` label in the transpose grid.
    pub padding: usize,
    /// String printed between output columns.
    pub gutter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text: "gYw".to_string(),
            cell_width: 7,
            padding: 2,
            gutter: String::new(),
        }
    }
}

impl Config {
    /// Path of the config file: `<config_dir>/display-colors/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("could not determine the user config directory")?;
        Ok(dir.join("display-colors").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and parse a specific config file. Fields the file omits keep
    /// their defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid config in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_cli_defaults() {
        let config = Config::default();
        assert_eq!(config.text, "gYw");
        assert_eq!(config.cell_width, 7);
        assert_eq!(config.padding, 2);
        assert_eq!(config.gutter, "");
    }

    #[test]
    fn partial_file_keeps_defaults_for_omitted_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "text = \"abc\"").unwrap();
        writeln!(file, "gutter = \" \"").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.text, "abc");
        assert_eq!(config.gutter, " ");
        assert_eq!(config.cell_width, 7);
        assert_eq!(config.padding, 2);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cell_width = \"wide\"").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }
}
