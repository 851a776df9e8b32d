//! CLI configuration, persisted as TOML.
//!
//! Looked up at `$XDG_CONFIG_HOME/geez/config.toml` (falling back to
//! `~/.config/geez/config.toml`). A missing default file means defaults; an
//! explicitly requested file must exist and parse.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::glyph::RenderConfig;

/// Errors from configuration loading.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(geez::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {path}")]
    #[diagnostic(
        code(geez::config::parse),
        help("Check the TOML syntax in the config file. {message}")
    )]
    Parse { path: String, message: String },

    #[error("failed to write config: {path}")]
    #[diagnostic(
        code(geez::config::write),
        help("Ensure you have write permissions to the config directory.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// When to emit ANSI colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colour when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

/// User configuration for the `geez` CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeezConfig {
    #[serde(default)]
    pub color: ColorMode,
    /// Insert thousands separators into Arabic output.
    #[serde(default = "default_group_digits")]
    pub group_digits: bool,
    /// Thousands separator.
    #[serde(default = "default_separator")]
    pub separator: char,
    /// Worker threads for `batch`; rayon's default when unset.
    #[serde(default)]
    pub batch_threads: Option<usize>,
}

fn default_group_digits() -> bool {
    true
}
fn default_separator() -> char {
    ','
}

impl Default for GeezConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            group_digits: default_group_digits(),
            separator: default_separator(),
            batch_threads: None,
        }
    }
}

impl GeezConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Save to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Resolve the configuration: an explicit path must load; otherwise the
    /// default location is used if present, and defaults if not.
    pub fn resolve(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let Some(path) = default_config_path() else {
            tracing::debug!("no home directory; using default config");
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        match Self::load(&path) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "ignoring unusable config file");
                Ok(Self::default())
            }
        }
    }

    /// Build the render configuration, resolving `Auto` against stdout.
    pub fn render_config(&self) -> RenderConfig {
        let base = RenderConfig::default();
        let color = match self.color {
            ColorMode::Auto => base.color,
            ColorMode::Always => true,
            ColorMode::Never => false,
        };
        RenderConfig {
            color,
            group_digits: self.group_digits,
            separator: self.separator,
        }
    }
}

/// `$XDG_CONFIG_HOME/geez/config.toml`, or `~/.config/geez/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
    Some(config_home.join("geez").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = GeezConfig::default();
        assert_eq!(c.color, ColorMode::Auto);
        assert!(c.group_digits);
        assert_eq!(c.separator, ',');
        assert_eq!(c.batch_threads, None);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let c: GeezConfig = toml::from_str("color = \"never\"\nseparator = \" \"\n").unwrap();
        assert_eq!(c.color, ColorMode::Never);
        assert_eq!(c.separator, ' ');
        assert!(c.group_digits);
        assert!(!c.render_config().color);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested/config.toml");
        let config = GeezConfig {
            color: ColorMode::Always,
            group_digits: false,
            separator: '.',
            batch_threads: Some(4),
        };
        config.save(&path).unwrap();
        assert_eq!(GeezConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = GeezConfig::resolve(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "group_digits = \"maybe\"").unwrap();
        assert!(matches!(
            GeezConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
