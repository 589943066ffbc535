//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (26 iterations, reset every 6th, 5 steps back)
//! 2. Global config: `$XDG_CONFIG_HOME/rszipper/rszipper.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `RSZIPPER_*` prefix, `__` between sections
//!
//! Command line flags are merged on top by the CLI layer.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};

/// How the demo prints the finished tree.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Values right-aligned, four columns per level
    #[default]
    Indent,
    /// Box-drawing tree
    Tree,
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStyle::Indent => f.write_str("indent"),
            RenderStyle::Tree => f.write_str("tree"),
        }
    }
}

impl FromStr for RenderStyle {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indent" => Ok(RenderStyle::Indent),
            "tree" => Ok(RenderStyle::Tree),
            other => Err(ApplicationError::InvalidSettings {
                field: "style".into(),
                reason: format!("unknown style '{}', expected 'indent' or 'tree'", other),
            }),
        }
    }
}

/// Parameters of the demo driver loop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DemoSettings {
    /// Number of loop iterations
    pub iterations: u32,
    /// Every `reset_every`-th iteration steps back instead of growing the chain
    pub reset_every: u32,
    /// Steps taken back on a reset iteration
    pub reset_depth: u32,
    /// Value stored in the root node
    pub root_value: i64,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            iterations: 26,
            reset_every: 6,
            reset_depth: 5,
            root_value: -1,
        }
    }
}

impl DemoSettings {
    pub fn validate(&self) -> ApplicationResult<()> {
        if self.reset_every == 0 {
            return Err(ApplicationError::InvalidSettings {
                field: "demo.reset_every".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// True when iteration `i` steps back rather than entering a new branch.
    pub fn is_reset_iteration(&self, i: u32) -> bool {
        self.reset_every != 0 && i % self.reset_every == self.reset_every - 1
    }

    /// True when the first reset is reached and asks for more steps than the
    /// chain built before it is deep.
    pub fn reset_exceeds_chain(&self) -> bool {
        self.iterations >= self.reset_every && self.reset_depth >= self.reset_every
    }

    fn merge(&self, overlay: &RawDemoSettings) -> Self {
        Self {
            iterations: overlay.iterations.unwrap_or(self.iterations),
            reset_every: overlay.reset_every.unwrap_or(self.reset_every),
            reset_depth: overlay.reset_depth.unwrap_or(self.reset_depth),
            root_value: overlay.root_value.unwrap_or(self.root_value),
        }
    }
}

/// Raw demo settings for intermediate parsing (None means "not specified").
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RawDemoSettings {
    pub iterations: Option<u32>,
    pub reset_every: Option<u32>,
    pub reset_depth: Option<u32>,
    pub root_value: Option<i64>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RawSettings {
    pub demo: RawDemoSettings,
    pub style: Option<RenderStyle>,
}

/// Unified configuration for rszipper.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Output style of the demo tree
    pub style: RenderStyle,
    /// Demo driver loop
    pub demo: DemoSettings,
}

/// Get the XDG config directory for rszipper.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rszipper").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rszipper.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).with_path_context("read config", path)?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Read one key, treating "not set" as None and anything unparsable as an error.
fn env_value<V: DeserializeOwned>(config: &Config, key: &str) -> ApplicationResult<Option<V>> {
    match config.get::<V>(key) {
        Ok(value) => Ok(Some(value)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("{}: {}", key, e),
        }),
    }
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins where specified.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            style: overlay.style.unwrap_or(self.style),
            demo: self.demo.merge(&overlay.demo),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist when given
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> ApplicationResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("loading config file: {}", path.display());
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        // 4. Environment variables
        let raw = Self::env_overrides()?;
        current = current.merge_with(&raw);

        current.demo.validate()?;
        Ok(current)
    }

    /// Collect RSZIPPER_* environment variables as raw overrides.
    fn env_overrides() -> ApplicationResult<RawSettings> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("RSZIPPER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        let style = match env_value::<String>(&config, "style")? {
            Some(s) => Some(s.parse::<RenderStyle>()?),
            None => None,
        };

        Ok(RawSettings {
            style,
            demo: RawDemoSettings {
                iterations: env_value(&config, "demo.iterations")?,
                reset_every: env_value(&config, "demo.reset_every")?,
                reset_depth: env_value(&config, "demo.reset_depth")?,
                root_value: env_value(&config, "demo.root_value")?,
            },
        })
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_demo_settings() {
        let settings = Settings::default();
        assert_eq!(settings.demo.iterations, 26);
        assert_eq!(settings.demo.reset_every, 6);
        assert_eq!(settings.demo.reset_depth, 5);
        assert_eq!(settings.demo.root_value, -1);
        assert_eq!(settings.style, RenderStyle::Indent);
    }

    #[test]
    fn test_merge_overrides_only_specified_fields() {
        let base = Settings::default();
        let overlay = RawSettings {
            demo: RawDemoSettings {
                reset_depth: Some(2),
                ..Default::default()
            },
            style: Some(RenderStyle::Tree),
        };

        let merged = base.merge_with(&overlay);
        assert_eq!(merged.demo.reset_depth, 2);
        assert_eq!(merged.demo.iterations, 26);
        assert_eq!(merged.style, RenderStyle::Tree);
    }

    #[rstest]
    #[case(0, false)]
    #[case(4, false)]
    #[case(5, true)]
    #[case(11, true)]
    #[case(12, false)]
    fn test_is_reset_iteration(#[case] i: u32, #[case] expected: bool) {
        assert_eq!(DemoSettings::default().is_reset_iteration(i), expected);
    }

    #[test]
    fn test_zero_reset_every_is_rejected() {
        let settings = DemoSettings {
            reset_every: 0,
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("demo.reset_every"));
        assert!(!settings.is_reset_iteration(3));
    }

    #[rstest]
    #[case("indent", RenderStyle::Indent)]
    #[case("Tree", RenderStyle::Tree)]
    #[case(" tree ", RenderStyle::Tree)]
    fn test_render_style_from_str(#[case] input: &str, #[case] expected: RenderStyle) {
        assert_eq!(input.parse::<RenderStyle>().unwrap(), expected);
    }

    #[test]
    fn test_settings_round_trip_through_toml() {
        let settings = Settings {
            style: RenderStyle::Tree,
            demo: DemoSettings {
                iterations: 3,
                ..Default::default()
            },
        };
        let text = settings.to_toml().unwrap();
        let raw: RawSettings = toml::from_str(&text).unwrap();
        assert_eq!(Settings::default().merge_with(&raw), settings);
    }
}
