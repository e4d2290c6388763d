//! Settings with layered loading.
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `--config <file>` or `$XDG_CONFIG_HOME/bst-viz/bst-viz.toml`
//! 3. Environment variables: `BSTVIZ_*` prefix (e.g. `BSTVIZ_STEP_INTERVAL_MS=250`)

use std::path::{Path, PathBuf};
use std::time::Duration;

use colored::Color;
use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::animator::DEFAULT_STEP_INTERVAL;

/// Settings couldn't be assembled.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source was unreadable or held a value of the wrong type.
    #[error("invalid configuration: {0}")]
    Load(#[from] config::ConfigError),
    /// `highlight_color` isn't a color name `colored` knows.
    #[error("invalid configuration: unknown highlight_color `{0}`")]
    UnknownColor(String),
}

/// Everything the CLI can be told through files or the environment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// How long each node stays highlighted during a traversal.
    pub step_interval_ms: u64,
    /// Where `generate` leaves the parsed values for `show`/`traverse`.
    pub handoff_path: PathBuf,
    /// `colored` color name for the highlighted node.
    pub highlight_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            step_interval_ms: DEFAULT_STEP_INTERVAL.as_millis() as u64,
            handoff_path: default_handoff_path(),
            highlight_color: "yellow".into(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "bst-viz")
}

fn default_handoff_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(std::env::temp_dir)
        .join("tree-data.json")
}

/// `$XDG_CONFIG_HOME/bst-viz/bst-viz.toml` (or the platform equivalent).
pub fn global_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("bst-viz.toml"))
}

impl Settings {
    /// Loads settings from defaults, then `file` (or the global config file if `file` is
    /// `None`), then `BSTVIZ_*` variables. An explicitly given file must exist.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("step_interval_ms", defaults.step_interval_ms)?
            .set_default(
                "handoff_path",
                defaults.handoff_path.to_string_lossy().to_string(),
            )?
            .set_default("highlight_color", defaults.highlight_color)?;

        match file {
            Some(path) => {
                debug!(path = %path.display(), "Loading config file");
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                if let Some(path) = global_config_path() {
                    builder = builder.add_source(File::from(path).required(false));
                }
            }
        }

        let config = builder
            .add_source(Environment::with_prefix("BSTVIZ").try_parsing(true))
            .build()?;
        let settings: Self = config.try_deserialize()?;
        if settings.highlight_color.parse::<Color>().is_err() {
            return Err(ConfigError::UnknownColor(settings.highlight_color));
        }
        debug!(?settings, "Loaded settings");
        Ok(settings)
    }

    /// [`Settings::highlight_color`] parsed. [`Settings::load`] rejects unknown names, so the
    /// yellow fallback is only reached for settings built by hand.
    pub fn highlight(&self) -> Color {
        self.highlight_color.parse().unwrap_or_else(|()| {
            warn!(color = %self.highlight_color, "Unknown highlight color, using yellow");
            Color::Yellow
        })
    }

    /// [`Settings::step_interval_ms`] as a `Duration`.
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }
}
