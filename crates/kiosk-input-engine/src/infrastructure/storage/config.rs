//! TOML-based configuration for the injection engine.
//!
//! Every field has a default, so a missing file or a partial file both work:
//!
//! ```toml
//! [engine]
//! modifier_policy = "degrade"   # or "reject"
//! log_level = "info"
//!
//! [gesture]
//! tap_duration_ms = 50
//! swipe_duration_ms = 250
//! swipe_fraction = 0.25
//!
//! [shell]
//! enabled = true
//! program = "input"
//! ```
//!
//! # Serde default values
//!
//! Fields annotated with `#[serde(default = "some_fn")]` take the return value
//! of `some_fn()` when absent from the file.  Whole sections annotated with
//! `#[serde(default)]` fall back to their `Default` impl.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::dispatcher::DispatchOptions;
use crate::application::strategies::GestureTiming;
use crate::application::strategy::ModifierPolicy;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but makes no sense.
    #[error("invalid config value: {0}")]
    Invalid(String),
}

// ── Config schema types ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    #[serde(default)]
    pub engine: EngineSection,
    #[serde(default)]
    pub gesture: GestureSection,
    #[serde(default)]
    pub shell: ShellSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineSection {
    #[serde(default)]
    pub modifier_policy: ModifierPolicy,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureSection {
    #[serde(default = "default_tap_duration_ms")]
    pub tap_duration_ms: u64,
    #[serde(default = "default_swipe_duration_ms")]
    pub swipe_duration_ms: u64,
    /// Swipe length as a fraction of the screen dimension, in `(0, 0.5]`.
    #[serde(default = "default_swipe_fraction")]
    pub swipe_fraction: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellSection {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_program")]
    pub program: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}
fn default_tap_duration_ms() -> u64 {
    50
}
fn default_swipe_duration_ms() -> u64 {
    250
}
fn default_swipe_fraction() -> f32 {
    0.25
}
fn default_true() -> bool {
    true
}
fn default_program() -> String {
    "input".to_string()
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            modifier_policy: ModifierPolicy::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for GestureSection {
    fn default() -> Self {
        Self {
            tap_duration_ms: default_tap_duration_ms(),
            swipe_duration_ms: default_swipe_duration_ms(),
            swipe_fraction: default_swipe_fraction(),
        }
    }
}

impl Default for ShellSection {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            program: default_program(),
        }
    }
}

impl EngineConfig {
    /// Parses and validates TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let cfg: EngineConfig = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fraction = self.gesture.swipe_fraction;
        if !(fraction > 0.0 && fraction <= 0.5) {
            return Err(ConfigError::Invalid(format!(
                "gesture.swipe_fraction must be in (0, 0.5], got {fraction}"
            )));
        }
        if self.shell.enabled && self.shell.program.trim().is_empty() {
            return Err(ConfigError::Invalid("shell.program is empty".into()));
        }
        Ok(())
    }

    /// The dispatcher settings this config describes.
    pub fn dispatch_options(&self) -> DispatchOptions {
        DispatchOptions {
            modifier_policy: self.engine.modifier_policy,
            gesture: GestureTiming {
                tap_duration_ms: self.gesture.tap_duration_ms,
                swipe_duration_ms: self.gesture.swipe_duration_ms,
                swipe_fraction: self.gesture.swipe_fraction,
            },
            shell_program: self.shell.enabled.then(|| self.shell.program.clone()),
        }
    }
}

/// Loads `EngineConfig` from `path`, returning `EngineConfig::default()` if
/// the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// [`ConfigError::Parse`] if the TOML is malformed, and
/// [`ConfigError::Invalid`] for out-of-range values.
pub fn load_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => EngineConfig::from_toml(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(EngineConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
