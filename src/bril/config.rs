//! Configuration loader for the converters
//!
//! `defaults/briltxt.default.toml` is embedded into the binaries so the
//! documented defaults and runtime behavior stay in sync. User files and
//! command-line settings are layered on top via [`Loader`] before
//! deserializing into [`BriltxtConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/briltxt.default.toml");

/// Optional per-directory configuration file picked up by the binaries
pub const DEFAULT_USER_FILE: &str = "briltxt.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct BriltxtConfig {
    pub json: JsonConfig,
    pub text: TextConfig,
}

/// Settings for the JSON document output
#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    pub pretty: bool,
}

/// Settings for the text output
#[derive(Debug, Clone, Deserialize)]
pub struct TextConfig {
    pub indent: String,
}

/// Layers user overrides over the built-in defaults
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// A loader holding only the embedded defaults
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer a TOML file that must exist
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_source(path.as_ref(), true)
    }

    /// Layer a TOML file, skipping it when absent
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_source(path.as_ref(), false)
    }

    fn with_source(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Override one dotted key, e.g. `json.pretty`; used for command-line flags
    pub fn set_override<V>(mut self, key: &str, value: V) -> Result<Self, ConfigError>
    where
        V: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<BriltxtConfig, ConfigError> {
        let merged = self.builder.build()?;
        merged.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<BriltxtConfig, ConfigError> {
    Loader::new().build()
}
