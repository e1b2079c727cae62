//! Output formats for programs
//!
//! This module contains the format implementations for serializing a
//! [`Program`]:
//! - `json` - the canonical structured document (and its decoder)
//! - `text` - the human-editable text form
//!
//! Each format implements the [`Formatter`] trait and is looked up by name in
//! a [`FormatRegistry`].

pub mod json;
pub mod text;

pub use json::{from_json, to_json, JsonFormatter};
pub use text::{print_program, TextFormatter};

use crate::bril::ast::Program;
use crate::bril::config::BriltxtConfig;
use std::collections::BTreeMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for program formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "json", "text")
    fn name(&self) -> &str;

    fn serialize(&self, program: &Program) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Registry of program formatters, keyed by name
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// Add a formatter under its own name, replacing any previous one
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn serialize(&self, program: &Program, format: &str) -> Result<String, FormatError> {
        match self.get(format) {
            Some(formatter) => formatter.serialize(program),
            None => Err(FormatError::FormatNotFound(format.to_string())),
        }
    }

    /// Registered format names, in order
    pub fn list_formats(&self) -> Vec<String> {
        self.formatters.keys().cloned().collect()
    }

    /// Create a registry with the built-in formatters in their default setup
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(JsonFormatter::default());
        registry.register(TextFormatter::default());
        registry
    }

    /// Create a registry with the built-in formatters set up from `config`
    pub fn from_config(config: &BriltxtConfig) -> Self {
        let mut registry = Self::new();
        registry.register(JsonFormatter::new(config.json.pretty));
        registry.register(TextFormatter::new(config.text.indent.clone()));
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
