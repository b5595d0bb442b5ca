//! Shared configuration loader for applications embedding the codec.
//!
//! `defaults/lessonml.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`CodecConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use lessonml_codec::SerializeRules;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/lessonml.default.toml");

/// Top-level configuration consumed by applications using the codec.
#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    pub serialize: SerializeConfig,
    pub render: RenderConfig,
}

/// Serialization-related configuration groups.
#[derive(Debug, Clone, Deserialize)]
pub struct SerializeConfig {
    pub rules: SerializeRulesConfig,
}

/// Mirrors the knobs exposed by the markup serializer.
#[derive(Debug, Clone, Deserialize)]
pub struct SerializeRulesConfig {
    pub blank_lines_between_blocks: usize,
    pub indent_string: String,
}

impl From<SerializeRulesConfig> for SerializeRules {
    fn from(config: SerializeRulesConfig) -> Self {
        SerializeRules {
            blank_lines_between_blocks: config.blank_lines_between_blocks,
            indent_string: config.indent_string,
        }
    }
}

impl From<&SerializeRulesConfig> for SerializeRules {
    fn from(config: &SerializeRulesConfig) -> Self {
        SerializeRules {
            blank_lines_between_blocks: config.blank_lines_between_blocks,
            indent_string: config.indent_string.clone(),
        }
    }
}

/// Rendering-related configuration groups.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub highlight: HighlightConfig,
}

/// Settings for the syntect-backed highlighter (when the embedding
/// application enables it).
#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    pub theme: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for host-app settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<CodecConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CodecConfig, ConfigError> {
    Loader::new().build()
}
