//! Shared configuration loader for the msgparts toolchain.
//!
//! `defaults/msgparts.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`MsgpartsConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use msgparts::rules::{DeserializeRules, DelimiterPair, LatexDelimiters, PermalinkStyle};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/msgparts.default.toml");

/// Top-level configuration consumed by msgparts applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MsgpartsConfig {
    pub latex_maths_delims: LatexMathsDelimsConfig,
    pub permalinks: PermalinksConfig,
    pub serialize: SerializeConfig,
}

/// Delimiters for inline (`span`) and display (`div`) math.
#[derive(Debug, Clone, Deserialize)]
pub struct LatexMathsDelimsConfig {
    pub inline: DelimiterConfig,
    pub display: DelimiterConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DelimiterConfig {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PermalinksConfig {
    pub prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SerializeConfig {
    pub force_html: bool,
}

impl From<&DelimiterConfig> for DelimiterPair {
    fn from(config: &DelimiterConfig) -> Self {
        DelimiterPair::new(config.left.clone(), config.right.clone())
    }
}

impl From<&LatexMathsDelimsConfig> for LatexDelimiters {
    fn from(config: &LatexMathsDelimsConfig) -> Self {
        LatexDelimiters {
            inline: (&config.inline).into(),
            display: (&config.display).into(),
        }
    }
}

impl From<&MsgpartsConfig> for DeserializeRules {
    fn from(config: &MsgpartsConfig) -> Self {
        DeserializeRules {
            latex: (&config.latex_maths_delims).into(),
            permalinks: PermalinkStyle::from_prefix(&config.permalinks.prefix),
            force_html: config.serialize.force_html,
        }
    }
}

impl From<MsgpartsConfig> for DeserializeRules {
    fn from(config: MsgpartsConfig) -> Self {
        (&config).into()
    }
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MsgpartsConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MsgpartsConfig, ConfigError> {
    Loader::new().build()
}
