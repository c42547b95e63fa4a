//! Shared configuration loader for the quire toolchain.
//!
//! `defaults/quire.default.toml` is embedded into the crate so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`QuireConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use quire_babel::HtmlOptions;
use quire_parser::ParseOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/quire.default.toml");

/// Top-level configuration consumed by quire applications.
#[derive(Debug, Clone, Deserialize)]
pub struct QuireConfig {
    pub parser: ParserConfig,
    pub html: HtmlConfig,
}

/// Mirrors [ParseOptions].
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub max_nesting_depth: usize,
    pub section_ids: bool,
}

/// Mirrors [HtmlOptions].
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub standalone: bool,
    #[serde(default)]
    pub title: Option<String>,
}

impl From<&ParserConfig> for ParseOptions {
    fn from(config: &ParserConfig) -> Self {
        ParseOptions {
            max_nesting_depth: config.max_nesting_depth,
            section_ids: config.section_ids,
        }
    }
}

impl From<&HtmlConfig> for HtmlOptions {
    fn from(config: &HtmlConfig) -> Self {
        HtmlOptions {
            standalone: config.standalone,
            title: config.title.clone().filter(|t| !t.trim().is_empty()),
        }
    }
}

impl QuireConfig {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::from(&self.parser)
    }

    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions::from(&self.html)
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

    /// Apply a single key/value override, e.g. `("html.standalone", true)`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<QuireConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<QuireConfig, ConfigError> {
    Loader::new().build()
}
