//! Shared configuration loader for the fastsnip toolchain.
//!
//! `defaults/fastsnip.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. User files and `FASTSNIP_*` environment
//! variables are layered on top via [`Loader`] before deserializing into
//! [`FastsnipConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, Map, ValueKind};
use fastsnip_core::{DedentPolicy, FormattingRules, LineEnding};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/fastsnip.default.toml");

/// Top-level configuration consumed by fastsnip applications.
#[derive(Debug, Clone, Deserialize)]
pub struct FastsnipConfig {
    pub formatting: FormattingConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Mirrors the knobs exposed by the snippet formatter.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingConfig {
    pub dedent: DedentPolicy,
    pub line_ending: LineEnding,
}

impl From<FormattingConfig> for FormattingRules {
    fn from(config: FormattingConfig) -> Self {
        FormattingRules::from(&config)
    }
}

impl From<&FormattingConfig> for FormattingRules {
    fn from(config: &FormattingConfig) -> Self {
        FormattingRules {
            dedent: config.dedent,
            line_ending: config.line_ending,
        }
    }
}

/// How raw input is prepared before it reaches the formatter.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub normalize_line_endings: bool,
}

/// Where finished snippets go.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub clipboard: bool,
}

/// Name of the per-directory configuration file.
pub const CONFIG_FILE_NAME: &str = "fastsnip.toml";

/// Prefix of environment overrides, e.g. `FASTSNIP_FORMATTING__DEDENT=reject`.
pub const ENV_PREFIX: &str = "FASTSNIP";

/// Layers configuration sources over the embedded defaults.
///
/// Later layers win. [`Loader::standard`] builds the order the fastsnip
/// binary uses:
///
/// 1. embedded `fastsnip.default.toml`
/// 2. `fastsnip.toml` in the working directory, if present
/// 3. an explicit `--config` file, which must exist
/// 4. `FASTSNIP_<SECTION>__<KEY>` environment variables
///
/// Command-line flags are applied by the caller on the built config.
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

    /// The full layering used by the fastsnip binary.
    pub fn standard(explicit_path: Option<&Path>) -> Self {
        let loader = Self::new().with_optional_file(CONFIG_FILE_NAME);
        let loader = match explicit_path {
            Some(path) => loader.with_file(path),
            None => loader,
        };
        loader.with_env()
    }

    /// Layer a TOML file. Missing files trigger an error at build time.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_toml(path.as_ref(), true)
    }

    /// Layer an optional TOML file (ignored if the file is absent).
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_toml(path.as_ref(), false)
    }

    /// Layer `FASTSNIP_*` variables from the process environment.
    pub fn with_env(self) -> Self {
        self.layer_env(None)
    }

    /// Layer `FASTSNIP_*` variables from `vars` instead of the process
    /// environment.
    pub fn with_env_vars(self, vars: Map<String, String>) -> Self {
        self.layer_env(Some(vars))
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
    pub fn build(self) -> Result<FastsnipConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    fn layer_env(mut self, vars: Option<Map<String, String>>) -> Self {
        let source = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(vars);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Defaults only: no files, no environment.
pub fn load_defaults() -> Result<FastsnipConfig, ConfigError> {
    Loader::new().build()
}
