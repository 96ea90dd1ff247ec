//! Shared configuration loader for the weft toolchain.
//!
//! `defaults/weft.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`WeftConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use weft_assembly::{AssemblyOptions, ContentStage};

const DEFAULT_TOML: &str = include_str!("../defaults/weft.default.toml");

/// Top-level configuration consumed by weft applications.
#[derive(Debug, Clone, Deserialize)]
pub struct WeftConfig {
    pub assembly: AssemblyConfig,
    pub media: MediaConfig,
    pub emit: EmitConfig,
}

/// Knobs for the assembly walk.
#[derive(Debug, Clone, Deserialize)]
pub struct AssemblyConfig {
    pub prefer_final: bool,
}

/// Media path resolution.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaConfig {
    /// Base directory for declared asset paths; empty means the current
    /// directory.
    pub base_dir: String,
}

/// Output artifact selection.
#[derive(Debug, Clone, Deserialize)]
pub struct EmitConfig {
    pub default_format: String,
    pub output_dir: String,
}

impl WeftConfig {
    /// Translate the configured knobs into assembly options. The heading
    /// depth limit comes from the chosen emitter, so the caller supplies it.
    pub fn assembly_options(&self, max_heading_depth: u32) -> AssemblyOptions {
        let stage = if self.assembly.prefer_final {
            ContentStage::Final
        } else {
            ContentStage::Draft
        };
        let media_root = if self.media.base_dir.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.media.base_dir))
        };
        AssemblyOptions {
            stage,
            media_root,
            max_heading_depth,
        }
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
    pub fn build(self) -> Result<WeftConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<WeftConfig, ConfigError> {
    Loader::new().build()
}
