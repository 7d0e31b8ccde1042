//! Shared configuration loader for the mdtab toolchain.
//!
//! `defaults/mdtab.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdtabConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdtab_format::{CsvRules, DecorationRules, TableRules};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

const DEFAULT_TOML: &str = include_str!("../defaults/mdtab.default.toml");

/// File name picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "mdtab.toml";

/// Top-level configuration consumed by mdtab applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdtabConfig {
    pub table: TableConfig,
    pub csv: CsvConfig,
    pub decorations: DecorationsConfig,
    pub debounce: DebounceConfig,
}

/// Mirrors the knobs exposed by the table formatter.
#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    pub min_column_width: usize,
    pub fullwidth_padding: bool,
    pub token_heuristics: bool,
    pub skip_fenced_code: bool,
}

impl From<TableConfig> for TableRules {
    fn from(config: TableConfig) -> Self {
        TableRules::from(&config)
    }
}

impl From<&TableConfig> for TableRules {
    fn from(config: &TableConfig) -> Self {
        TableRules {
            min_column_width: config.min_column_width,
            fullwidth_padding: config.fullwidth_padding,
            token_heuristics: config.token_heuristics,
            skip_fenced_code: config.skip_fenced_code,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CsvConfig {
    pub delimiter: char,
    pub min_rows: usize,
}

impl From<&CsvConfig> for CsvRules {
    fn from(config: &CsvConfig) -> Self {
        CsvRules {
            delimiter: config.delimiter,
            min_rows: config.min_rows,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecorationsConfig {
    pub skip_editing_line: bool,
}

impl From<&DecorationsConfig> for DecorationRules {
    fn from(config: &DecorationsConfig) -> Self {
        DecorationRules {
            skip_editing_line: config.skip_editing_line,
        }
    }
}

/// Quiet periods for hosts that format reactively.
#[derive(Debug, Clone, Deserialize)]
pub struct DebounceConfig {
    pub format_delay_ms: u64,
    pub decoration_delay_ms: u64,
}

impl DebounceConfig {
    pub fn format_delay(&self) -> Duration {
        Duration::from_millis(self.format_delay_ms)
    }

    pub fn decoration_delay(&self) -> Duration {
        Duration::from_millis(self.decoration_delay_ms)
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
    pub fn build(self) -> Result<MdtabConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdtabConfig, ConfigError> {
    Loader::new().build()
}
