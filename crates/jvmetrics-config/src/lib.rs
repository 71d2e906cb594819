//! # jvmetrics-config
//!
//! **Tier 4 (Configuration)**
//!
//! This crate defines the CLI arguments and the `jvmetrics.toml` schema, and
//! merges the two into the settings a run uses.
//!
//! ## What belongs here
//! * Clap `Parser` struct
//! * Configuration file struct definitions (Serde)
//! * Precedence rules: CLI flag, then config file, then default
//!
//! ## What does NOT belong here
//! * Business logic
//! * I/O operations (except config file parsing)

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use jvmetrics_types::{DEFAULT_TOP, DeclarationStyle, KeyMode, OutputFormat};

/// File name looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "jvmetrics.toml";

/// `jvmetrics` ranks Java and Kotlin methods by a branching-keyword score
/// and reports how many method names break lowerCamelCase.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "jvmetrics", version, about, long_about = None)]
pub struct Cli {
    /// Directory whose `.java` and `.kt` files are scanned (not recursive).
    ///
    /// Prompted for when omitted on an interactive terminal.
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Number of methods listed in the ranking [default: 3].
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub top: Option<u64>,

    /// Output format [default: text].
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// How declaration lines are recognized [default: prefix].
    #[arg(long, value_enum)]
    pub declarations: Option<DeclarationStyle>,

    /// Registry key: bare method name (last write wins) or `file::name` [default: name].
    #[arg(long, value_enum)]
    pub key_mode: Option<KeyMode>,

    /// Path to a `jvmetrics.toml` file (default: ./jvmetrics.toml if present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose logging to stderr (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

// ---------------------
// Configuration file
// ---------------------

/// Root of `jvmetrics.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    /// Scanner settings.
    pub scan: ScanConfig,

    /// Report settings.
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// "prefix" or "strict".
    pub declarations: Option<DeclarationStyle>,

    /// "name" or "file".
    pub key_mode: Option<KeyMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Ranking length.
    pub top: Option<usize>,

    /// "text" or "json".
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

impl TomlConfig {
    /// Parse from a TOML string.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.report.top == Some(0) {
            return Err(ConfigError::Invalid(
                "[report] top must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load the config file for a run.
///
/// An explicit path must exist and parse. Without one, `jvmetrics.toml` in
/// `cwd` is used when present; a file that exists but fails to parse is
/// still an error.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<TomlConfig>, ConfigError> {
    if let Some(path) = explicit {
        return TomlConfig::from_file(path).map(Some);
    }
    let implicit = cwd.join(CONFIG_FILE_NAME);
    if implicit.is_file() {
        TomlConfig::from_file(&implicit).map(Some)
    } else {
        Ok(None)
    }
}

// ---------------------
// Resolved settings
// ---------------------

/// Effective settings after applying precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub declarations: DeclarationStyle,
    pub key_mode: KeyMode,
    pub top: usize,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            declarations: DeclarationStyle::default(),
            key_mode: KeyMode::default(),
            top: DEFAULT_TOP,
            format: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// CLI flag beats config file beats default.
    pub fn resolve(cli: &Cli, config: Option<&TomlConfig>) -> Self {
        let defaults = Self::default();
        let scan = config.map(|c| &c.scan);
        let report = config.map(|c| &c.report);

        Self {
            declarations: cli
                .declarations
                .or_else(|| scan.and_then(|s| s.declarations))
                .unwrap_or(defaults.declarations),
            key_mode: cli
                .key_mode
                .or_else(|| scan.and_then(|s| s.key_mode))
                .unwrap_or(defaults.key_mode),
            top: cli
                .top
                .and_then(|n| usize::try_from(n).ok())
                .or_else(|| report.and_then(|r| r.top))
                .unwrap_or(defaults.top),
            format: cli
                .format
                .or_else(|| report.and_then(|r| r.format))
                .unwrap_or(defaults.format),
        }
    }
}
