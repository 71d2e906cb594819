//! # jvmetrics-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the data structures and contracts shared by every
//! `jvmetrics` crate. It contains only data types, Serde definitions, and
//! `SCHEMA_VERSION`.
//!
//! ## What belongs here
//! * Pure data structs (records, totals, reports, receipts)
//! * Run-wide enums shared with the CLI (`DeclarationStyle`, `KeyMode`)
//! * Stability markers (`SCHEMA_VERSION`)
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Scanning or ranking logic

use std::path::Path;

use serde::{Deserialize, Serialize};

/// The current schema version for JSON receipts.
pub const SCHEMA_VERSION: u32 = 1;

/// Default number of methods listed in the ranking.
pub const DEFAULT_TOP: usize = 3;

/// Source language of a scanned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    Java,
    Kotlin,
}

impl Language {
    /// Languages in the order their files are scanned.
    pub const ALL: [Language; 2] = [Language::Java, Language::Kotlin];

    /// File-name suffix that selects this language, dot included.
    pub fn extension(self) -> &'static str {
        match self {
            Language::Java => ".java",
            Language::Kotlin => ".kt",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Kotlin => "kotlin",
        }
    }

    /// Select a language from a file name suffix.
    ///
    /// Matching is on the raw file name, so `Foo.java` and `.java` both
    /// select Java while `Foo.JAVA` selects nothing.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        Self::ALL
            .into_iter()
            .find(|lang| name.ends_with(lang.extension()))
    }
}

/// How declaration lines are recognized and names extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum DeclarationStyle {
    /// Modifier / `fun` prefix with substring name extraction.
    #[default]
    Prefix,
    /// Whole-line pattern that requires the opening brace on the declaration line.
    Strict,
}

impl DeclarationStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            DeclarationStyle::Prefix => "prefix",
            DeclarationStyle::Strict => "strict",
        }
    }
}

/// How method records are keyed in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum KeyMode {
    /// Bare method name; a later method with the same name replaces the earlier one.
    #[default]
    #[serde(rename = "name")]
    Name,
    /// `file::name`; equal names in different files are kept apart.
    #[serde(rename = "file")]
    #[cfg_attr(feature = "clap", value(name = "file"))]
    FileQualified,
}

impl KeyMode {
    pub fn as_str(self) -> &'static str {
        match self {
            KeyMode::Name => "name",
            KeyMode::FileQualified => "file",
        }
    }
}

/// Report rendering selected by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Plain text lines on stdout.
    #[default]
    Text,
    /// A single JSON receipt.
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// One finalized method: its name, the file it came from, and its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRecord {
    pub name: String,
    pub file: String,
    pub complexity: usize,
}

/// Run-wide declaration counters. Never decrease during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub total_methods: usize,
    pub non_conforming_methods: usize,
}

/// Ranking and naming results read from the aggregator once all files are scanned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Requested ranking length.
    pub top_n: usize,
    /// Highest-complexity methods, descending.
    pub top: Vec<MethodRecord>,
    /// Number of distinct registry keys.
    pub recorded_methods: usize,
    pub totals: Totals,
    /// `None` when no declarations were seen.
    pub non_conforming_pct: Option<f64>,
}

impl MetricsReport {
    pub fn has_methods(&self) -> bool {
        !self.top.is_empty()
    }
}

/// File-level bookkeeping for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub files_failed: usize,
    /// One message per file that could not be read.
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    Complete,
    Partial,
}

impl ScanSummary {
    pub fn status(&self) -> ScanStatus {
        if self.files_failed == 0 {
            ScanStatus::Complete
        } else {
            ScanStatus::Partial
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "jvmetrics".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsArgsMeta {
    pub declarations: DeclarationStyle,
    pub key_mode: KeyMode,
    pub top: usize,
}

/// JSON envelope written by `--format json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReceipt {
    pub schema_version: u32,
    pub generated_at_ms: u128,
    pub tool: ToolInfo,
    pub status: ScanStatus,
    pub root: String,
    pub args: MetricsArgsMeta,
    pub files_scanned: usize,
    pub files_failed: usize,
    pub totals: Totals,
    pub non_conforming_pct: Option<f64>,
    pub top: Vec<MethodRecord>,
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn language_from_path_uses_suffix() {
        assert_eq!(
            Language::from_path(&PathBuf::from("src/Foo.java")),
            Some(Language::Java)
        );
        assert_eq!(
            Language::from_path(&PathBuf::from("Main.kt")),
            Some(Language::Kotlin)
        );
        assert_eq!(Language::from_path(&PathBuf::from("build.kts")), None);
        assert_eq!(Language::from_path(&PathBuf::from("Foo.JAVA")), None);
        assert_eq!(Language::from_path(&PathBuf::from("README.md")), None);
    }

    #[test]
    fn key_mode_serializes_short_names() {
        assert_eq!(serde_json::to_string(&KeyMode::Name).unwrap(), "\"name\"");
        assert_eq!(
            serde_json::to_string(&KeyMode::FileQualified).unwrap(),
            "\"file\""
        );
    }

    #[test]
    fn declaration_style_defaults_to_prefix() {
        assert_eq!(DeclarationStyle::default(), DeclarationStyle::Prefix);
        assert_eq!(
            serde_json::from_str::<DeclarationStyle>("\"strict\"").unwrap(),
            DeclarationStyle::Strict
        );
    }

    #[test]
    fn output_format_round_trips_lowercase() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
        assert_eq!(serde_json::to_string(&OutputFormat::Json).unwrap(), "\"json\"");
        assert_eq!(OutputFormat::Json.as_str(), "json");
    }

    #[test]
    fn summary_status_reflects_failures() {
        let mut summary = ScanSummary::default();
        assert_eq!(summary.status(), ScanStatus::Complete);
        summary.files_failed = 1;
        assert_eq!(summary.status(), ScanStatus::Partial);
    }
}
