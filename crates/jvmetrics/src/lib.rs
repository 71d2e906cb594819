//! # jvmetrics
//!
//! **Tier 5 (Binary)**
//!
//! Command-line entry point: resolves settings, lists the directory, runs
//! every file through the scanner into one aggregator, and prints the report.
//!
//! ## What belongs here
//! * Argument and config resolution
//! * Logging setup and the interactive directory prompt
//! * User-facing error formatting
//!
//! ## What does NOT belong here
//! * Scanning, ranking, or rendering logic

mod error_hints;
pub mod interactive;
pub mod logging;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;

use jvmetrics_aggregate::{Aggregator, scan_paths};
use jvmetrics_config::{Cli, Settings, load_config};
use jvmetrics_format::{ReceiptContext, print_report};
use jvmetrics_types::{MetricsArgsMeta, MetricsReport, ScanSummary};

/// Render an error for stderr, with hints when one applies.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}

/// Entry point used by the `jvmetrics` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let config = load_config(cli.config.as_deref(), &cwd)?;
    let settings = Settings::resolve(&cli, config.as_ref());
    tracing::debug!(?settings, "settings resolved");

    let dir = resolve_directory(cli.dir.clone())?;
    let (report, summary) = analyze(&dir, &settings)?;

    let ctx = ReceiptContext {
        root: dir.display().to_string(),
        args: MetricsArgsMeta {
            declarations: settings.declarations,
            key_mode: settings.key_mode,
            top: settings.top,
        },
    };
    print_report(settings.format, &report, &summary, &ctx)
}

fn resolve_directory(arg: Option<PathBuf>) -> Result<PathBuf> {
    match arg {
        Some(dir) => Ok(dir),
        None if interactive::should_be_interactive() => interactive::prompt_directory(),
        None => bail!("No directory given"),
    }
}

/// Scan every `.java` and `.kt` file directly inside `dir`.
///
/// Unreadable files are skipped and listed in the summary; only an invalid
/// `dir` fails the run.
pub fn analyze(dir: &Path, settings: &Settings) -> Result<(MetricsReport, ScanSummary)> {
    let files = jvmetrics_walk::list_source_files(dir)?;

    let mut aggregator = Aggregator::new(settings.key_mode);
    let summary = scan_paths(&files, settings.declarations, &mut aggregator);
    if summary.files_failed > 0 {
        tracing::warn!(
            failed = summary.files_failed,
            scanned = summary.files_scanned,
            "some files could not be read"
        );
    }

    Ok((aggregator.report(settings.top), summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jvmetrics_types::KeyMode;
    use std::fs;

    #[test]
    fn analyze_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = analyze(&dir.path().join("gone"), &Settings::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid directory path"));
    }

    #[test]
    fn analyze_collects_java_and_kotlin() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("A.java"),
            "public void run() {\n    if (x) {\n    }\n}\n",
        )
        .unwrap();
        fs::write(dir.path().join("b.kt"), "fun run() {\n}\n").unwrap();

        let (report, summary) = analyze(dir.path(), &Settings::default()).unwrap();
        assert_eq!(summary.files_scanned, 2);
        assert_eq!(report.totals.total_methods, 2);
        // Kotlin is scanned after Java, so its `run` replaces the Java one.
        assert_eq!(report.top.len(), 1);
        assert_eq!(report.top[0].file, "b.kt");

        let settings = Settings {
            key_mode: KeyMode::FileQualified,
            ..Settings::default()
        };
        let (report, _) = analyze(dir.path(), &settings).unwrap();
        assert_eq!(report.top.len(), 2);
        assert_eq!(report.top[0].file, "A.java");
    }

    #[test]
    fn explicit_directory_is_used_as_is() {
        let dir = resolve_directory(Some(PathBuf::from("src"))).unwrap();
        assert_eq!(dir, PathBuf::from("src"));
    }
}
