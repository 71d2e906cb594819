//! # jvmetrics-format
//!
//! **Tier 3 (Formatting)**
//!
//! Renders a [`MetricsReport`] as the classic text lines or as a JSON
//! [`MetricsReceipt`].
//!
//! ## What belongs here
//! * Text rendering of the ranking and the naming percentage
//! * Receipt construction and JSON serialization
//! * Writing to stdout or any `Write`
//!
//! ## What does NOT belong here
//! * Ranking or percentage math (use jvmetrics-aggregate)
//! * Argument parsing (use jvmetrics-config)

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use jvmetrics_types::{
    MetricsArgsMeta, MetricsReceipt, MetricsReport, OutputFormat, SCHEMA_VERSION, ScanSummary,
    ToolInfo,
};

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Format a percentage with at most two decimals and no trailing zeros.
///
/// Ties round to even, so `3.125` prints as `3.12`.
///
/// ```
/// use jvmetrics_format::format_percentage;
/// assert_eq!(format_percentage(50.0), "50");
/// assert_eq!(format_percentage(12.5), "12.5");
/// assert_eq!(format_percentage(100.0 / 3.0), "33.33");
/// assert_eq!(format_percentage(3.125), "3.12");
/// ```
pub fn format_percentage(pct: f64) -> String {
    let fixed = format!("{pct:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Round a percentage to two decimals the same way the text output does.
pub fn round_percentage(pct: f64) -> f64 {
    format!("{pct:.2}").parse().unwrap_or(pct)
}

// -----------
// Text output
// -----------

pub fn render_text(report: &MetricsReport) -> String {
    let mut s = String::new();

    if report.has_methods() {
        s.push_str(&format!(
            "\nTop {} most complex methods/functions in the directory:\n",
            report.top_n
        ));
        for m in &report.top {
            s.push_str(&format!(
                "Method: {}, File: {}, Complexity: {}\n",
                m.name, m.file, m.complexity
            ));
        }
    } else {
        s.push_str("\nNo methods were found in the directory.\n");
    }

    if let Some(pct) = report.non_conforming_pct {
        s.push_str(&format!(
            "\nPercentage of methods not adhering to naming convention: {}%\n",
            format_percentage(pct)
        ));
    }

    s
}

// -----------
// JSON output
// -----------

/// Run context the receipt records alongside the report.
#[derive(Debug, Clone)]
pub struct ReceiptContext {
    pub root: String,
    pub args: MetricsArgsMeta,
}

pub fn build_receipt(
    report: &MetricsReport,
    summary: &ScanSummary,
    ctx: &ReceiptContext,
) -> MetricsReceipt {
    MetricsReceipt {
        schema_version: SCHEMA_VERSION,
        generated_at_ms: now_ms(),
        tool: ToolInfo::current(),
        status: summary.status(),
        root: ctx.root.clone(),
        args: ctx.args.clone(),
        files_scanned: summary.files_scanned,
        files_failed: summary.files_failed,
        totals: report.totals,
        non_conforming_pct: report.non_conforming_pct.map(round_percentage),
        top: report.top.clone(),
        warnings: summary.warnings.clone(),
    }
}

pub fn render_json(receipt: &MetricsReceipt) -> Result<String> {
    Ok(serde_json::to_string(receipt)?)
}

// -------
// Writers
// -------

pub fn write_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    report: &MetricsReport,
    summary: &ScanSummary,
    ctx: &ReceiptContext,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            write!(out, "{}", render_text(report))?;
        }
        OutputFormat::Json => {
            let receipt = build_receipt(report, summary, ctx);
            writeln!(out, "{}", render_json(&receipt)?)?;
        }
    }
    out.flush()?;
    Ok(())
}

pub fn print_report(
    format: OutputFormat,
    report: &MetricsReport,
    summary: &ScanSummary,
    ctx: &ReceiptContext,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, format, report, summary, ctx)
}
