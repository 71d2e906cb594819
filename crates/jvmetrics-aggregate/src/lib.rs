//! # jvmetrics-aggregate
//!
//! **Tier 1 (Core)**
//!
//! The run-wide registry of finished methods and the declaration counters.
//! One [`Aggregator`] is created per run and handed to every file scan; the
//! reporter reads it once at the end.
//!
//! ## What belongs here
//! * Method registry keyed by name (or `file::name`)
//! * Declaration totals
//! * Ranking and the non-conforming percentage
//! * Driving a list of files through the scanner
//!
//! ## What does NOT belong here
//! * Line scanning (use jvmetrics-scan)
//! * Rendering (use jvmetrics-format)

use std::collections::HashMap;
use std::path::PathBuf;

use jvmetrics_scan::{ScanSink, scan_file};
use jvmetrics_types::{
    DeclarationStyle, KeyMode, MethodRecord, MetricsReport, ScanSummary, Totals,
};

/// Percentage of non-conforming declarations, or `None` when there were none.
///
/// The value is unrounded; rendering rounds it to two decimals.
#[must_use]
pub fn non_conforming_percentage(totals: &Totals) -> Option<f64> {
    if totals.total_methods == 0 {
        return None;
    }
    Some(totals.non_conforming_methods as f64 / totals.total_methods as f64 * 100.0)
}

/// Registry of finished methods plus declaration totals for one run.
///
/// Records are kept in first-insertion order of their key. Recording a key
/// that already exists replaces its name, file and score but keeps its
/// position, which is what ranking uses to break ties.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    key_mode: KeyMode,
    records: Vec<MethodRecord>,
    index: HashMap<String, usize>,
    totals: Totals,
}

impl Aggregator {
    pub fn new(key_mode: KeyMode) -> Self {
        Self {
            key_mode,
            ..Self::default()
        }
    }

    /// Registry key for a method under this run's key mode.
    pub fn key_for(&self, name: &str, file: &str) -> String {
        match self.key_mode {
            KeyMode::Name => name.to_string(),
            KeyMode::FileQualified => format!("{file}::{name}"),
        }
    }

    /// Store a finished method. Last write wins for an existing key.
    pub fn record_method(&mut self, name: &str, file: &str, complexity: usize) {
        let record = MethodRecord {
            name: name.to_string(),
            file: file.to_string(),
            complexity,
        };
        let key = self.key_for(name, file);
        match self.index.get(&key) {
            Some(&slot) => {
                tracing::debug!(
                    key = %key,
                    previous_file = %self.records[slot].file,
                    file,
                    "method record replaced"
                );
                self.records[slot] = record;
            }
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Count one declaration line.
    pub fn record_declaration(&mut self, conforming: bool) {
        self.totals.total_methods += 1;
        if !conforming {
            self.totals.non_conforming_methods += 1;
        }
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    /// Number of distinct registry keys.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&MethodRecord> {
        self.index.get(key).map(|&slot| &self.records[slot])
    }

    /// Records in first-insertion order.
    pub fn records(&self) -> &[MethodRecord] {
        &self.records
    }

    /// The `k` most complex methods, descending; ties keep insertion order.
    pub fn top_n(&self, k: usize) -> Vec<MethodRecord> {
        let mut ranked: Vec<&MethodRecord> = self.records.iter().collect();
        // Stable sort keeps insertion order among equal scores.
        ranked.sort_by(|a, b| b.complexity.cmp(&a.complexity));
        ranked.into_iter().take(k).cloned().collect()
    }

    pub fn non_conforming_percentage(&self) -> Option<f64> {
        non_conforming_percentage(&self.totals)
    }

    /// Snapshot everything the reporter needs.
    pub fn report(&self, top: usize) -> MetricsReport {
        MetricsReport {
            top_n: top,
            top: self.top_n(top),
            recorded_methods: self.len(),
            totals: self.totals,
            non_conforming_pct: self.non_conforming_percentage(),
        }
    }
}

impl ScanSink for Aggregator {
    fn record_declaration(&mut self, conforming: bool) {
        Aggregator::record_declaration(self, conforming);
    }

    fn record_method(&mut self, name: &str, file: &str, complexity: usize) {
        Aggregator::record_method(self, name, file, complexity);
    }
}

/// Scan `files` in order into `aggregator`.
///
/// A file that cannot be read is logged and counted, and scanning moves on
/// to the next file.
pub fn scan_paths(
    files: &[PathBuf],
    style: DeclarationStyle,
    aggregator: &mut Aggregator,
) -> ScanSummary {
    let mut summary = ScanSummary::default();
    for path in files {
        match scan_file(path, style, aggregator) {
            Ok(_) => summary.files_scanned += 1,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping file");
                summary.files_failed += 1;
                summary.warnings.push(err.to_string());
            }
        }
    }
    summary
}
