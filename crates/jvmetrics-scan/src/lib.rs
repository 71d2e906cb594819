//! # jvmetrics-scan
//!
//! **Tier 1 (Core)**
//!
//! Heuristic, line-oriented method detection for Java and Kotlin sources.
//! Each line is trimmed and classified, declarations are recognized by a
//! per-language pattern, and a brace-depth counter decides where a method
//! body ends. While a body is open, lines containing a control-flow keyword
//! add to the method's complexity score.
//!
//! ## What belongs here
//! * Line classification (comments vs code)
//! * Declaration recognition and name extraction
//! * The per-file scanning state machine
//! * The naming convention check
//!
//! ## What does NOT belong here
//! * Cross-file aggregation and ranking (use jvmetrics-aggregate)
//! * Directory listing (use jvmetrics-walk)
//! * Output formatting
//!
//! ## Limitations
//!
//! This is not a parser. Comment markers or braces inside string literals,
//! declarations split across lines, lambdas, and nested functions are all
//! handled approximately or not at all.

pub mod classify;
pub mod naming;
pub mod profile;
pub mod scanner;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use jvmetrics_types::{DeclarationStyle, Language};
use thiserror::Error;

pub use classify::{LineClass, LineClassifier};
pub use naming::is_conforming_name;
pub use profile::LanguageProfile;
pub use scanner::{FileScanner, FileStats, ScanState};

/// Receives what the scanner finds. Implemented by the run-wide aggregator.
pub trait ScanSink {
    /// A declaration line was recognized; `conforming` is the naming check result.
    fn record_declaration(&mut self, conforming: bool);

    /// A method body closed with the given complexity.
    fn record_method(&mut self, name: &str, file: &str, complexity: usize);
}

/// A sink that keeps everything one scan reported, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTally {
    pub declarations: Vec<bool>,
    /// `(name, file, complexity)` in the order methods closed.
    pub methods: Vec<(String, String, usize)>,
}

impl ScanSink for FileTally {
    fn record_declaration(&mut self, conforming: bool) {
        self.declarations.push(conforming);
    }

    fn record_method(&mut self, name: &str, file: &str, complexity: usize) {
        self.methods
            .push((name.to_string(), file.to_string(), complexity));
    }
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Not a Java or Kotlin source file: {}", .0.display())]
    UnsupportedFile(PathBuf),
}

/// File name used as the method's origin in results.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Scan lines from `reader`. Invalid UTF-8 is replaced rather than rejected.
///
/// On a read error the scan stops; methods already recorded stay recorded
/// and the open method, if any, is dropped.
pub fn scan_reader<R, S>(
    mut reader: R,
    profile: LanguageProfile,
    file_name: &str,
    sink: &mut S,
) -> io::Result<FileStats>
where
    R: BufRead,
    S: ScanSink + ?Sized,
{
    let mut scanner = FileScanner::new(profile, file_name, sink);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        scanner.scan_line(line.trim_end_matches(['\n', '\r']));
    }
    Ok(scanner.finish())
}

/// Scan an in-memory source text.
pub fn scan_source<S: ScanSink + ?Sized>(
    text: &str,
    profile: LanguageProfile,
    file_name: &str,
    sink: &mut S,
) -> FileStats {
    let mut scanner = FileScanner::new(profile, file_name, sink);
    for line in text.lines() {
        scanner.scan_line(line);
    }
    scanner.finish()
}

/// Scan one file on disk, picking the language from its extension.
pub fn scan_file<S: ScanSink + ?Sized>(
    path: &Path,
    style: DeclarationStyle,
    sink: &mut S,
) -> Result<FileStats, ScanError> {
    let language = Language::from_path(path)
        .ok_or_else(|| ScanError::UnsupportedFile(path.to_path_buf()))?;
    let profile = LanguageProfile::new(language, style);
    let read_err = |source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let name = display_name(path);
    let stats = scan_reader(BufReader::new(file), profile, &name, sink).map_err(read_err)?;
    tracing::debug!(
        file = %name,
        language = language.as_str(),
        lines = stats.lines,
        code_lines = stats.code_lines,
        declarations = stats.declarations,
        methods = stats.methods_recorded,
        unclosed = stats.unclosed,
        "file scanned"
    );
    Ok(stats)
}
