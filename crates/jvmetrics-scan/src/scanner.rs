//! The per-file state machine: declaration, brace depth, and keyword counting.
//!
//! Braces and keywords are judged once per line, not per occurrence:
//!
//! - a line containing any `{` adds 1 to the depth
//! - a line containing any `}` closes the method when the depth was exactly
//!   1 before the decrement, then subtracts 1
//! - a line containing any control-flow keyword (substring match) adds 1 to
//!   the method's complexity
//!
//! The declaration line itself goes through all three checks. A method whose
//! body never closes before end of file is never recorded.

use regex::Regex;
use std::sync::LazyLock;

use crate::ScanSink;
use crate::classify::LineClassifier;
use crate::naming::is_conforming_name;
use crate::profile::LanguageProfile;

/// Control-flow keywords, matched as plain substrings (`format` counts via `for`).
static CONTROL_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"if|else|switch|case|for|while|default").expect("valid regex literal")
});

/// Whether a line contributes to complexity.
pub fn has_control_keyword(line: &str) -> bool {
    CONTROL_KEYWORDS.is_match(line)
}

/// Mutable state for the scan of one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    pub method_open: bool,
    pub current_method: Option<String>,
    /// Unmatched `{` lines since the declaration. Can go negative on
    /// unbalanced input.
    pub brace_depth: i64,
    pub complexity: usize,
}

impl ScanState {
    fn open(&mut self, name: &str) {
        self.method_open = true;
        self.current_method = Some(name.to_string());
        self.brace_depth = 0;
        self.complexity = 0;
    }

    fn close(&mut self) -> Option<(String, usize)> {
        self.method_open = false;
        let complexity = std::mem::take(&mut self.complexity);
        self.current_method.take().map(|name| (name, complexity))
    }
}

/// Counters describing what one file contributed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    pub lines: usize,
    pub code_lines: usize,
    pub declarations: usize,
    pub methods_recorded: usize,
    /// A method body was still open at end of input.
    pub unclosed: bool,
}

/// Drives one file's lines through the classifier and state machine,
/// reporting declarations and finished methods to a [`ScanSink`].
pub struct FileScanner<'a, S: ScanSink + ?Sized> {
    profile: LanguageProfile,
    file_name: &'a str,
    sink: &'a mut S,
    classifier: LineClassifier,
    state: ScanState,
    stats: FileStats,
}

impl<'a, S: ScanSink + ?Sized> FileScanner<'a, S> {
    pub fn new(profile: LanguageProfile, file_name: &'a str, sink: &'a mut S) -> Self {
        Self {
            profile,
            file_name,
            sink,
            classifier: LineClassifier::new(),
            state: ScanState::default(),
            stats: FileStats::default(),
        }
    }

    pub fn scan_line(&mut self, raw: &str) {
        self.stats.lines += 1;
        let Some(line) = self.classifier.code_line(raw) else {
            return;
        };
        self.stats.code_lines += 1;

        if let Some(name) = self.profile.match_declaration(line) {
            self.stats.declarations += 1;
            self.sink.record_declaration(is_conforming_name(name));
            self.state.open(name);
        }

        if !self.state.method_open {
            return;
        }

        if has_control_keyword(line) {
            self.state.complexity += 1;
        }
        if line.contains('{') {
            self.state.brace_depth += 1;
        }
        if line.contains('}') {
            if self.state.brace_depth == 1 {
                self.finalize();
            }
            self.state.brace_depth -= 1;
        }
    }

    fn finalize(&mut self) {
        if let Some((name, complexity)) = self.state.close() {
            tracing::debug!(
                file = self.file_name,
                method = %name,
                complexity,
                "method finalized"
            );
            self.sink.record_method(&name, self.file_name, complexity);
            self.stats.methods_recorded += 1;
        }
    }

    /// End of input. An open method is dropped.
    pub fn finish(mut self) -> FileStats {
        if self.state.method_open {
            tracing::debug!(
                file = self.file_name,
                method = self.state.current_method.as_deref().unwrap_or_default(),
                "method body never closed; dropped"
            );
            self.stats.unclosed = true;
        }
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FileTally;

    fn scan(profile: LanguageProfile, src: &str) -> (FileTally, FileStats) {
        let mut tally = FileTally::default();
        let mut scanner = FileScanner::new(profile, "Test.java", &mut tally);
        for line in src.lines() {
            scanner.scan_line(line);
        }
        let stats = scanner.finish();
        (tally, stats)
    }

    #[test]
    fn keyword_match_is_substring_based() {
        assert!(has_control_keyword("String.format(x)"));
        assert!(has_control_keyword("} else {"));
        assert!(has_control_keyword("modifier = 1;"));
        assert!(!has_control_keyword("return a + b;"));
    }

    #[test]
    fn one_increment_per_line() {
        let src = "public void f() {\n    if (a) { x(); } else { for (;;) {} }\n}\n";
        let (tally, _) = scan(LanguageProfile::java(), src);
        assert_eq!(tally.methods, vec![("f".to_string(), "Test.java".to_string(), 1)]);
    }

    #[test]
    fn braces_count_once_per_line() {
        // Two `{` on one line add 1, so the method closes one `}` line early
        // and the `while` below is outside it.
        let src = "public void f() {\n    if (a) { if (b) {\n    }\n    }\n    while (c) {\n    }\n}\n";
        let (tally, _) = scan(LanguageProfile::java(), src);
        assert_eq!(tally.methods, vec![("f".to_string(), "Test.java".to_string(), 1)]);
    }

    #[test]
    fn one_line_method_closes_on_same_line() {
        // Depth goes 0 -> 1 on `{`, then the `}` check sees depth 1 and closes.
        let src = "public int one() { return 1; }\n";
        let (tally, stats) = scan(LanguageProfile::java(), src);
        assert_eq!(tally.methods, vec![("one".to_string(), "Test.java".to_string(), 0)]);
        assert!(!stats.unclosed);
    }

    #[test]
    fn declaration_line_is_keyword_checked() {
        let src = "public void forEachItem() {\n}\n";
        let (tally, _) = scan(LanguageProfile::java(), src);
        assert_eq!(tally.methods[0].2, 1);
    }

    #[test]
    fn unclosed_method_is_dropped() {
        let src = "fun open(x: Int) {\n    if (x > 0) {\n    }\n";
        let (tally, stats) = scan(LanguageProfile::kotlin(), src);
        assert!(tally.methods.is_empty());
        assert_eq!(tally.declarations, vec![true]);
        assert!(stats.unclosed);
    }

    #[test]
    fn lines_outside_methods_are_ignored() {
        let src = "class A {\n    if (x) {\n    }\n}\n";
        let (tally, stats) = scan(LanguageProfile::java(), src);
        assert!(tally.methods.is_empty());
        assert!(tally.declarations.is_empty());
        assert_eq!(stats.code_lines, 4);
    }

    #[test]
    fn commented_keywords_do_not_count() {
        let src = "fun f() {\n    // if (x) {\n    /* for\n    while */\n    val y = 1\n}\n";
        let (tally, _) = scan(LanguageProfile::kotlin(), src);
        assert_eq!(tally.methods, vec![("f".to_string(), "Test.java".to_string(), 0)]);
    }

    #[test]
    fn new_declaration_resets_open_method() {
        let src = "fun outer() {\n    if (a) {\n    fun inner() {\n    }\n}\n";
        let (tally, _) = scan(LanguageProfile::kotlin(), src);
        assert_eq!(tally.declarations.len(), 2);
        assert_eq!(tally.methods, vec![("inner".to_string(), "Test.java".to_string(), 0)]);
    }

    #[test]
    fn field_like_declaration_without_braces_stays_open() {
        // `x = compute` is registered as a name; the next method's declaration replaces it.
        let src = "private int x = compute();\npublic void run() {\n    for (;;) {\n    }\n}\n";
        let (tally, _) = scan(LanguageProfile::java(), src);
        assert_eq!(tally.declarations, vec![false, true]);
        assert_eq!(tally.methods, vec![("run".to_string(), "Test.java".to_string(), 1)]);
    }
}
