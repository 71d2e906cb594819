//! Line classification: comment lines are skipped, everything else is code.
//!
//! The classifier only looks at the start and end of a trimmed line. A line
//! that opens a block comment is skipped in full, even when code follows the
//! closing marker on the same line.

const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";
const LINE_COMMENT: &str = "//";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Inside a block comment, or a line comment.
    Skip,
    Code,
}

/// Tracks block-comment state across the lines of one file.
#[derive(Debug, Clone, Default)]
pub struct LineClassifier {
    in_block_comment: bool,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_block_comment(&self) -> bool {
        self.in_block_comment
    }

    /// Classify one raw line, updating the block-comment flag.
    pub fn classify(&mut self, raw: &str) -> LineClass {
        let line = raw.trim();
        if line.starts_with(BLOCK_OPEN) {
            self.in_block_comment = true;
        }
        if self.in_block_comment {
            if line.ends_with(BLOCK_CLOSE) {
                self.in_block_comment = false;
            }
            return LineClass::Skip;
        }
        if line.starts_with(LINE_COMMENT) {
            return LineClass::Skip;
        }
        LineClass::Code
    }

    /// Return the trimmed line when it is code.
    pub fn code_line<'a>(&mut self, raw: &'a str) -> Option<&'a str> {
        match self.classify(raw) {
            LineClass::Code => Some(raw.trim()),
            LineClass::Skip => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_all(lines: &[&str]) -> Vec<LineClass> {
        let mut classifier = LineClassifier::new();
        lines.iter().map(|l| classifier.classify(l)).collect()
    }

    #[test]
    fn plain_code_is_code() {
        assert_eq!(
            classify_all(&["int x = 1;", "", "  return x;"]),
            vec![LineClass::Code, LineClass::Code, LineClass::Code]
        );
    }

    #[test]
    fn line_comment_is_skipped() {
        assert_eq!(
            classify_all(&["   // if (x) {", "x++; // trailing"]),
            vec![LineClass::Skip, LineClass::Code]
        );
    }

    #[test]
    fn block_comment_spans_lines() {
        let classes = classify_all(&["/*", " * if (a) {", " */", "code();"]);
        assert_eq!(
            classes,
            vec![
                LineClass::Skip,
                LineClass::Skip,
                LineClass::Skip,
                LineClass::Code
            ]
        );
    }

    #[test]
    fn single_line_block_comment_clears_flag() {
        let mut classifier = LineClassifier::new();
        assert_eq!(classifier.classify("/* note */"), LineClass::Skip);
        assert!(!classifier.in_block_comment());
        assert_eq!(classifier.classify("code();"), LineClass::Code);
    }

    #[test]
    fn code_after_closing_marker_is_not_inspected() {
        let mut classifier = LineClassifier::new();
        assert_eq!(classifier.classify("/* a */ public void f() {"), LineClass::Skip);
        // The line does not end with the close marker, so the flag stays set.
        assert!(classifier.in_block_comment());
    }

    #[test]
    fn block_comment_opened_mid_line_is_not_tracked() {
        let mut classifier = LineClassifier::new();
        assert_eq!(classifier.classify("int a; /* start"), LineClass::Code);
        assert!(!classifier.in_block_comment());
        assert_eq!(classifier.classify("end */"), LineClass::Code);
    }

    #[test]
    fn code_line_returns_trimmed_text() {
        let mut classifier = LineClassifier::new();
        assert_eq!(classifier.code_line("   if (x) {  "), Some("if (x) {"));
        assert_eq!(classifier.code_line("// nope"), None);
    }
}
