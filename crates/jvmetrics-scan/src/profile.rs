//! Per-language declaration recognition and name extraction.
//!
//! ## Prefix style
//!
//! - Java: a line starting with `private `, `protected ` or `public `. The
//!   name starts after the first known return-type token found anywhere in
//!   the line (otherwise after the first space) and ends at the first `(`.
//! - Kotlin: a line starting with the `fun` token. The name is the text
//!   between the first space and the first `(`.
//!
//! ## Strict style
//!
//! The whole line must look like `<modifier> <type> <name>(...) {` (Java) or
//! `fun <name>(...) {` (Kotlin).
//!
//! ## Limitations
//!
//! - Declarations split across lines are not detected
//! - Generic return types confuse prefix-style extraction (the leftover
//!   text becomes part of the name)
//! - Annotations and modifiers other than visibility are not understood

use jvmetrics_types::{DeclarationStyle, Language};
use regex::Regex;
use std::sync::LazyLock;

/// Return-type tokens located by substring, in priority order.
const JAVA_RETURN_TYPES: [&str; 19] = [
    "void", "int", "long", "short", "double", "float", "boolean", "byte", "char", "String",
    "int[]", "long[]", "short[]", "double[]", "float[]", "boolean[]", "byte[]", "char[]",
    "String[]",
];

static JAVA_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:private|protected|public) ").expect("valid regex literal")
});

static KOTLIN_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^fun\b").expect("valid regex literal"));

static JAVA_STRICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(private|protected|public)\s+([[:word:]]+)\s+([[:word:]]+)\s*\(.*\)\s*\{$")
        .expect("valid regex literal")
});

static KOTLIN_STRICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^fun\s+([[:word:]]+)\s*\(.*\)\s*\{$").expect("valid regex literal")
});

/// Immutable declaration rules for one language under one style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageProfile {
    language: Language,
    style: DeclarationStyle,
}

impl LanguageProfile {
    pub fn new(language: Language, style: DeclarationStyle) -> Self {
        Self { language, style }
    }

    pub fn java() -> Self {
        Self::new(Language::Java, DeclarationStyle::Prefix)
    }

    pub fn kotlin() -> Self {
        Self::new(Language::Kotlin, DeclarationStyle::Prefix)
    }

    /// Return the declared method name when `line` opens a declaration.
    ///
    /// A line that starts like a declaration but yields an empty span (for
    /// example `public class Foo {`) is not a declaration.
    pub fn match_declaration<'a>(&self, line: &'a str) -> Option<&'a str> {
        match (self.language, self.style) {
            (Language::Java, DeclarationStyle::Prefix) => {
                JAVA_PREFIX.is_match(line).then(|| java_prefix_name(line))?
            }
            (Language::Kotlin, DeclarationStyle::Prefix) => {
                KOTLIN_PREFIX.is_match(line).then(|| kotlin_prefix_name(line))?
            }
            (Language::Java, DeclarationStyle::Strict) => strict_name(&JAVA_STRICT, line, 3),
            (Language::Kotlin, DeclarationStyle::Strict) => strict_name(&KOTLIN_STRICT, line, 1),
        }
    }
}

/// Offset just past the first space, or 0 when the line has none.
fn after_first_space(line: &str) -> usize {
    line.find(' ').map_or(0, |i| i + 1)
}

/// Slice `line[start..end]` where `end` is the first `(`, rejecting empty spans.
fn span_to_paren(line: &str, start: usize) -> Option<&str> {
    let end = line.find('(')?;
    if end <= start {
        return None;
    }
    line.get(start..end)
}

fn java_prefix_name(line: &str) -> Option<&str> {
    let mut start = after_first_space(line);
    for ty in JAVA_RETURN_TYPES {
        if let Some(pos) = line.find(ty) {
            start = pos + ty.len() + 1;
            break;
        }
    }
    span_to_paren(line, start)
}

fn kotlin_prefix_name(line: &str) -> Option<&str> {
    span_to_paren(line, after_first_space(line))
}

fn strict_name<'a>(pattern: &Regex, line: &'a str, group: usize) -> Option<&'a str> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(group))
        .map(|m| m.as_str())
        .filter(|name| !name.is_empty())
}
