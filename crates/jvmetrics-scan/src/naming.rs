//! Method naming convention check.

use regex::Regex;
use std::sync::LazyLock;

/// One or more lowercase letters, then any mix of ASCII letters and digits.
static LOWER_CAMEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+[A-Za-z0-9]*$").expect("valid regex literal"));

/// Whether `name` follows the lowerCamelCase convention.
///
/// Underscores, leading uppercase letters, and anything left over from a
/// loose name extraction (spaces, generics) fail the check.
///
/// ```
/// use jvmetrics_scan::naming::is_conforming_name;
///
/// assert!(is_conforming_name("computeTotal2"));
/// assert!(!is_conforming_name("loop_method"));
/// ```
pub fn is_conforming_name(name: &str) -> bool {
    LOWER_CAMEL.is_match(name)
}
