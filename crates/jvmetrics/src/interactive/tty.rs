//! TTY detection.

use std::io::IsTerminal;

/// Environment variable that disables prompting.
pub const NON_INTERACTIVE_ENV: &str = "JVMETRICS_NON_INTERACTIVE";

/// Whether a missing directory argument may be prompted for.
///
/// Requires stdin and stdout to be terminals, and neither `CI` nor
/// `JVMETRICS_NON_INTERACTIVE` to be set.
pub fn should_be_interactive() -> bool {
    std::io::stdin().is_terminal()
        && std::io::stdout().is_terminal()
        && env_allows_prompt(|key| std::env::var_os(key).is_some())
}

fn env_allows_prompt(is_set: impl Fn(&str) -> bool) -> bool {
    !is_set("CI") && !is_set(NON_INTERACTIVE_ENV)
}
