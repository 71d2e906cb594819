use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("invalid directory path") {
        push_hint(
            &mut out,
            "Pass a directory that exists, e.g. `jvmetrics src/main/java/com/acme`.",
        );
        push_hint(
            &mut out,
            "Only files directly inside the directory are scanned; subdirectories are skipped.",
        );
    }

    if haystack.contains("no directory given") {
        push_hint(&mut out, "Pass the directory as the first argument.");
        push_hint(
            &mut out,
            "Unset `CI` and `JVMETRICS_NON_INTERACTIVE` to be prompted on a terminal.",
        );
    }

    if haystack.contains("failed to read config") {
        push_hint(&mut out, "Check the `--config` path, or drop the flag.");
    }

    if haystack.contains("config")
        && (haystack.contains("parse") || haystack.contains("invalid config value"))
    {
        push_hint(
            &mut out,
            "Check `jvmetrics.toml` syntax: `[scan]` takes `declarations` and `key_mode`, `[report]` takes `top` and `format`.",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::{format, suggestions};

    #[test]
    fn suggests_for_invalid_directory() {
        let err = anyhow!("Invalid directory path: nowhere");
        let hints = suggestions(&err);
        assert!(hints.iter().any(|h| h.contains("directory that exists")));
    }

    #[test]
    fn suggests_for_missing_argument() {
        let err = anyhow!("No directory given");
        let hints = suggestions(&err);
        assert!(hints.iter().any(|h| h.contains("first argument")));
    }

    #[test]
    fn suggests_for_bad_config() {
        let err = anyhow!("Failed to parse config jvmetrics.toml: expected `]`");
        let hints = suggestions(&err);
        assert!(hints.iter().any(|h| h.contains("jvmetrics.toml")));
    }

    #[test]
    fn unrelated_errors_get_no_hints() {
        let err = anyhow!("broken pipe");
        assert!(suggestions(&err).is_empty());
        assert_eq!(format(&err), "Error: broken pipe");
    }

    #[test]
    fn format_includes_hints_section() {
        let err = anyhow!("Invalid directory path: x");
        let rendered = format(&err);
        assert!(rendered.starts_with("Error:"));
        assert!(rendered.contains("Hints:"));
    }
}
