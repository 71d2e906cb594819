//! Interactive CLI utilities.

pub mod tty;

pub use tty::should_be_interactive;

use std::path::PathBuf;

use anyhow::Result;

/// Ask for the directory to scan.
#[cfg(feature = "ui")]
pub fn prompt_directory() -> Result<PathBuf> {
    use anyhow::Context;
    use console::style;
    use dialoguer::{Input, theme::ColorfulTheme};

    eprintln!(
        "{}",
        style("Specify the directory you want to analyze.").bold()
    );
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Directory")
        .interact_text()
        .context("Failed to read directory")?;
    Ok(PathBuf::from(input.trim()))
}

#[cfg(not(feature = "ui"))]
pub fn prompt_directory() -> Result<PathBuf> {
    anyhow::bail!("No directory given and interactive prompts are disabled in this build")
}
