//! Terminal prompts: the numbered disambiguation menu, free-text branch
//! input, and handing a URL to the system browser.
//!
//! Cancelling (empty input or EOF) is an intentional no-op, not an error.

use std::io::{self, Write};

use anyhow::Context;
use color_print::cformat;
use gitlink::link::LinkEntry;
use gitlink::styling::{PROMPT_SYMBOL, hint_message};

/// Show a numbered menu of link entries and read the user's choice.
///
/// Returns `None` when the user cancels. Out-of-range input re-prompts.
pub fn pick_entry(entries: &[LinkEntry]) -> anyhow::Result<Option<&LinkEntry>> {
    for (index, entry) in entries.iter().enumerate() {
        let number = index + 1;
        match (&entry.detail, &entry.description) {
            (Some(detail), Some(description)) => println!(
                "{}",
                cformat!(
                    "<bold>{number:>3}</> {} <dim>{description}</> <bright-black>{detail}</>",
                    entry.label
                )
            ),
            _ => println!("{}", cformat!("<bold>{number:>3}</> {}", entry.label)),
        }
    }

    loop {
        eprint!("{PROMPT_SYMBOL} Open [1-{}] (empty cancels): ", entries.len());
        io::stderr().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        match line.parse::<usize>() {
            Ok(choice) if (1..=entries.len()).contains(&choice) => {
                return Ok(Some(&entries[choice - 1]));
            }
            _ => eprintln!(
                "{}",
                hint_message(format!("Enter a number between 1 and {}", entries.len()))
            ),
        }
    }
}

/// Prompt for free-text input with an optional default.
///
/// Empty input accepts the default when one exists, and cancels otherwise.
pub fn prompt_with_default(prompt: &str, default: Option<&str>) -> anyhow::Result<Option<String>> {
    match default {
        Some(default) => eprint!("{PROMPT_SYMBOL} {prompt} [{default}]: "),
        None => eprint!("{PROMPT_SYMBOL} {prompt}: "),
    }
    io::stderr().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim();
    if line.is_empty() {
        return Ok(default.map(str::to_string));
    }
    Ok(Some(line.to_string()))
}

/// Open a URL in the default browser.
pub fn open_browser(url: &str) -> anyhow::Result<()> {
    #[cfg(target_os = "macos")]
    let status = std::process::Command::new("open").arg(url).status();

    #[cfg(target_os = "windows")]
    let status = std::process::Command::new("cmd")
        .args(["/C", "start", url])
        .status();

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let status = std::process::Command::new("xdg-open").arg(url).status();

    let status = status.context("Failed to launch the browser")?;
    if !status.success() {
        anyhow::bail!("Browser launcher exited with {status}");
    }
    Ok(())
}
