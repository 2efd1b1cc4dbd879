use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Color, Styles};
use clap::{Parser, Subcommand};
use gitlink::link::SelectedLines;

/// Custom styles for help output - matches gitlink's color scheme
fn help_styles() -> Styles {
    Styles::styled()
        .header(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .usage(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .literal(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .placeholder(anstyle::Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
}

#[derive(Parser)]
#[command(name = "gitlink")]
#[command(about = "Open a file from a git checkout in the host's web UI")]
#[command(version)]
#[command(styles = help_styles())]
pub struct Cli {
    /// Run as if started in this directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Print the resolved URL(s) instead of opening a browser
    #[arg(long, global = true)]
    pub print: bool,

    /// Log git invocations and their output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the file view for a tracked file
    File {
        /// File to link, absolute or relative to the current directory
        path: PathBuf,

        /// Line or line range to point at, 1-based
        #[arg(short = 'L', long = "lines", value_name = "START[:END]", value_parser = parse_lines)]
        lines: Option<SelectedLines>,
    },

    /// Open the blame view for a tracked file
    Blame {
        /// File to link, absolute or relative to the current directory
        path: PathBuf,

        /// Line or line range to point at, 1-based
        #[arg(short = 'L', long = "lines", value_name = "START[:END]", value_parser = parse_lines)]
        lines: Option<SelectedLines>,
    },

    /// Open the commit history of a tracked file
    History {
        /// File to link, absolute or relative to the current directory
        path: PathBuf,
    },

    /// Open a comparison between two branches
    Compare {
        /// Branch with the changes (prompted when omitted)
        #[arg(long)]
        source: Option<String>,

        /// Branch to compare against (prompted when omitted)
        #[arg(long)]
        target: Option<String>,
    },

    /// Open the repository home page
    Project,
}

/// Parse `START` or `START:END` into a selection.
fn parse_lines(value: &str) -> Result<SelectedLines, String> {
    let (start, end) = match value.split_once(':') {
        Some((start, end)) => (start, Some(end)),
        None => (value, None),
    };

    let start: u32 = start
        .parse()
        .map_err(|_| format!("invalid line number: {start}"))?;
    let end: u32 = match end {
        Some(end) => end
            .parse()
            .map_err(|_| format!("invalid line number: {end}"))?,
        None => start,
    };

    Ok(SelectedLines { start, end })
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_asserts() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lines_single() {
        assert_eq!(parse_lines("5").unwrap(), SelectedLines { start: 5, end: 5 });
    }

    #[test]
    fn test_parse_lines_range() {
        assert_eq!(parse_lines("5:9").unwrap(), SelectedLines { start: 5, end: 9 });
    }

    #[test]
    fn test_parse_lines_rejects_garbage() {
        assert!(parse_lines("five").is_err());
        assert!(parse_lines("5:").is_err());
        assert!(parse_lines("").is_err());
    }
}
