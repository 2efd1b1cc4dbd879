//! Typed errors for git operations
//!
//! `GitError` is a typed enum for domain errors that can be pattern-matched
//! and tested. Use `.into()` to convert to `anyhow::Error` while preserving
//! the type for downcasting. Display produces styled output for users.

use color_print::cformat;

use crate::styling::{error_message, hint_message};

/// Domain errors for git and link resolution.
///
/// Each variant stores the data needed to construct a user-facing message.
/// Display produces styled output with symbols and colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitError {
    /// A git subprocess exited non-zero, or wrote to its error stream.
    CommandFailed {
        /// The git arguments, space-joined (without the leading "git").
        command: String,
        /// Trimmed stderr/stdout from the failed command.
        message: String,
    },

    /// `git branch` output contained no line marked with `*`.
    ///
    /// Without a checked-out branch there is no anchor for link resolution.
    NoCurrentBranch,
}

impl std::error::Error for GitError {}

impl std::fmt::Display for GitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GitError::CommandFailed { command, message } => {
                let headline = error_message(cformat!("<bold>git {command}</> failed"));
                if message.is_empty() {
                    write!(f, "{headline}")
                } else {
                    write!(f, "{}\n{}", headline, hint_message(message))
                }
            }

            GitError::NoCurrentBranch => {
                write!(
                    f,
                    "{}\n{}",
                    error_message("No current branch in the branch listing"),
                    hint_message(cformat!(
                        "Expected a line marked with <bold>*</>; is HEAD on a branch?"
                    ))
                )
            }
        }
    }
}
