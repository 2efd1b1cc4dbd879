//! Git operations and repository context

mod error;
mod parse;

pub use error::GitError;
pub use parse::{current_branch, has_remote_ref, parse_remote_listing};

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;
use once_cell::sync::OnceCell;

/// Cached values for git queries that cannot change during one invocation.
#[derive(Debug, Default)]
struct RepoCache {
    root: OnceCell<PathBuf>,
    branch_listing: OnceCell<String>,
    head_revision: OnceCell<String>,
}

/// Repository context for git operations.
///
/// Encapsulates the working directory that git commands run in. Link
/// resolution for a file runs git from the file's own directory, so the
/// right repository is found even when the shell's cwd is elsewhere.
///
/// # Examples
///
/// ```no_run
/// use gitlink::git::Repository;
///
/// let repo = Repository::at("/path/to/checkout/src");
/// let root = repo.root()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug)]
pub struct Repository {
    path: PathBuf,
    cache: RepoCache,
}

impl Repository {
    /// Create a repository context at the specified path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RepoCache::default(),
        }
    }

    /// Absolute path of the repository root (`git rev-parse --show-toplevel`).
    ///
    /// Result is cached for the lifetime of this Repository instance.
    pub fn root(&self) -> anyhow::Result<&Path> {
        self.cache
            .root
            .get_or_try_init(|| {
                let stdout = self.run_command(&["rev-parse", "--show-toplevel"])?;
                Ok(PathBuf::from(stdout.trim()))
            })
            .map(PathBuf::as_path)
    }

    /// Raw output of `git branch --no-color -a`.
    ///
    /// One line per branch, the current branch marked with `*`, remote
    /// branches prefixed `remotes/<remote>/`. Cached per instance since
    /// branch and remote resolution both read it.
    pub fn branch_listing(&self) -> anyhow::Result<&str> {
        self.cache
            .branch_listing
            .get_or_try_init(|| self.run_command(&["branch", "--no-color", "-a"]))
            .map(String::as_str)
    }

    /// Raw output of `git remote -v`: lines of `name\turl (fetch|push)`.
    pub fn remote_listing(&self) -> anyhow::Result<String> {
        self.run_command(&["remote", "-v"])
    }

    /// The configured URL of a single named remote.
    pub fn remote_url(&self, remote: &str) -> anyhow::Result<String> {
        self.run_command(&["config", "--get", &format!("remote.{remote}.url")])
    }

    /// Full commit identifier of the current checkout head.
    /// Result is cached for the lifetime of this Repository instance.
    pub fn head_revision(&self) -> anyhow::Result<&str> {
        self.cache
            .head_revision
            .get_or_try_init(|| {
                let stdout = self.run_command(&["rev-parse", "HEAD"])?;
                Ok(stdout.trim().to_string())
            })
            .map(String::as_str)
    }

    /// Run a git command in this repository's context.
    ///
    /// Executes git with this repository's path as the working directory and
    /// returns the stdout output. Non-zero exits become
    /// [`GitError::CommandFailed`] carrying the trimmed error stream.
    pub fn run_command(&self, args: &[&str]) -> anyhow::Result<String> {
        let mut cmd = Command::new("git");
        cmd.args(args);
        cmd.current_dir(&self.path);

        log::debug!("$ git {}", args.join(" "));
        let output = cmd
            .output()
            .with_context(|| format!("Failed to execute: git {}", args.join(" ")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            for line in stderr.trim().lines() {
                log::debug!("  ! {line}");
            }
            // Some git commands print errors to stdout
            let stdout = String::from_utf8_lossy(&output.stdout);
            let message = [stderr.trim(), stdout.trim()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
            return Err(GitError::CommandFailed {
                command: args.join(" "),
                message,
            }
            .into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        for line in stdout.trim().lines() {
            log::debug!("  {line}");
        }
        Ok(stdout)
    }
}
