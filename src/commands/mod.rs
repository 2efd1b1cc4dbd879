//! Command handlers: sequence git lookups, candidate resolution, link
//! composition, and the interactive picker.
//!
//! Each handler runs one strictly sequential pipeline: branch resolution
//! decides the remote-resolution policy, and both precede composition. Any
//! collaborator failure aborts the pipeline before a menu is shown.

mod picker;

use std::fs;
use std::path::Path;

use anyhow::Context;
use color_print::cformat;
use gitlink::config::UserConfig;
use gitlink::git::{Repository, parse_remote_listing};
use gitlink::link::{
    self, LinkTarget, SelectedLines, ViewKind, compose_compare_url, only_default_branch,
    quick_pick_entries,
};
use gitlink::styling::{info_message, success_message};

use picker::{open_browser, pick_entry, prompt_with_default};

/// Resolve and open a file-scoped view (file, blame, or history).
pub fn handle_view(
    kind: ViewKind,
    file: &Path,
    lines: Option<SelectedLines>,
    config: &UserConfig,
    print: bool,
) -> anyhow::Result<()> {
    let file = fs::canonicalize(file)
        .with_context(|| format!("No such file: {}", file.display()))?;
    // Canonicalized files always have a parent
    let project_dir = file.parent().unwrap_or(Path::new("."));
    let repo = Repository::at(project_dir);

    let root = repo.root()?.to_path_buf();
    let relative_path = path_within_repo(&file, &root)?;

    let (branches, remotes) = resolve_candidates(&repo, config)?;
    let entries = quick_pick_entries(kind, &relative_path, lines, &remotes, &branches);

    if entries.is_empty() {
        println!(
            "{}",
            info_message("Nothing to link: no candidate branch or usable remote")
        );
        return Ok(());
    }

    if print {
        for entry in &entries {
            if let LinkTarget::Resolved(url) = &entry.target {
                println!("{url}");
            }
        }
        return Ok(());
    }

    let Some(entry) = pick_entry(&entries)? else {
        return Ok(());
    };
    let url = match &entry.target {
        LinkTarget::Resolved(url) => url.clone(),
        LinkTarget::AnyBranch { .. } => {
            let Some(branch) = prompt_with_default("Branch name", None)? else {
                return Ok(());
            };
            entry.target.url_for_branch(&branch)
        }
    };

    navigate(&url)
}

/// Resolve remotes and open a comparison between two branches.
///
/// Branches not supplied as flags are prompted for, defaulting to the first
/// resolved candidate (source) and the configured default branch (target).
pub fn handle_compare(
    directory: &Path,
    source: Option<String>,
    target: Option<String>,
    config: &UserConfig,
    print: bool,
) -> anyhow::Result<()> {
    let repo = Repository::at(directory);
    let (branches, remotes) = resolve_candidates(&repo, config)?;

    let Some(remote) = remotes.first() else {
        println!("{}", info_message("Nothing to link: no usable remote"));
        return Ok(());
    };

    let source = match source {
        Some(source) => source,
        None => {
            let Some(source) = prompt_with_default("Source branch", branches.first().map(String::as_str))?
            else {
                return Ok(());
            };
            source
        }
    };
    let target = match target {
        Some(target) => target,
        None => {
            let Some(target) = prompt_with_default("Target branch", Some(&config.default_branch))?
            else {
                return Ok(());
            };
            target
        }
    };

    let url = compose_compare_url(remote, &target, &source);
    if print {
        println!("{url}");
        return Ok(());
    }
    navigate(&url)
}

/// Open the repository home page: all remotes resolved from the repository
/// root, first normalized remote wins, no disambiguation.
pub fn handle_project(directory: &Path, print: bool) -> anyhow::Result<()> {
    let repo = Repository::at(directory);
    let root = repo.root()?.to_path_buf();
    let repo = Repository::at(root);

    let remotes = link::normalize_remotes(parse_remote_listing(&repo.remote_listing()?));
    let Some(remote) = remotes.first() else {
        println!("{}", info_message("Nothing to link: no usable remote"));
        return Ok(());
    };

    if print {
        println!("{remote}");
        return Ok(());
    }
    navigate(remote)
}

/// Run the branch and remote resolution steps against one repository.
///
/// Branch resolution must complete first: when only the default branch is a
/// candidate, remote resolution narrows to the single configured default
/// remote instead of enumerating all of them.
fn resolve_candidates(
    repo: &Repository,
    config: &UserConfig,
) -> anyhow::Result<(Vec<String>, Vec<String>)> {
    let listing = repo.branch_listing()?;
    let mut branches = link::resolve_branches(listing, &config.default_branch)?;
    if !config.exclude_current_revision {
        branches.push(repo.head_revision()?.to_string());
    }

    let raw_remotes = if only_default_branch(&branches, &config.default_branch) {
        vec![repo.remote_url(&config.default_remote)?]
    } else {
        parse_remote_listing(&repo.remote_listing()?)
    };

    Ok((branches, link::normalize_remotes(raw_remotes)))
}

/// Repository-relative path of `file`, with forward slashes for URLs.
fn path_within_repo(file: &Path, root: &Path) -> anyhow::Result<String> {
    let relative = file.strip_prefix(root).with_context(|| {
        format!(
            "{} is not inside the repository at {}",
            file.display(),
            root.display()
        )
    })?;

    let segments: Vec<_> = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(segments.join("/"))
}

fn navigate(url: &str) -> anyhow::Result<()> {
    println!("{}", success_message(cformat!("Opening <bold>{url}</>")));
    open_browser(url)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_path_within_repo_joins_with_forward_slashes() {
        let root = PathBuf::from("/repo");
        let file = PathBuf::from("/repo/src/nested/x.rs");
        assert_eq!(path_within_repo(&file, &root).unwrap(), "src/nested/x.rs");
    }

    #[test]
    fn test_path_outside_repo_is_an_error() {
        let root = PathBuf::from("/repo");
        let file = PathBuf::from("/elsewhere/x.rs");
        assert!(path_within_repo(&file, &root).is_err());
    }
}
