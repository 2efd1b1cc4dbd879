//! Link composition: view kinds, line pointers, URL templates, and the
//! disambiguation entries offered when several branches or remotes qualify.

mod resolve;
mod url;

pub use resolve::{only_default_branch, resolve_branches};
pub use url::{normalize_remote, normalize_remotes};

/// Which web page to open for a resolved file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ViewKind {
    /// Source view of the file at a branch
    File,
    /// Line-by-line blame view
    Blame,
    /// Commit history of the file (file-scoped, never line-scoped)
    History,
    /// Branch comparison page
    Compare,
    /// Repository home page
    Project,
}

/// A 1-based line selection; `end == start` marks a single line.
///
/// Bounds are taken as already ordered; callers supply `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedLines {
    pub start: u32,
    pub end: u32,
}

/// Format the `#L…` fragment for a selection.
///
/// A single line yields `#L{start}`; a range adds `:L{end}`. No selection
/// yields an empty string.
pub fn line_pointer(lines: Option<SelectedLines>) -> String {
    match lines {
        None => String::new(),
        Some(SelectedLines { start, end }) if end != start => format!("#L{start}:L{end}"),
        Some(SelectedLines { start, .. }) => format!("#L{start}"),
    }
}

/// Compose the URL for one view kind under a canonical remote.
///
/// `branch` is any ref-like path segment: a branch name or a raw commit
/// revision. History links are file-scoped, so the line pointer is ignored
/// there. The project page is the remote base itself.
pub fn compose_url(
    kind: ViewKind,
    remote: &str,
    branch: &str,
    file_path: &str,
    lines: Option<SelectedLines>,
) -> String {
    match kind {
        ViewKind::File => format!("{remote}/blob/{branch}/{file_path}{}", line_pointer(lines)),
        ViewKind::Blame => format!("{remote}/blame/{branch}/{file_path}{}", line_pointer(lines)),
        ViewKind::History => format!("{remote}/commits/{branch}/{file_path}"),
        // Compare takes two branches (see compose_compare_url); project is
        // the bare remote. Neither is branch-and-file shaped.
        ViewKind::Compare | ViewKind::Project => remote.to_string(),
    }
}

/// Compose the branch comparison URL: `{remote}/compare/{target}...{source}`.
pub fn compose_compare_url(remote: &str, target_branch: &str, source_branch: &str) -> String {
    format!("{remote}/compare/{target_branch}...{source_branch}")
}

/// Where a disambiguation entry leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// A fully composed URL.
    Resolved(String),
    /// A URL still awaiting a branch name supplied by the user, the
    /// "any other branch" escape hatch at the end of the menu.
    AnyBranch {
        kind: ViewKind,
        remote: String,
        file_path: String,
        lines: Option<SelectedLines>,
    },
}

impl LinkTarget {
    /// The composed URL, if no further input is needed.
    pub fn url(&self) -> Option<&str> {
        match self {
            LinkTarget::Resolved(url) => Some(url),
            LinkTarget::AnyBranch { .. } => None,
        }
    }

    /// Compose the URL for a branch supplied after selection.
    /// For already-resolved targets the branch is irrelevant.
    pub fn url_for_branch(&self, branch: &str) -> String {
        match self {
            LinkTarget::Resolved(url) => url.clone(),
            LinkTarget::AnyBranch {
                kind,
                remote,
                file_path,
                lines,
            } => compose_url(*kind, remote, branch, file_path, *lines),
        }
    }
}

/// One choice in the disambiguation menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    /// Primary text: the relative file path, or the escape-hatch prompt.
    pub label: String,
    /// Secondary text: `{branch} | {remote}`.
    pub detail: Option<String>,
    /// Annotation: `[{view}]`.
    pub description: Option<String>,
    pub target: LinkTarget,
}

/// Build the disambiguation list for resolved branches × remotes.
///
/// Entries are grouped branch-major: all remotes for the first branch, then
/// all remotes for the next. With a single branch this degenerates to one
/// entry per remote. One open-ended [`LinkTarget::AnyBranch`] entry per
/// remote is appended at the end. No branches means nothing to link: the
/// list is empty.
pub fn quick_pick_entries(
    kind: ViewKind,
    file_path: &str,
    lines: Option<SelectedLines>,
    remotes: &[String],
    branches: &[String],
) -> Vec<LinkEntry> {
    if branches.is_empty() {
        return Vec::new();
    }

    let mut entries = Vec::with_capacity((branches.len() + 1) * remotes.len());

    for branch in branches {
        for remote in remotes {
            entries.push(LinkEntry {
                label: file_path.to_string(),
                detail: Some(format!("{branch} | {remote}")),
                description: Some(format!("[{kind}]")),
                target: LinkTarget::Resolved(compose_url(kind, remote, branch, file_path, lines)),
            });
        }
    }

    for remote in remotes {
        entries.push(LinkEntry {
            label: format!("Select branch from {remote}"),
            detail: None,
            description: None,
            target: LinkTarget::AnyBranch {
                kind,
                remote: remote.clone(),
                file_path: file_path.to_string(),
                lines,
            },
        });
    }

    entries
}
