//! Resolve web-browsable URLs for files tracked in a git checkout.
//!
//! Given the local checkout state (remotes, branches, the current revision)
//! and a requested view kind, gitlink derives the canonical URL for a file
//! view, blame view, commit history, branch compare, or the repository home
//! page, including single-line and line-range pointers.
//!
//! The pipeline is one-directional and stateless per invocation: raw git
//! listing text → candidate branch/remote sets ([`link::resolve_branches`],
//! [`link::normalize_remotes`]) → composed link entries
//! ([`link::quick_pick_entries`]). The `gitlink` binary is the interactive
//! host around it.

pub mod config;
pub mod git;
pub mod link;
pub mod styling;
