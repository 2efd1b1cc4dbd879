//! Candidate branch resolution and the remote-narrowing policy.
//!
//! Both operate on the raw text of git's listings (see the parsing helpers
//! in [`crate::git`] for the line grammar) so they stay pure and testable
//! without a checkout.

use indexmap::IndexSet;

use crate::git::{GitError, current_branch, has_remote_ref};

/// Resolve the candidate branches for link generation.
///
/// Candidates are the current branch and the configured default, in that
/// order, deduplicated, and kept only when tracked as a remote ref of at
/// least one remote. The ordering drives the disambiguation menu.
///
/// An empty result is a valid terminal outcome: nothing can be linked.
/// When the caller wants the current commit offered as an extra ref-like
/// candidate, it appends the revision itself (the lookup needs git).
pub fn resolve_branches(listing: &str, default_branch: &str) -> Result<Vec<String>, GitError> {
    let current = current_branch(listing)?;

    let mut candidates = IndexSet::new();
    candidates.insert(current);
    candidates.insert(default_branch.to_string());

    Ok(candidates
        .into_iter()
        .filter(|branch| has_remote_ref(listing, branch))
        .collect())
}

/// Whether remote resolution can narrow to the single configured default
/// remote: exactly one branch resolved, and it is the default branch.
///
/// With no branch ambiguity there is no need to enumerate all remotes.
pub fn only_default_branch(branches: &[String], default_branch: &str) -> bool {
    matches!(branches, [only] if only == default_branch)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "\
  develop
* feature-x
  remotes/origin/develop
  remotes/origin/feature-x
";

    #[test]
    fn test_current_then_default_ordering() {
        let branches = resolve_branches(LISTING, "develop").unwrap();
        assert_eq!(branches, vec!["feature-x", "develop"]);
    }

    #[test]
    fn test_unpushed_current_branch_is_dropped() {
        let listing = "\
* local-only
  develop
  remotes/origin/develop
";
        let branches = resolve_branches(listing, "develop").unwrap();
        assert_eq!(branches, vec!["develop"]);
    }

    #[test]
    fn test_current_equals_default_collapses() {
        let listing = "\
* develop
  remotes/origin/develop
";
        let branches = resolve_branches(listing, "develop").unwrap();
        assert_eq!(branches, vec!["develop"]);
        assert!(only_default_branch(&branches, "develop"));
    }

    #[test]
    fn test_nothing_pushed_yields_empty_set() {
        let listing = "* develop\n";
        let branches = resolve_branches(listing, "develop").unwrap();
        assert!(branches.is_empty());
    }

    #[test]
    fn test_missing_marker_fails() {
        assert_eq!(
            resolve_branches("  develop\n", "develop").unwrap_err(),
            GitError::NoCurrentBranch
        );
    }

    #[test]
    fn test_detached_head_is_not_a_candidate() {
        let listing = "\
* (HEAD detached at 1a2b3c4)
  develop
  remotes/origin/develop
";
        let branches = resolve_branches(listing, "develop").unwrap();
        assert_eq!(branches, vec!["develop"]);
    }

    #[test]
    fn test_only_default_branch_policy() {
        let one_default = vec!["develop".to_string()];
        let one_other = vec!["feature-x".to_string()];
        let two = vec!["feature-x".to_string(), "develop".to_string()];

        assert!(only_default_branch(&one_default, "develop"));
        assert!(!only_default_branch(&one_other, "develop"));
        assert!(!only_default_branch(&two, "develop"));
        assert!(!only_default_branch(&[], "develop"));
    }
}
