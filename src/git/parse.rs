//! Git output parsing functions
//!
//! The only wire format this crate owns is the line grammar of git's own
//! listings: `git branch --no-color -a` and `git remote -v`.

use indexmap::IndexSet;
use regex::Regex;

use super::GitError;

/// Extract the checked-out branch from `git branch --no-color -a` output.
///
/// The current branch is the single line carrying a leading `*` marker.
/// In detached HEAD state git prints `* (HEAD detached at <sha>)`; that
/// pseudo-name is returned as-is and later dropped by the remote-ref filter.
pub fn current_branch(listing: &str) -> Result<String, GitError> {
    listing
        .lines()
        .find_map(|line| line.strip_prefix('*'))
        .map(|rest| rest.trim().to_string())
        .ok_or(GitError::NoCurrentBranch)
}

/// Whether `branch` appears as a tracked remote ref (`remotes/<any>/<branch>`)
/// anywhere in the branch listing.
///
/// A branch not pushed to any remote cannot be linked on the web host.
pub fn has_remote_ref(listing: &str, branch: &str) -> bool {
    let pattern = format!(r"remotes/.*/{}", regex::escape(branch));
    Regex::new(&pattern)
        .map(|re| re.is_match(listing))
        .unwrap_or(false)
}

/// Parse `git remote -v` output into raw URL tokens.
///
/// Lines have the form `name\turl (fetch|push)`. The same logical remote
/// appears twice (fetch and push); duplicates collapse while preserving
/// first-seen order.
pub fn parse_remote_listing(listing: &str) -> Vec<String> {
    let mut urls: IndexSet<&str> = IndexSet::new();

    for line in listing.lines() {
        let Some(field) = line.split('\t').next_back() else {
            continue;
        };
        let Some(url) = field.split(' ').next() else {
            continue;
        };
        if url.is_empty() {
            continue;
        }
        urls.insert(url);
    }

    urls.into_iter().map(str::to_string).collect()
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
    fn test_current_branch_from_marker() {
        assert_eq!(current_branch(LISTING).unwrap(), "feature-x");
    }

    #[test]
    fn test_current_branch_missing_marker() {
        let listing = "  develop\n  remotes/origin/develop\n";
        assert_eq!(
            current_branch(listing).unwrap_err(),
            GitError::NoCurrentBranch
        );
    }

    #[test]
    fn test_current_branch_detached_head() {
        let listing = "* (HEAD detached at 1a2b3c4)\n  develop\n";
        assert_eq!(
            current_branch(listing).unwrap(),
            "(HEAD detached at 1a2b3c4)"
        );
    }

    #[test]
    fn test_has_remote_ref() {
        assert!(has_remote_ref(LISTING, "feature-x"));
        assert!(has_remote_ref(LISTING, "develop"));
        assert!(!has_remote_ref(LISTING, "unpushed"));
    }

    #[test]
    fn test_has_remote_ref_any_remote_matches() {
        let listing = "* main\n  remotes/upstream/main\n";
        assert!(has_remote_ref(listing, "main"));
    }

    #[test]
    fn test_has_remote_ref_escapes_regex_metacharacters() {
        let listing = "* fix+wip\n  remotes/origin/fix+wip\n";
        assert!(has_remote_ref(listing, "fix+wip"));
        assert!(!has_remote_ref(listing, "fixxwip"));
    }

    #[test]
    fn test_parse_remote_listing_dedups_fetch_and_push() {
        let listing = "\
origin\thttps://github.com/a/b.git (fetch)
origin\thttps://github.com/a/b.git (push)
";
        assert_eq!(
            parse_remote_listing(listing),
            vec!["https://github.com/a/b.git"]
        );
    }

    #[test]
    fn test_parse_remote_listing_preserves_order() {
        let listing = "\
upstream\tgit@github.com:org/repo.git (fetch)
upstream\tgit@github.com:org/repo.git (push)
origin\tgit@github.com:fork/repo.git (fetch)
origin\tgit@github.com:fork/repo.git (push)
";
        assert_eq!(
            parse_remote_listing(listing),
            vec!["git@github.com:org/repo.git", "git@github.com:fork/repo.git"]
        );
    }

    #[test]
    fn test_parse_remote_listing_skips_blank_lines() {
        assert_eq!(
            parse_remote_listing("\n\norigin\thttps://x.test/a/b (fetch)\n"),
            vec!["https://x.test/a/b"]
        );
    }

    #[test]
    fn test_parse_remote_listing_empty_input() {
        assert!(parse_remote_listing("").is_empty());
    }
}
