//! Tab completion
//!
//! Prefix matching over the children of the current directory. Candidates
//! come back sorted; the controller only auto-fills when exactly one name
//! matches.

use crate::vfs::{self, VfsNode, VfsPath};

/// Collect child names of `cwd` starting with `partial`, sorted
/// lexicographically. An unresolvable directory yields no candidates.
pub fn complete(partial: &str, cwd: &VfsPath, root: &VfsNode) -> Vec<String> {
    let Some(node) = vfs::lookup(root, cwd) else {
        return Vec::new();
    };

    let mut candidates: Vec<String> = node
        .children()
        .iter()
        .filter(|c| c.name().starts_with(partial))
        .map(|c| String::from(c.name()))
        .collect();
    candidates.sort();
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VfsNode {
        let mut root = VfsNode::root();
        root.insert(VfsNode::dir("projects")).ok();
        root.insert(VfsNode::dir("papers")).ok();
        root.insert(VfsNode::text("about.txt", "")).ok();
        root
    }

    #[test]
    fn test_prefix_filter() {
        let root = sample();
        assert_eq!(
            complete("pr", &VfsPath::root(), &root),
            vec!["projects"]
        );
    }

    #[test]
    fn test_candidates_sorted() {
        let root = sample();
        assert_eq!(
            complete("p", &VfsPath::root(), &root),
            vec!["papers", "projects"]
        );
    }

    #[test]
    fn test_empty_partial_matches_everything() {
        let root = sample();
        assert_eq!(complete("", &VfsPath::root(), &root).len(), 3);
    }

    #[test]
    fn test_no_match() {
        let root = sample();
        assert!(complete("zzz", &VfsPath::root(), &root).is_empty());
    }
}
