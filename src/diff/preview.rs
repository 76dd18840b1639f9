use similar::{ChangeTag, TextDiff};
use std::fmt;

/// Line counts of a diff between the original and patched text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub insertions: usize,
    pub deletions: usize,
}

impl fmt::Display for DiffStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} -{}", self.insertions, self.deletions)
    }
}

/// Count inserted and deleted lines between two texts
pub fn diff_stats(old: &str, new: &str) -> DiffStats {
    let diff = TextDiff::from_lines(old, new);
    let mut stats = DiffStats::default();

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => stats.insertions += 1,
            ChangeTag::Delete => stats.deletions += 1,
            ChangeTag::Equal => {}
        }
    }

    stats
}

/// Render a unified diff with `a/` and `b/` headers for `label`.
/// Returns an empty string when the texts are identical.
pub fn unified_diff(old: &str, new: &str, label: &str) -> String {
    if old == new {
        return String::new();
    }

    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{}", label), &format!("b/{}", label))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_stats_counts_added_lines() {
        let old = "one\ntwo\nthree\n";
        let new = "one\ntwo\n} else {\n  log();\nthree\n";
        let stats = diff_stats(old, new);
        assert_eq!(stats, DiffStats { insertions: 2, deletions: 0 });
        assert_eq!(stats.to_string(), "+2 -0");
    }

    #[test]
    fn test_unified_diff_identical_is_empty() {
        assert!(unified_diff("same\n", "same\n", "index.ts").is_empty());
    }

    #[test]
    fn test_unified_diff_headers_and_lines() {
        let diff = unified_diff("a\nb\n", "a\nc\n", "index.ts");
        assert!(diff.contains("--- a/index.ts"));
        assert!(diff.contains("+++ b/index.ts"));
        assert!(diff.contains("-b"));
        assert!(diff.contains("+c"));
    }
}
