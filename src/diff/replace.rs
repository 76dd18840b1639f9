use crate::error::{PatchError, PatchResult};
use tracing::debug;

/// Result of a literal replacement pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replaced {
    /// Source text with every match substituted
    pub content: String,
    /// Number of non-overlapping matches that were substituted
    pub count: usize,
}

impl Replaced {
    /// Whether the output differs from the input
    pub fn changed(&self, source: &str) -> bool {
        self.count > 0 && self.content != source
    }
}

/// Replace every non-overlapping occurrence of `pattern` in `source`.
///
/// Matching is literal, case and whitespace sensitive, and scans left to right
/// over the original text only. Text inserted by `replacement` is never
/// searched again, so a replacement that contains the pattern's prefix or
/// suffix cannot produce spurious matches.
pub fn replace_literal(source: &str, pattern: &str, replacement: &str) -> PatchResult<Replaced> {
    if pattern.is_empty() {
        return Err(PatchError::invalid_argument("search pattern must not be empty"));
    }

    let mut content = String::with_capacity(source.len());
    let mut last = 0;
    let mut count = 0;

    for (start, matched) in source.match_indices(pattern) {
        content.push_str(&source[last..start]);
        content.push_str(replacement);
        last = start + matched.len();
        count += 1;
    }
    content.push_str(&source[last..]);

    debug!("Replaced {} occurrence(s) of a {}-byte pattern", count, pattern.len());

    Ok(Replaced { content, count })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandwiched_matches() {
        let result = replace_literal("AxByC", "x", "yy").unwrap();
        assert_eq!(result.content, "AyyByC");
        assert_eq!(result.count, 1);

        let result = replace_literal("A<p>B<p>C", "<p>", "<r>").unwrap();
        assert_eq!(result.content, "A<r>B<r>C");
        assert_eq!(result.count, 2);
    }

    #[test]
    fn test_non_overlapping_left_to_right() {
        // "aaa" contains one non-overlapping "aa" when scanned from the left
        let result = replace_literal("aaa", "aa", "b").unwrap();
        assert_eq!(result.content, "ba");
        assert_eq!(result.count, 1);
    }

    #[test]
    fn test_replacement_is_not_rescanned() {
        // The replacement contains the pattern; a recursive pass would never terminate
        let result = replace_literal("x-x", "x", "xx").unwrap();
        assert_eq!(result.content, "xx-xx");
        assert_eq!(result.count, 2);
    }

    #[test]
    fn test_case_and_whitespace_sensitive() {
        let source = "  } catch (e) {\n";
        assert_eq!(replace_literal(source, "} CATCH (e) {", "!").unwrap().count, 0);
        assert_eq!(replace_literal(source, "\t} catch (e) {", "!").unwrap().count, 0);
        assert_eq!(replace_literal(source, "} catch (e) {", "!").unwrap().count, 1);
    }

    #[test]
    fn test_no_match_returns_source() {
        let result = replace_literal("unrelated text", "pattern", "replacement").unwrap();
        assert_eq!(result.content, "unrelated text");
        assert_eq!(result.count, 0);
        assert!(!result.changed("unrelated text"));
    }

    #[test]
    fn test_identical_replacement_is_unchanged() {
        let result = replace_literal("abc", "b", "b").unwrap();
        assert_eq!(result.count, 1);
        assert!(!result.changed("abc"));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let err = replace_literal("abc", "", "x").unwrap_err();
        assert!(matches!(err, PatchError::InvalidArgument { .. }));
    }
}
