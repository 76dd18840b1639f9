use std::fmt;
use std::path::PathBuf;

use crate::diff::DiffStats;

/// What a completed patch run did to the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub path: PathBuf,
    /// Number of non-overlapping matches replaced
    pub replacements: usize,
    /// Whether the written bytes differ from what was read
    pub changed: bool,
}

impl PatchOutcome {
    pub fn is_noop(&self) -> bool {
        !self.changed
    }
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} replacement(s){}",
            self.path.display(),
            self.replacements,
            if self.changed { "" } else { ", unchanged" }
        )
    }
}

/// Result of a dry run; nothing is written
#[derive(Debug, Clone)]
pub struct PatchPreview {
    pub path: PathBuf,
    pub replacements: usize,
    pub stats: DiffStats,
    /// Unified diff, empty when the file would not change
    pub diff: String,
}

impl fmt::Display for PatchPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} replacement(s) would be made ({})",
            self.path.display(),
            self.replacements,
            self.stats
        )
    }
}
