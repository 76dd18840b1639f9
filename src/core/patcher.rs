use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

use crate::config::PatchConfig;
use crate::core::types::{PatchOutcome, PatchPreview};
use crate::diff::{diff_stats, replace_literal, unified_diff, Replaced};
use crate::error::{PatchError, PatchResult};
use crate::utils::fs::{overwrite_file, read_file_to_string};

/// Rewrites one file in place, replacing a literal block everywhere it occurs
pub struct Patcher {
    config: PatchConfig,
}

impl Patcher {
    pub fn new(config: PatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PatchConfig {
        &self.config
    }

    pub fn target(&self) -> &Path {
        &self.config.target
    }

    /// Read, replace, write back.
    ///
    /// Zero matches is not an error: the file is rewritten with identical
    /// content and the run succeeds. Only a configured `expected_count` turns
    /// a count mismatch into a failure, and then nothing is written.
    pub fn run(&self) -> PatchResult<PatchOutcome> {
        let (source, replaced) = self.transform()?;
        let path = self.target();

        overwrite_file(path, &replaced.content)?;

        let outcome = PatchOutcome {
            path: path.to_path_buf(),
            replacements: replaced.count,
            changed: replaced.changed(&source),
        };
        info!("Patched {}", outcome);

        Ok(outcome)
    }

    /// `run`, then write the configured confirmation line to `out`.
    /// The line is emitted for no-op runs too.
    pub fn run_and_report(&self, out: &mut impl Write) -> PatchResult<PatchOutcome> {
        let outcome = self.run()?;

        if outcome.is_noop() {
            info!("{} left unchanged", outcome.path.display());
        }

        writeln!(out, "{}", self.config.message)
            .and_then(|_| out.flush())
            .map_err(|source| PatchError::Report { source })?;

        Ok(outcome)
    }

    /// Compute what `run` would write and render it as a diff
    pub fn preview(&self) -> PatchResult<PatchPreview> {
        let (source, replaced) = self.transform()?;
        let path = self.target();
        let label = path.display().to_string();

        Ok(PatchPreview {
            path: path.to_path_buf(),
            replacements: replaced.count,
            stats: diff_stats(&source, &replaced.content),
            diff: unified_diff(&source, &replaced.content, &label),
        })
    }

    fn transform(&self) -> PatchResult<(String, Replaced)> {
        self.config.validate()?;

        let path = self.target();
        let source = read_file_to_string(path)?;
        let replaced = replace_literal(&source, &self.config.search, &self.config.replace)?;

        if replaced.count == 0 {
            warn!("Search pattern not found in {}", path.display());
        }

        if let Some(expected) = self.config.expected_count {
            if expected != replaced.count {
                return Err(PatchError::UnexpectedCount {
                    path: path.to_path_buf(),
                    expected,
                    found: replaced.count,
                });
            }
        }

        Ok((source, replaced))
    }
}
