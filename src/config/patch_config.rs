use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{PatchError, PatchResult};

/// File patched when no target is configured
pub const DEFAULT_TARGET: &str = "src/skills/drive/index.ts";

/// Printed to stdout after a successful run
pub const DEFAULT_MESSAGE: &str = "Updated error handling.";

/// The cross-device move fallback in the drive skill. It occurs twice in the
/// target, once in the by-date sort and once in the by-extension sort.
pub const DRIVE_MOVE_PATTERN: &str = "        } catch (e) {
          if ((e as NodeJS.ErrnoException).code === 'EXDEV') {
            await fs.promises.cp(src, dst, { recursive: true });
            await fs.promises.rm(src, { recursive: true });
            moved.push(`${name} -> ${folderName}/`);
          }
        }";

/// Same block, with the non-EXDEV failure logged instead of swallowed
pub const DRIVE_MOVE_REPLACEMENT: &str = "        } catch (e) {
          if ((e as NodeJS.ErrnoException).code === 'EXDEV') {
            await fs.promises.cp(src, dst, { recursive: true });
            await fs.promises.rm(src, { recursive: true });
            moved.push(`${name} -> ${folderName}/`);
          } else {
            console.error(`[DriveSkill] Failed to move ${name}:`, e);
          }
        }";

/// Everything a patch run needs: where, what to find, what to put there
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PatchConfig {
    /// File rewritten in place
    #[serde(default = "default_target")]
    pub target: PathBuf,

    /// Literal text to search for
    #[serde(default = "default_search")]
    pub search: String,

    /// Literal text substituted for each match
    #[serde(default = "default_replace")]
    pub replace: String,

    /// Confirmation line printed on success
    #[serde(default = "default_message")]
    pub message: String,

    /// Fail without writing when the number of matches differs
    #[serde(default)]
    pub expected_count: Option<usize>,
}

fn default_target() -> PathBuf {
    PathBuf::from(DEFAULT_TARGET)
}

fn default_search() -> String {
    DRIVE_MOVE_PATTERN.to_string()
}

fn default_replace() -> String {
    DRIVE_MOVE_REPLACEMENT.to_string()
}

fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            search: default_search(),
            replace: default_replace(),
            message: default_message(),
            expected_count: None,
        }
    }
}

impl PatchConfig {
    /// Build a config for an arbitrary file and literal pair
    pub fn new(
        target: impl Into<PathBuf>,
        search: impl Into<String>,
        replace: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            search: search.into(),
            replace: replace.into(),
            ..Self::default()
        }
    }

    pub fn with_target(mut self, target: impl Into<PathBuf>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_expected_count(mut self, expected: usize) -> Self {
        self.expected_count = Some(expected);
        self
    }

    /// Render as TOML in the same shape `ConfigLoader` reads
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Reject configurations that cannot describe a literal replacement
    pub fn validate(&self) -> PatchResult<()> {
        if self.search.is_empty() {
            return Err(PatchError::invalid_argument("search pattern must not be empty"));
        }
        if self.target.as_os_str().is_empty() {
            return Err(PatchError::invalid_argument("target path must not be empty"));
        }
        Ok(())
    }
}
