use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::error::{map_io_err, FileOp, PatchResult};

/// Read a file's contents as string
pub fn read_file_to_string(path: impl AsRef<Path>) -> PatchResult<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    fs::read_to_string(path).map_err(map_io_err(FileOp::Read, path))
}

/// Truncate and overwrite an existing file.
///
/// Parent directories are never created; a path that cannot be opened for
/// writing is a file access error.
pub fn overwrite_file(path: impl AsRef<Path>, content: &str) -> PatchResult<()> {
    let path = path.as_ref();
    debug!("Writing {} bytes to file: {}", content.len(), path.display());

    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(map_io_err(FileOp::Write, path))?;

    file.write_all(content.as_bytes())
        .and_then(|_| file.flush())
        .map_err(map_io_err(FileOp::Write, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatchError;
    use tempfile::tempdir;

    #[test]
    fn test_read_then_overwrite() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");
        fs::write(&file_path, "a much longer original body").unwrap();

        overwrite_file(&file_path, "short").unwrap();
        assert_eq!(read_file_to_string(&file_path).unwrap(), "short");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_file_to_string(dir.path().join("missing.ts")).unwrap_err();
        assert!(matches!(
            err,
            PatchError::FileAccess {
                op: FileOp::Read,
                ..
            }
        ));
    }

    #[test]
    fn test_overwrite_does_not_create_files() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nested").join("new.ts");

        let err = overwrite_file(&file_path, "content").unwrap_err();
        assert!(matches!(
            err,
            PatchError::FileAccess {
                op: FileOp::Write,
                ..
            }
        ));
        assert!(!file_path.exists());
        assert!(!dir.path().join("nested").exists());
    }
}
