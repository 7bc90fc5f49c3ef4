use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::error::{map_io_err, PatchResult};

/// Read a file's contents as UTF-8 text
pub fn read_file_to_string(path: impl AsRef<Path>) -> PatchResult<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    fs::read_to_string(path).map_err(map_io_err(path))
}

/// Overwrite an existing file with `content`.
///
/// The file is truncated in place and never created, so a path that
/// vanished since it was read fails instead of leaving a new file behind.
pub fn overwrite_existing(path: impl AsRef<Path>, content: &str) -> PatchResult<()> {
    let path = path.as_ref();
    debug!("Overwriting file: {} ({} bytes)", path.display(), content.len());

    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(map_io_err(path))?;

    file.write_all(content.as_bytes()).map_err(map_io_err(path))?;
    file.flush().map_err(map_io_err(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatchError;
    use tempfile::tempdir;

    #[test]
    fn test_overwrite_replaces_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("panel.tsx");
        fs::write(&path, "a much longer original body").unwrap();

        overwrite_existing(&path, "short").unwrap();

        assert_eq!(read_file_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_overwrite_never_creates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.tsx");

        let err = overwrite_existing(&path, "x").unwrap_err();

        assert!(matches!(err, PatchError::FileAccess { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.tsx");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(
            read_file_to_string(&path),
            Err(PatchError::FileAccess { .. })
        ));
    }
}
