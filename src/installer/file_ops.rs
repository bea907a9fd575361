//! Basic file operations for component installation
//!
//! Writes go to a temporary sibling first and are renamed into place, so a
//! failed write never leaves a half-written component behind.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{self, Result};

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| error::fs::write_failed(parent, e))?;
    }
    Ok(())
}

/// Write `content` to `path`, replacing any existing file
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;

    if path.is_dir() {
        return Err(error::fs::write_failed(path, "target is a directory"));
    }

    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(parent).map_err(|e| error::fs::write_failed(path, e))?;

    temp.write_all(content.as_bytes())
        .map_err(|e| error::fs::write_failed(path, e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| error::fs::write_failed(path, e))?;

    // NamedTempFile is created 0600; keep the mode of the file being replaced
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mode = std::fs::metadata(path)
            .map(|m| m.permissions().mode())
            .unwrap_or(0o644);
        temp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(mode))
            .map_err(|e| error::fs::write_failed(path, e))?;
    }

    temp.persist(path)
        .map_err(|e| error::fs::write_failed(path, e.error))?;
    Ok(())
}
