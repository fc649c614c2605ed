//! Directory enumeration for `lookdir`
//!
//! Produces entry names in the order the operating system returns them,
//! unsorted. [`tokio::fs::read_dir`] omits the `.` and `..` pseudo-entries
//! that a raw `readdir` would include, so they are prepended explicitly to
//! keep the traditional listing shape.

use std::ffi::OsString;
use std::path::Path;

use tracing::debug;

use crate::core::FilemError;

/// Enumerate the entries of the directory at `path`.
///
/// Returns the `.` and `..` pseudo-entries followed by every real entry
/// name, in enumeration order. Names are returned as [`OsString`] because
/// directory entries are not guaranteed to be valid UTF-8.
///
/// # Errors
///
/// [`FilemError::DirectoryOpen`] if `path` does not exist, is not a
/// directory, or cannot be read. Enumeration failures partway through are
/// reported the same way.
pub async fn dir_entries(path: &Path) -> Result<Vec<OsString>, FilemError> {
    let mut read_dir = tokio::fs::read_dir(path).await.map_err(|e| FilemError::DirectoryOpen {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut entries = vec![OsString::from("."), OsString::from("..")];
    while let Some(entry) =
        read_dir.next_entry().await.map_err(|e| FilemError::DirectoryOpen {
            path: path.display().to_string(),
            source: e,
        })?
    {
        entries.push(entry.file_name());
    }

    debug!(path = %path.display(), count = entries.len(), "enumerated directory");
    Ok(entries)
}
