//! Hard link and symbolic link creation
//!
//! Both calls surface the underlying syscall result as a typed error; a
//! failed link is never silently ignored.

use std::path::Path;

use tracing::debug;

use crate::core::FilemError;

/// Create a hard link at `link` pointing to the existing file `target`.
///
/// # Errors
///
/// [`FilemError::LinkFailed`] if the link cannot be created: the link name
/// is taken, the target does not exist, or the two paths are on different
/// filesystems.
pub async fn hard_link(target: &Path, link: &Path) -> Result<(), FilemError> {
    tokio::fs::hard_link(target, link).await.map_err(|e| FilemError::LinkFailed {
        target: target.display().to_string(),
        link: link.display().to_string(),
        source: e,
    })?;

    debug!(target = %target.display(), link = %link.display(), "created hard link");
    Ok(())
}

/// Create a symbolic link at `link` naming `target`.
///
/// The target path is stored by name, never resolved, so dangling links
/// are creatable on purpose.
///
/// # Errors
///
/// [`FilemError::SymlinkFailed`] if the link cannot be created, most
/// commonly because the link name is already taken.
pub async fn symlink(target: &Path, link: &Path) -> Result<(), FilemError> {
    let result = {
        #[cfg(unix)]
        {
            tokio::fs::symlink(target, link).await
        }
        #[cfg(windows)]
        {
            tokio::fs::symlink_file(target, link).await
        }
    };

    result.map_err(|e| FilemError::SymlinkFailed {
        target: target.display().to_string(),
        link: link.display().to_string(),
        source: e,
    })?;

    debug!(target = %target.display(), link = %link.display(), "created symbolic link");
    Ok(())
}
