//! Byte-exact file transfer: the engine behind `copy` and `move`
//!
//! Both operations stream the full content of the source into the
//! destination through [`tokio::io::copy`]; `move` then unlinks the source.
//! The destination is created if absent and truncated if present, so after
//! a successful transfer it holds exactly the source bytes.
//!
//! There is no strong rollback. If the post-copy source unlink fails, the
//! destination duplicate is unlinked once on a best-effort basis and a
//! dedicated [`FilemError::MoveIncomplete`] error is returned; the cleanup
//! attempt is never retried and its own failure is only logged.

use std::path::Path;

use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::core::FilemError;

/// Stream every byte of `from` into `to`, leaving `from` intact.
///
/// Returns the number of bytes transferred. Both handles are closed on
/// every exit path, including an open failure on the destination side
/// after the source is already open.
///
/// # Errors
///
/// - [`FilemError::FileOpen`] if the source cannot be opened for reading
/// - [`FilemError::FileCreate`] if the destination cannot be opened for
///   writing (created if absent)
/// - [`FilemError::Io`] if the transfer itself fails mid-stream
pub async fn copy_contents(from: &Path, to: &Path) -> Result<u64, FilemError> {
    let mut reader = File::open(from).await.map_err(|e| FilemError::FileOpen {
        path: from.display().to_string(),
        source: e,
    })?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(super::CREATE_MODE);

    // reader drops (and closes) if this open fails
    let mut writer = options.open(to).await.map_err(|e| FilemError::FileCreate {
        path: to.display().to_string(),
        source: e,
    })?;

    let bytes = tokio::io::copy(&mut reader, &mut writer).await?;
    writer.flush().await?;

    debug!(from = %from.display(), to = %to.display(), bytes, "copied file contents");
    Ok(bytes)
}

/// Move `from` to `to`: copy the contents, then unlink the source.
///
/// Returns the number of bytes transferred. If the unlink fails after a
/// complete copy, the orphaned destination copy is unlinked once on a
/// best-effort basis (a failure there is logged, not reported) and
/// [`FilemError::MoveIncomplete`] is returned.
///
/// # Errors
///
/// Everything [`copy_contents`] can return, plus
/// [`FilemError::MoveIncomplete`] for the failed source unlink.
pub async fn move_file(from: &Path, to: &Path) -> Result<u64, FilemError> {
    let bytes = copy_contents(from, to).await?;

    if let Err(e) = tokio::fs::remove_file(from).await {
        if let Err(cleanup) = tokio::fs::remove_file(to).await {
            warn!(
                path = %to.display(),
                error = %cleanup,
                "could not remove orphaned destination copy after failed move"
            );
        }
        return Err(FilemError::MoveIncomplete {
            path: from.display().to_string(),
            source: e,
        });
    }

    debug!(from = %from.display(), to = %to.display(), bytes, "moved file");
    Ok(bytes)
}
