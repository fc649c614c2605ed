//! Single-file operations: exclusive creation, streaming read, removal
//!
//! These are the one-path operations behind `filem create`, `filem read`,
//! and `filem delete`. Each performs exactly one filesystem effect and
//! returns a typed [`FilemError`] on failure; handles are closed on every
//! path by `Drop`.

use std::path::Path;

use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::core::FilemError;

/// Create an empty regular file at `path`, failing if the path exists.
///
/// Creation is exclusive (`create_new`), so a file, directory, or link
/// already present at `path` yields [`FilemError::AlreadyExists`] and the
/// filesystem is left unchanged. On Unix the file is created with owner
/// read/write/execute permissions.
///
/// # Errors
///
/// - [`FilemError::AlreadyExists`] if `path` already names anything
/// - [`FilemError::FileCreate`] for any other creation failure
///   (missing parent directory, permission denied, ...)
pub async fn create_empty(path: &Path) -> Result<(), FilemError> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    options.mode(super::CREATE_MODE);

    match options.open(path).await {
        Ok(_file) => {
            // _file drops here, closing the handle
            debug!(path = %path.display(), "created empty file");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Err(FilemError::AlreadyExists {
            path: path.display().to_string(),
        }),
        Err(e) => Err(FilemError::FileCreate {
            path: path.display().to_string(),
            source: e,
        }),
    }
}

/// Stream the entire content of `path` to standard output as raw bytes.
///
/// The transfer is buffered internally but byte-exact; no trailing newline
/// or confirmation is added.
///
/// # Errors
///
/// - [`FilemError::FileOpen`] if `path` cannot be opened for reading
/// - [`FilemError::Io`] if writing to stdout fails mid-stream
pub async fn stream_to_stdout(path: &Path) -> Result<(), FilemError> {
    let mut file = File::open(path).await.map_err(|e| FilemError::FileOpen {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut stdout = tokio::io::stdout();
    let bytes = tokio::io::copy(&mut file, &mut stdout).await?;
    stdout.flush().await?;

    debug!(path = %path.display(), bytes, "streamed file to stdout");
    Ok(())
}

/// Remove the file at `path`.
///
/// This is a plain unlink: directories are not removed, recursively or
/// otherwise.
///
/// # Errors
///
/// [`FilemError::RemoveFailed`] if the path does not exist, names a
/// directory, or cannot be unlinked.
pub async fn remove(path: &Path) -> Result<(), FilemError> {
    tokio::fs::remove_file(path).await.map_err(|e| FilemError::RemoveFailed {
        path: path.display().to_string(),
        source: e,
    })?;

    debug!(path = %path.display(), "removed file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_create_empty_makes_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("new.txt");

        create_empty(&path).await.unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.is_file());
        assert_eq!(metadata.len(), 0);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_create_empty_sets_owner_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("new.txt");

        create_empty(&path).await.unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }

    #[tokio::test]
    async fn test_create_empty_fails_on_existing_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("taken.txt");
        std::fs::write(&path, "occupied").unwrap();

        let err = create_empty(&path).await.unwrap_err();
        assert!(matches!(err, FilemError::AlreadyExists { .. }));

        // the existing content is untouched
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "occupied");
    }

    #[tokio::test]
    async fn test_create_empty_fails_without_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no-such-dir").join("new.txt");

        let err = create_empty(&path).await.unwrap_err();
        assert!(matches!(err, FilemError::FileCreate { .. }));
    }

    #[tokio::test]
    async fn test_stream_to_stdout_fails_on_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.txt");

        let err = stream_to_stdout(&path).await.unwrap_err();
        assert!(matches!(err, FilemError::FileOpen { .. }));
    }

    #[tokio::test]
    async fn test_stream_to_stdout_accepts_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("present.txt");
        std::fs::write(&path, "hello\n").unwrap();

        stream_to_stdout(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_remove_deletes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doomed.txt");
        std::fs::write(&path, "bye").unwrap();

        remove(&path).await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_remove_fails_on_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("never-was.txt");

        let err = remove(&path).await.unwrap_err();
        assert!(matches!(err, FilemError::RemoveFailed { .. }));
    }

    #[tokio::test]
    async fn test_remove_fails_on_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("subdir");
        std::fs::create_dir(&dir).unwrap();

        let err = remove(&dir).await.unwrap_err();
        assert!(matches!(err, FilemError::RemoveFailed { .. }));
        assert!(dir.exists());
    }
}
