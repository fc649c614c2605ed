//! Error handling for filem
//!
//! This module provides the error types and user-friendly error reporting for
//! the filem CLI. The error system is designed around two core principles:
//! 1. **Strongly-typed errors** for precise handling in code and in tests
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! The error system consists of two main types:
//! - [`FilemError`] - Enumerated error types for every failure mode
//! - [`ErrorContext`] - Wrapper that adds user-friendly details and suggestions
//!
//! Every operation returns a `Result` carrying a [`FilemError`] (usually
//! wrapped in [`anyhow::Error`] at the command boundary). Nothing below
//! `main` terminates the process: errors flow up to a single top-level
//! handler which converts them with [`user_friendly_error`], displays the
//! resulting [`ErrorContext`] on stderr, and exits with status 1. This keeps
//! every operation testable in isolation - a test asserts the error value
//! instead of observing a process exit.
//!
//! # Examples
//!
//! ```rust,no_run
//! use filem::core::{FilemError, user_friendly_error};
//!
//! fn create_something() -> Result<(), FilemError> {
//!     Err(FilemError::AlreadyExists { path: "notes.txt".to_string() })
//! }
//!
//! if let Err(e) = create_something() {
//!     let ctx = user_friendly_error(anyhow::Error::from(e));
//!     ctx.display(); // colored message + suggestion on stderr
//!     std::process::exit(1);
//! }
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for filem operations.
///
/// Each variant represents one specific failure mode of one of the eight
/// filesystem operations, carrying the path(s) involved and, where useful,
/// the underlying [`std::io::Error`]. Variants are written for end users:
/// the `Display` text is the message printed to stderr.
///
/// # Error Categories
///
/// - **Creation**: [`AlreadyExists`], [`FileCreate`]
/// - **Access**: [`FileOpen`]
/// - **Removal**: [`RemoveFailed`]
/// - **Transfer**: [`MoveIncomplete`]
/// - **Links**: [`LinkFailed`], [`SymlinkFailed`]
/// - **Listing**: [`DirectoryOpen`]
/// - **Fallback**: [`Io`] for stream failures with no more specific home
///
/// [`AlreadyExists`]: FilemError::AlreadyExists
/// [`FileCreate`]: FilemError::FileCreate
/// [`FileOpen`]: FilemError::FileOpen
/// [`RemoveFailed`]: FilemError::RemoveFailed
/// [`MoveIncomplete`]: FilemError::MoveIncomplete
/// [`LinkFailed`]: FilemError::LinkFailed
/// [`SymlinkFailed`]: FilemError::SymlinkFailed
/// [`DirectoryOpen`]: FilemError::DirectoryOpen
/// [`Io`]: FilemError::Io
#[derive(Error, Debug)]
pub enum FilemError {
    /// The target of `create` already exists.
    ///
    /// `create` opens the path with exclusive creation, so an existing
    /// file, link, or directory at the path is a hard failure and the
    /// filesystem is left untouched.
    #[error("file {path} already exists")]
    AlreadyExists {
        /// The path that was supposed to be created
        path: String,
    },

    /// A path could not be opened for reading.
    ///
    /// Raised by `read`, and by `move`/`copy` for their source operand.
    /// Covers missing files, permission problems, and paths that name a
    /// directory where a file is required.
    #[error("failed to open {path} for reading")]
    FileOpen {
        /// The path that could not be opened
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// A path could not be opened or created for writing.
    ///
    /// Raised by `create` for failures other than prior existence, and by
    /// `move`/`copy` for their destination operand.
    #[error("failed to create {path}")]
    FileCreate {
        /// The path that could not be created
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// A path could not be removed.
    ///
    /// Raised by `delete` when the unlink fails (missing path, permission
    /// denied, or the path names a directory).
    #[error("failed to remove {path}")]
    RemoveFailed {
        /// The path that could not be removed
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// `move` copied the data but could not remove the source.
    ///
    /// The destination copy was complete when this is raised; a
    /// best-effort unlink of that now-duplicate destination has already
    /// been attempted (and its own failure, if any, logged) by the time
    /// the error reaches the reporter.
    #[error("move failed: {path} was copied but the source could not be removed")]
    MoveIncomplete {
        /// The source path that survived the move
        path: String,
        /// The underlying I/O error from the unlink
        source: std::io::Error,
    },

    /// Hard link creation failed.
    ///
    /// Typical causes: the link name already exists, the target does not,
    /// or target and link live on different filesystems.
    #[error("failed to create hard link {link} -> {target}")]
    LinkFailed {
        /// The existing path the link was to point at
        target: String,
        /// The path the link was to be created at
        link: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Symbolic link creation failed.
    ///
    /// The target is stored by name and never resolved, so a missing
    /// target is not an error here; a pre-existing link name is.
    #[error("failed to create symbolic link {link} -> {target}")]
    SymlinkFailed {
        /// The path name the link was to store
        target: String,
        /// The path the link was to be created at
        link: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// A directory could not be opened for enumeration.
    #[error("failed to open directory {path}")]
    DirectoryOpen {
        /// The path that could not be enumerated
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// An I/O error with no more specific variant.
    ///
    /// Mostly failures while streaming bytes between already-open
    /// handles, e.g. a write error on stdout or a disk-full condition
    /// mid-transfer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error context wrapper that provides user-friendly error information.
///
/// `ErrorContext` wraps a [`FilemError`] and adds optional details and a
/// suggestion for resolution. It is the shape in which filem presents
/// errors to CLI users.
///
/// # Display Format
///
/// When displayed, errors show:
/// 1. **Error**: the main message, red and bold
/// 2. **Details**: additional context, yellow (optional)
/// 3. **Suggestion**: actionable steps, green (optional)
///
/// # Examples
///
/// ```rust,no_run
/// use filem::core::{ErrorContext, FilemError};
///
/// let context = ErrorContext::new(FilemError::AlreadyExists {
///     path: "notes.txt".to_string(),
/// })
/// .with_suggestion("Delete the existing file first, or pick another name");
///
/// context.display(); // prints colored error to stderr
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying filem error
    pub error: FilemError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: FilemError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    ///
    /// Suggestions should be actionable steps the user can take. They are
    /// rendered in green to draw attention.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining why the error occurred.
    ///
    /// Rendered in yellow, less prominent than the error or suggestion.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    ///
    /// This is the single place where filem errors become terminal output;
    /// `main` calls it exactly once before exiting non-zero.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`].
///
/// This is the main entry point for turning arbitrary errors into CLI
/// output. [`FilemError`] values get tailored suggestions; raw
/// [`std::io::Error`]s get generic filesystem guidance; anything else is
/// passed through with its message intact.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    match error.downcast::<FilemError>() {
        Ok(filem_error) => create_error_context(filem_error),
        Err(other) => {
            if let Some(io_error) = other.downcast_ref::<std::io::Error>() {
                let context = match io_error.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        ErrorContext::new(FilemError::Io(std::io::Error::new(
                            io_error.kind(),
                            io_error.to_string(),
                        )))
                        .with_suggestion("Check the ownership and permission bits of the path")
                    }
                    std::io::ErrorKind::NotFound => {
                        ErrorContext::new(FilemError::Io(std::io::Error::new(
                            io_error.kind(),
                            io_error.to_string(),
                        )))
                        .with_suggestion("Check that the path exists and is spelled correctly")
                    }
                    _ => ErrorContext::new(FilemError::Io(std::io::Error::new(
                        io_error.kind(),
                        io_error.to_string(),
                    ))),
                };
                return context;
            }

            ErrorContext::new(FilemError::Io(std::io::Error::other(other.to_string())))
        }
    }
}

/// Attach per-variant details and suggestions to a [`FilemError`].
fn create_error_context(error: FilemError) -> ErrorContext {
    match &error {
        FilemError::AlreadyExists {
            ..
        } => ErrorContext::new(error)
            .with_details("create refuses to overwrite an existing path")
            .with_suggestion("Delete the existing file first, or pick another name"),

        FilemError::FileOpen {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check that the file exists and is readable"),

        FilemError::FileCreate {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check that the parent directory exists and is writable"),

        FilemError::RemoveFailed {
            ..
        } => ErrorContext::new(error).with_suggestion(
            "Check that the path exists, is not a directory, and is removable",
        ),

        FilemError::MoveIncomplete {
            ..
        } => ErrorContext::new(error)
            .with_details("the data was fully copied before the source unlink failed")
            .with_suggestion("Remove the source by hand once it becomes removable"),

        FilemError::LinkFailed {
            ..
        } => ErrorContext::new(error).with_details(
            "hard links require an existing target on the same filesystem and a free link name",
        ),

        FilemError::SymlinkFailed {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check that the link name is free and its directory is writable"),

        FilemError::DirectoryOpen {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check that the path exists and names a readable directory"),

        FilemError::Io(_) => ErrorContext::new(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = FilemError::AlreadyExists {
            path: "a.txt".to_string(),
        };
        assert_eq!(err.to_string(), "file a.txt already exists");

        let err = FilemError::MoveIncomplete {
            path: "src.bin".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(
            err.to_string(),
            "move failed: src.bin was copied but the source could not be removed"
        );

        let err = FilemError::LinkFailed {
            target: "orig".to_string(),
            link: "alias".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::AlreadyExists),
        };
        assert_eq!(err.to_string(), "failed to create hard link alias -> orig");
    }

    #[test]
    fn test_error_context_builder() {
        let context = ErrorContext::new(FilemError::AlreadyExists {
            path: "a.txt".to_string(),
        })
        .with_suggestion("pick another name")
        .with_details("exclusive creation");

        assert_eq!(context.suggestion.as_deref(), Some("pick another name"));
        assert_eq!(context.details.as_deref(), Some("exclusive creation"));

        let rendered = context.to_string();
        assert!(rendered.contains("file a.txt already exists"));
        assert!(rendered.contains("Details: exclusive creation"));
        assert!(rendered.contains("Suggestion: pick another name"));
    }

    #[test]
    fn test_user_friendly_error_adds_suggestions() {
        let err = FilemError::RemoveFailed {
            path: "gone.txt".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let context = user_friendly_error(anyhow::Error::from(err));
        assert!(context.suggestion.is_some());
        assert!(matches!(context.error, FilemError::RemoveFailed { .. }));
    }

    #[test]
    fn test_user_friendly_error_wraps_io_errors() {
        let io = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let context = user_friendly_error(anyhow::Error::from(io));
        assert!(matches!(context.error, FilemError::Io(_)));
        assert!(context.suggestion.is_some());
    }

    #[test]
    fn test_user_friendly_error_passes_through_generic_errors() {
        let context = user_friendly_error(anyhow::anyhow!("something odd"));
        assert!(context.error.to_string().contains("something odd"));
    }
}
