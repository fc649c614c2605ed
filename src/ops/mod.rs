//! Filesystem operation implementations
//!
//! This is the library layer behind the CLI: one function per filesystem
//! effect, each returning a typed [`FilemError`](crate::core::FilemError)
//! instead of touching the terminal or the process exit status. The CLI
//! command structs in [`crate::cli`] are thin wrappers that call these
//! functions and render confirmations.
//!
//! # Modules
//!
//! - [`file`] - exclusive creation, streaming read to stdout, removal
//! - [`transfer`] - byte-exact copy, move with best-effort rollback
//! - [`links`] - hard link and symbolic link creation
//! - [`listing`] - directory enumeration
//!
//! Handle hygiene: every function opens its handles locally and relies on
//! ownership to close them on all exit paths, early errors included.

pub mod file;
pub mod links;
pub mod listing;
pub mod transfer;

pub use file::{create_empty, remove, stream_to_stdout};
pub use links::{hard_link, symlink};
pub use listing::dir_entries;
pub use transfer::{copy_contents, move_file};

/// Mode bits for files created by `create`, `copy`, and `move`:
/// read/write/execute for the owner only.
#[cfg(unix)]
pub(crate) const CREATE_MODE: u32 = 0o700;
