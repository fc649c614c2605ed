//! Command-line interface for filem.
//!
//! This module contains the root parser and all command implementations.
//! Each of the eight operations is implemented as a separate module with
//! its own argument struct and execution logic, keeping commands
//! independently testable.
//!
//! # Command Architecture
//!
//! The operation set is closed and known at build time, so the command
//! table is the [`Commands`] enum: clap resolves the first argument against
//! it with exact, full-string, case-sensitive matching (a strict prefix or
//! extension of a command name, like `crea` or `createx`, is rejected) and
//! validates the operand count of the matched command before any
//! filesystem action happens.
//!
//! Command execution never terminates the process. Every handler returns
//! `anyhow::Result<()>`; the single message-and-exit point lives in `main`.
//!
//! # Available Commands
//!
//! ```bash
//! filem create  <path>                    # create an empty file
//! filem read    <path>                    # stream a file to stdout
//! filem move    <path-from> <path-to>     # move a file
//! filem copy    <path-from> <path-to>     # copy a file
//! filem delete  <path>                    # remove a file
//! filem link    <path-target> <path-linkname>     # create a hard link
//! filem symlink <path-target> <path-linkname>     # create a symbolic link
//! filem lookdir [path]                    # list a directory
//! ```
//!
//! # Global Options
//!
//! All commands support:
//! - `--verbose` - enable debug-level tracing output
//! - `--quiet` - suppress all tracing output
//!
//! Neither flag affects the stdout contract of `read` or `lookdir`;
//! tracing goes to stderr.

mod copy;
mod create;
mod delete;
mod link;
mod lookdir;
mod mv;
mod read;
mod symlink;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Root CLI structure for filem.
///
/// Uses the clap derive API to generate parsing, help text, and
/// validation. Options marked `global = true` are available to all
/// subcommands.
#[derive(Parser)]
#[command(
    name = "filem",
    about = "A minimal front-end over operating-system file primitives",
    version,
    long_about = "filem performs a single filesystem operation per invocation: \
                  create, read, move, copy, delete, link, symlink, or lookdir."
)]
pub struct Cli {
    /// The operation to perform.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging.
    ///
    /// Shows debug-level traces of each filesystem call on stderr.
    /// Mutually exclusive with `--quiet`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors and the operation's own stdout.
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// The fixed set of filem operations.
///
/// One variant per operation; clap derives the command name from the
/// variant name, so the table stays in lockstep with the handlers.
#[derive(Subcommand)]
enum Commands {
    /// Create a new empty file; fails if the path already exists.
    Create(create::CreateCommand),

    /// Stream a file's content to standard output.
    Read(read::ReadCommand),

    /// Move a file: copy its bytes, then remove the source.
    Move(mv::MoveCommand),

    /// Copy a file, leaving the source intact.
    Copy(copy::CopyCommand),

    /// Remove a file.
    Delete(delete::DeleteCommand),

    /// Create a hard link to an existing file.
    Link(link::LinkCommand),

    /// Create a symbolic link.
    Symlink(symlink::SymlinkCommand),

    /// List a directory's entries, one per line.
    Lookdir(lookdir::LookdirCommand),
}

impl Cli {
    /// The tracing filter directive implied by the verbosity flags.
    ///
    /// `--verbose` maps to `debug`, `--quiet` disables tracing entirely,
    /// and the default is `warn` (the move-cleanup warning still shows).
    /// `RUST_LOG`, when set, takes precedence in `main`.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "off"
        } else {
            "warn"
        }
    }

    /// Execute the selected command.
    ///
    /// Dispatches to the matched operation's handler. Errors propagate to
    /// the caller; this method never exits the process.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Create(cmd) => cmd.execute().await,
            Commands::Read(cmd) => cmd.execute().await,
            Commands::Move(cmd) => cmd.execute().await,
            Commands::Copy(cmd) => cmd.execute().await,
            Commands::Delete(cmd) => cmd.execute().await,
            Commands::Link(cmd) => cmd.execute().await,
            Commands::Symlink(cmd) => cmd.execute().await,
            Commands::Lookdir(cmd) => cmd.execute().await,
        }
    }
}
