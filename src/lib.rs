//! filem - a minimal front-end over operating-system file primitives
//!
//! filem exposes eight filesystem operations behind a command-name
//! argument and performs exactly one of them per invocation: create, read,
//! move, copy, delete, hard link, symbolic link, and directory listing.
//! There is no persistent state, no configuration, and no concurrency
//! between operations; the process either completes the requested action
//! and exits 0, or reports a fatal error on stderr and exits 1.
//!
//! # Architecture Overview
//!
//! The crate is split into three layers:
//!
//! - [`cli`] - the clap-derived command table and per-command argument
//!   structs; exact-name command resolution and operand-count validation
//!   happen here, before any filesystem action
//! - [`ops`] - the operation implementations; each performs one filesystem
//!   effect and returns a typed error, with handles released on every
//!   exit path through ownership
//! - [`core`] - the [`FilemError`](core::FilemError) taxonomy and the
//!   [`ErrorContext`](core::ErrorContext) reporting used by the single
//!   message-and-exit point in `main`
//!
//! Keeping process termination out of the handlers means every operation
//! is testable as a plain `Result`-returning function; the integration
//! suites under `tests/` cover the exit-status and stream contracts of the
//! binary itself.
//!
//! # Command-Line Usage
//!
//! ```bash
//! filem create  notes.txt          # create an empty file
//! filem read    notes.txt          # stream its bytes to stdout
//! filem copy    notes.txt copy.txt # byte-exact copy
//! filem move    copy.txt moved.txt # copy then remove the source
//! filem link    notes.txt hard.txt # hard link
//! filem symlink notes.txt soft.txt # symbolic link
//! filem lookdir .                  # list entries, incl. '.' and '..'
//! filem delete  moved.txt          # unlink
//! ```

pub mod cli;
pub mod core;
pub mod ops;
