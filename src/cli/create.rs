//! Create an empty file.
//!
//! This module provides the `create` command, which creates a new empty
//! regular file and refuses to touch a path that already exists. On Unix
//! the file is created with owner read/write/execute permissions.
//!
//! # Examples
//!
//! ```bash
//! filem create notes.txt
//! ```
//!
//! # Error Conditions
//!
//! - Returns an error if the path already exists (file, directory, or link)
//! - Returns an error if the file cannot be created (missing parent
//!   directory, permission denied, ...)

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::ops;

/// Command to create a new empty file.
#[derive(Args)]
pub struct CreateCommand {
    /// Path of the file to create; must not already exist
    #[arg(value_name = "PATH")]
    path: PathBuf,
}

impl CreateCommand {
    /// Execute the create command.
    ///
    /// Creates the file exclusively and prints a confirmation line to
    /// stdout. The filesystem is left unchanged on failure.
    pub async fn execute(self) -> Result<()> {
        ops::create_empty(&self.path).await?;

        println!("{} Created file {}", "✓".green(), self.path.display());
        Ok(())
    }
}
