//! Delete a file.
//!
//! The `delete` command unlinks a single file and prints a confirmation.
//! Directories are not removed; there is no recursive mode.
//!
//! # Examples
//!
//! ```bash
//! filem delete stale.txt
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::ops;

/// Command to remove a file.
#[derive(Args)]
pub struct DeleteCommand {
    /// Path of the file to remove
    #[arg(value_name = "PATH")]
    path: PathBuf,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub async fn execute(self) -> Result<()> {
        ops::remove(&self.path).await?;

        println!("{} Deleted file {}", "✓".green(), self.path.display());
        Ok(())
    }
}
