//! Move a file.
//!
//! The `move` command streams the source's bytes into the destination
//! (created if absent, truncated if present) and then removes the source.
//! Success is silent.
//!
//! If the source cannot be removed after the data has been copied, a
//! dedicated error is reported and the orphaned destination copy is
//! removed on a best-effort basis so a duplicate is not left behind.
//!
//! # Examples
//!
//! ```bash
//! filem move draft.txt final.txt
//! ```

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::ops;

/// Command to move a file to a new path.
#[derive(Args)]
pub struct MoveCommand {
    /// Path of the file to move
    #[arg(value_name = "PATH-FROM")]
    from: PathBuf,

    /// Path to move the file to
    #[arg(value_name = "PATH-TO")]
    to: PathBuf,
}

impl MoveCommand {
    /// Execute the move command.
    pub async fn execute(self) -> Result<()> {
        ops::move_file(&self.from, &self.to).await?;
        Ok(())
    }
}
