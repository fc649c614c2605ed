//! Copy a file.
//!
//! The `copy` command streams the source's bytes into the destination
//! (created if absent, truncated if present), leaving the source intact.
//! Success is silent.
//!
//! # Examples
//!
//! ```bash
//! filem copy original.txt backup.txt
//! ```

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::ops;

/// Command to copy a file to a new path.
#[derive(Args)]
pub struct CopyCommand {
    /// Path of the file to copy
    #[arg(value_name = "PATH-FROM")]
    from: PathBuf,

    /// Path to copy the file to
    #[arg(value_name = "PATH-TO")]
    to: PathBuf,
}

impl CopyCommand {
    /// Execute the copy command.
    pub async fn execute(self) -> Result<()> {
        ops::copy_contents(&self.from, &self.to).await?;
        Ok(())
    }
}
