//! Create a symbolic link.
//!
//! The `symlink` command stores the target path by name, without resolving
//! it, so links to not-yet-existing targets are allowed. Success is
//! silent; creation failures are fatal.
//!
//! # Examples
//!
//! ```bash
//! filem symlink /var/log/app/current.log latest.log
//! ```

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::ops;

/// Command to create a symbolic link.
#[derive(Args)]
pub struct SymlinkCommand {
    /// Path the link will name; stored verbatim, not resolved
    #[arg(value_name = "PATH-TARGET")]
    target: PathBuf,

    /// Path of the link to create
    #[arg(value_name = "PATH-LINKNAME")]
    link_name: PathBuf,
}

impl SymlinkCommand {
    /// Execute the symlink command.
    pub async fn execute(self) -> Result<()> {
        ops::symlink(&self.target, &self.link_name).await?;
        Ok(())
    }
}
