//! Create a hard link.
//!
//! The `link` command creates a second directory entry for an existing
//! file. Success is silent; any failure from the underlying call (taken
//! link name, missing target, cross-filesystem link) is fatal.
//!
//! # Examples
//!
//! ```bash
//! filem link data.txt data-alias.txt
//! ```

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::ops;

/// Command to create a hard link to an existing file.
#[derive(Args)]
pub struct LinkCommand {
    /// Existing file the link will point to
    #[arg(value_name = "PATH-TARGET")]
    target: PathBuf,

    /// Path of the link to create
    #[arg(value_name = "PATH-LINKNAME")]
    link_name: PathBuf,
}

impl LinkCommand {
    /// Execute the link command.
    pub async fn execute(self) -> Result<()> {
        ops::hard_link(&self.target, &self.link_name).await?;
        Ok(())
    }
}
