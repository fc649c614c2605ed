//! Print a file's content.
//!
//! The `read` command streams the entire file to stdout as raw bytes, with
//! no trailing confirmation, so the output can be piped or redirected
//! byte-for-byte.
//!
//! # Examples
//!
//! ```bash
//! filem read notes.txt
//! filem read archive.bin > restored.bin
//! ```

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::ops;

/// Command to stream a file's content to standard output.
#[derive(Args)]
pub struct ReadCommand {
    /// Path of the file to read
    #[arg(value_name = "PATH")]
    path: PathBuf,
}

impl ReadCommand {
    /// Execute the read command.
    pub async fn execute(self) -> Result<()> {
        ops::stream_to_stdout(&self.path).await?;
        Ok(())
    }
}
