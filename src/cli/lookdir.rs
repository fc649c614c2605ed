//! List a directory.
//!
//! The `lookdir` command prints one entry name per line, including the `.`
//! and `..` pseudo-entries, in the order the operating system returns them
//! (unsorted). With no argument it lists the current directory.
//!
//! # Examples
//!
//! ```bash
//! filem lookdir
//! filem lookdir /tmp
//! ```

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::ops;

/// Command to list the entries of a directory.
#[derive(Args)]
pub struct LookdirCommand {
    /// Directory to list (defaults to the current directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,
}

impl LookdirCommand {
    /// Execute the lookdir command.
    ///
    /// Entry names are printed lossily when they are not valid UTF-8;
    /// the enumeration itself is byte-faithful.
    pub async fn execute(self) -> Result<()> {
        let path = self.path.unwrap_or_else(|| PathBuf::from("."));

        let entries = ops::dir_entries(&path).await?;
        for entry in entries {
            println!("{}", entry.to_string_lossy());
        }

        Ok(())
    }
}
