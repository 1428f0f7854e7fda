use clap::Args;
use std::path::PathBuf;

use crate::services::version_file::{BumpOutcome, VersionFile, DEFAULT_VERSION_FILE};
use crate::utils::error::Result;

/// Increment the patch component of a version file
#[derive(Debug, Args)]
pub struct BumpCommand {
    /// Version file to bump
    #[arg(default_value = DEFAULT_VERSION_FILE)]
    pub file: PathBuf,
}

impl BumpCommand {
    /// Execute the bump command
    pub fn run(&self) -> Result<BumpOutcome> {
        let version_file = VersionFile::new(&self.file);
        let outcome = version_file.bump()?;

        tracing::debug!("{} now holds {}", self.file.display(), outcome.current());
        Ok(outcome)
    }
}
