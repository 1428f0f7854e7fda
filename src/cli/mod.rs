// CLI module for the post-commit hook

pub mod bump;

use clap::Parser;
use crate::utils::error::Result;

use self::bump::BumpCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "verbump")]
#[command(about = "Increment the patch version stored in a VERSION file")]
#[command(long_about = r#"Reads the version stored in a VERSION file, increments its patch
component and writes the result back. When the file does not exist it is
created with version 1.0.1.

Intended to run as a post-commit hook:

  #!/bin/sh
  verbump

Examples:
  verbump                 Bump ./VERSION (1.2.8 -> 1.2.9)
  verbump path/VERSION    Bump a version file elsewhere"#)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub bump: BumpCommand,
}

/// Routes parsed arguments to the command implementation
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute the CLI
    pub fn execute(cli: Cli) -> Result<()> {
        cli.bump.run().map(|_| ())
    }
}
