// Error types for the version-bump utility

use std::path::PathBuf;

use crate::models::version::ConstructionError;
use crate::services::version_parser::ParseError;

/// Failures while bumping a version file
#[derive(Debug, thiserror::Error)]
pub enum BumpError {
    /// Reading or writing the version file failed
    #[error("Error occurred when accessing file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The version file does not hold a valid version
    #[error("'{content}' is not a valid version")]
    MalformedVersionFile {
        content: String,
        #[source]
        source: ParseError,
    },

    /// The stored version cannot be bumped any further
    #[error("Cannot bump version {version}: {source}")]
    Overflow {
        version: String,
        #[source]
        source: ConstructionError,
    },
}

impl BumpError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BumpError>;

/// Exit code for content that cannot be bumped
pub const EXIT_INVALID_CONTENT: i32 = 1;
/// Exit code for file system failures
pub const EXIT_FILE_ACCESS: i32 = 2;

/// A failure formatted for the person running the hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_bump_error(err: &BumpError) -> Self {
        let exit_code = match err {
            BumpError::FileAccess { .. } => EXIT_FILE_ACCESS,
            BumpError::MalformedVersionFile { .. } | BumpError::Overflow { .. } => {
                EXIT_INVALID_CONTENT
            }
        };

        Self {
            message: err.to_string(),
            exit_code,
        }
    }

    /// Print the diagnostic as a single line on stderr
    pub fn print(&self) {
        let line = self.message.replace('\n', " ");
        eprintln!("error: {line}");
    }
}
