// Version file management for the post-commit hook

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;

use crate::models::version::Version;
use crate::utils::error::{BumpError, Result};

/// File name the hook looks for in the working directory
pub const DEFAULT_VERSION_FILE: &str = "VERSION";

/// Content written when no version file exists yet
pub const INITIAL_VERSION: &str = "1.0.1";

/// Result of a successful bump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpOutcome {
    /// The file did not exist and was created with [`INITIAL_VERSION`]
    Created(Version),
    /// The stored version was advanced by one patch release
    Bumped { previous: Version, current: Version },
}

impl BumpOutcome {
    /// The version now stored in the file
    pub const fn current(&self) -> Version {
        match self {
            Self::Created(version) | Self::Bumped { current: version, .. } => *version,
        }
    }
}

/// A flat text file holding a single version string
#[derive(Debug, Clone)]
pub struct VersionFile {
    path: PathBuf,
}

impl VersionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the stored version without modifying the file
    pub fn read(&self) -> Result<Version> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| BumpError::file_access(&self.path, e))?;
        parse_content(&content)
    }

    /// Increment the patch component of the stored version.
    ///
    /// A missing file is created with [`INITIAL_VERSION`]. The file is replaced
    /// atomically, so a failure leaves the previous content in place.
    pub fn bump(&self) -> Result<BumpOutcome> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("{} not found, creating it", self.path.display());
                self.write(INITIAL_VERSION)?;
                let version = parse_content(INITIAL_VERSION)?;
                return Ok(BumpOutcome::Created(version));
            }
            Err(e) => return Err(BumpError::file_access(&self.path, e)),
        };

        let previous = parse_content(&content)?;
        let current = previous.bump_patch().map_err(|source| BumpError::Overflow {
            version: previous.to_string(),
            source,
        })?;

        self.write(&current.to_string())?;
        tracing::info!("Bumped {} from {} to {}", self.path.display(), previous, current);

        Ok(BumpOutcome::Bumped { previous, current })
    }

    /// Replace the file's content via a temporary file in the same directory.
    ///
    /// Symlinks are followed so the link target is rewritten, and the new file
    /// keeps the permissions of the one it replaces.
    fn write(&self, content: &str) -> Result<()> {
        let target = match fs::canonicalize(&self.path) {
            Ok(resolved) => resolved,
            Err(e) if e.kind() == ErrorKind::NotFound => self.path.clone(),
            Err(e) => return Err(BumpError::file_access(&self.path, e)),
        };
        let existing_permissions = match fs::metadata(&target) {
            Ok(metadata) => Some(metadata.permissions()),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(BumpError::file_access(&target, e)),
        };

        let dir = target
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        tracing::debug!("Writing '{}' to {}", content, target.display());

        let mut temp = temp_file_builder()
            .tempfile_in(dir)
            .map_err(|e| BumpError::file_access(dir, e))?;
        temp.write_all(content.as_bytes())
            .and_then(|()| match existing_permissions {
                Some(permissions) => temp.as_file().set_permissions(permissions),
                None => Ok(()),
            })
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| BumpError::file_access(temp.path(), e))?;
        temp.persist(&target)
            .map_err(|e| BumpError::file_access(&target, e.error))?;

        Ok(())
    }
}

/// Temp files default to 0600; new version files get the usual 0666 minus umask
#[cfg(unix)]
fn temp_file_builder() -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_file_builder() -> Builder<'static, 'static> {
    Builder::new()
}

impl Default for VersionFile {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION_FILE)
    }
}

fn parse_content(content: &str) -> Result<Version> {
    tracing::debug!("Parsing version file content '{}'", content.trim());
    Version::from_string(content).map_err(|source| BumpError::MalformedVersionFile {
        content: content.trim().to_string(),
        source,
    })
}
