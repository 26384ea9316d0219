//! Error types shared by the lister and the tree drawer

use std::io;
use std::path::{Path, PathBuf};

/// Errors surfaced to callers of `list_files` and `TreeDrawer`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The listing target does not exist
    #[error("cannot access '{}': No such file or directory", .path.display())]
    NotFound { path: PathBuf },

    /// The listing target exists but is not a directory
    #[error("cannot access '{}': Not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// The directory contents cannot be read
    #[error("cannot open directory '{}': Permission denied", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Convenience Result type using `natree::Error`
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Classify an I/O error raised while accessing `path`.
    pub fn from_io(path: impl AsRef<Path>, err: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source: err },
        }
    }

    /// The path the failing operation was applied to.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::NotADirectory { path }
            | Self::PermissionDenied { path }
            | Self::Io { path, .. } => path,
        }
    }
}

/// Check that `path` exists and is a directory. Follows symlinks.
pub fn check_dir(path: &Path) -> Result<()> {
    let meta = std::fs::metadata(path).map_err(|e| Error::from_io(path, e))?;
    if !meta.is_dir() {
        return Err(Error::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Check that `path` is an existing directory whose entries can be read.
///
/// Follows symlinks, so a link to a directory passes.
pub fn ensure_dir(path: &Path) -> Result<std::fs::ReadDir> {
    check_dir(path)?;
    std::fs::read_dir(path).map_err(|e| Error::from_io(path, e))
}
