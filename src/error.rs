use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to list a directory through a [`crate::fs::FileSystem`].
///
/// Display names the path only; the cause is the error source.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("{}: permission denied", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("{}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("filesystem task failed")]
    Task(#[from] tokio::task::JoinError),
}

impl FsError {
    /// Classify an I/O error raised while listing `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::PermissionDenied {
            Self::PermissionDenied {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// The root handed to the renderer is not something it can draw.
#[derive(Debug, Error)]
pub enum RootError {
    #[error("{}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: not a directory", path.display())]
    NotADirectory { path: PathBuf },
}
