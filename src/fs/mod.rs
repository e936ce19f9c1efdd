mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::{MockFileSystem, dir_entry, file_entry, symlink_entry};

use async_trait::async_trait;
use std::path::Path;

use crate::error::FsError;
use crate::models::FsEntry;

/// Filesystem queries the walker depends on.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Immediate children of `dir`, in no particular order.
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>, FsError>;

    /// Whether `path` resolves to a directory, following symbolic links.
    /// Any error answers `false`.
    async fn is_dir(&self, path: &Path) -> bool;
}
