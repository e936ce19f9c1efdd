use async_trait::async_trait;
use std::fs::FileType;
use std::path::Path;
use tokio::task;

use crate::error::FsError;
use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>, FsError> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut entries = Vec::new();
            let listing = std::fs::read_dir(&dir).map_err(|err| FsError::from_io(&dir, err))?;
            for entry in listing {
                let entry = entry.map_err(|err| FsError::from_io(&dir, err))?;
                let path = entry.path();
                let kind = match entry.file_type() {
                    Ok(file_type) => entry_kind(file_type),
                    Err(err) => return Err(FsError::from_io(&path, err)),
                };
                entries.push(FsEntry::new(path, kind));
            }
            Ok(entries)
        })
        .await?
    }

    async fn is_dir(&self, path: &Path) -> bool {
        let path = path.to_path_buf();
        task::spawn_blocking(move || path.is_dir())
            .await
            .unwrap_or(false)
    }
}

fn entry_kind(file_type: FileType) -> EntryKind {
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}
