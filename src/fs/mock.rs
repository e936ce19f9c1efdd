use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::FsError;
use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response {
    Ok(Vec<FsEntry>),
    Denied,
    Err(io::ErrorKind, String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    responses: HashMap<PathBuf, Response>,
    directories: HashSet<PathBuf>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        let dir = dir.into();
        inner.directories.insert(dir.clone());
        inner.responses.insert(dir, Response::Ok(entries));
    }

    /// Listing `dir` fails with a permission error.
    pub fn set_denied(&self, dir: impl Into<PathBuf>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        let dir = dir.into();
        inner.directories.insert(dir.clone());
        inner.responses.insert(dir, Response::Denied);
    }

    pub fn set_error(
        &self,
        dir: impl Into<PathBuf>,
        kind: io::ErrorKind,
        message: impl Into<String>,
    ) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .responses
            .insert(dir.into(), Response::Err(kind, message.into()));
    }

    /// Make `is_dir(path)` answer `true` without scripting a listing.
    pub fn mark_dir(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.directories.insert(path.into());
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>, FsError> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.responses.get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::Denied) => Err(FsError::from_io(
                dir,
                io::Error::from(io::ErrorKind::PermissionDenied),
            )),
            Some(Response::Err(kind, message)) => {
                Err(FsError::from_io(dir, io::Error::new(*kind, message.clone())))
            }
            None => Err(FsError::from_io(
                dir,
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no mock response for {}", dir.display()),
                ),
            )),
        }
    }

    async fn is_dir(&self, path: &Path) -> bool {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.directories.contains(path)
    }
}

pub fn file_entry(parent: &str, name: &str) -> FsEntry {
    entry(parent, name, EntryKind::File)
}

pub fn dir_entry(parent: &str, name: &str) -> FsEntry {
    entry(parent, name, EntryKind::Directory)
}

pub fn symlink_entry(parent: &str, name: &str) -> FsEntry {
    entry(parent, name, EntryKind::Symlink)
}

fn entry(parent: &str, name: &str, kind: EntryKind) -> FsEntry {
    FsEntry::new(Path::new(parent).join(name), kind)
}
