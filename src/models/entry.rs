use std::path::PathBuf;

/// What a directory entry is, as reported without following links.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Other,
}

/// One raw child of a listed directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

impl FsEntry {
    /// Name is the last component of `path`, lossily decoded.
    pub fn new(path: PathBuf, kind: EntryKind) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name, kind }
    }
}
