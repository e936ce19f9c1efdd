pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;

use std::path::Path;

pub use crate::core::{WalkOptions, render};
pub use crate::error::{FsError, RootError};

/// Base name used for the header line of a render.
pub fn root_display_name(root_path: &Path) -> String {
    root_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root_path.as_os_str().to_string_lossy().into_owned())
}

/// Check that `root_path` is an existing directory, following links.
pub fn validate_root(root_path: &Path) -> Result<(), RootError> {
    let metadata = std::fs::metadata(root_path).map_err(|source| RootError::Unreadable {
        path: root_path.to_path_buf(),
        source,
    })?;

    if metadata.is_dir() {
        Ok(())
    } else {
        Err(RootError::NotADirectory {
            path: root_path.to_path_buf(),
        })
    }
}
