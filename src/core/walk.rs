use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use regex::RegexSet;
use tracing::{debug, warn};

use crate::error::FsError;
use crate::fs::FileSystem;
use crate::models::{DirTree, EntryKind, FsEntry, TreeNode};

/// Names to leave out of the tree, compiled once per walk.
pub struct IgnorePatterns {
    literals: HashSet<String>,
    globs: Option<RegexSet>,
}

impl IgnorePatterns {
    /// Parse a pipe-separated list such as `target|*.log|.git`.
    /// Segments without `*` or `?` match whole names literally.
    pub fn new(pattern: &str) -> anyhow::Result<Self> {
        let mut literals = HashSet::new();
        let mut globs = Vec::new();

        for segment in pattern.split('|').map(str::trim) {
            if segment.is_empty() {
                continue;
            }
            if segment.contains(['*', '?']) {
                globs.push(glob_to_regex(segment));
            } else {
                literals.insert(segment.to_owned());
            }
        }

        let globs = if globs.is_empty() {
            None
        } else {
            Some(
                RegexSet::new(&globs)
                    .with_context(|| format!("invalid ignore pattern: {pattern}"))?,
            )
        };

        Ok(Self { literals, globs })
    }

    pub fn matches(&self, name: &str) -> bool {
        self.literals.contains(name)
            || self
                .globs
                .as_ref()
                .is_some_and(|globs| globs.is_match(name))
    }
}

fn glob_to_regex(glob: &str) -> String {
    let mut out = String::with_capacity(glob.len() * 2 + 2);
    out.push('^');
    for c in glob.chars() {
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            c => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    out.push('$');
    out
}

/// Knobs for a single traversal. The default walks everything.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Levels of entries to show below the root (None means unlimited)
    pub max_depth: Option<usize>,
    /// Pipe-separated names or globs to omit
    pub ignore_pattern: Option<String>,
    /// Treat links to directories as directories
    pub follow_symlinks: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            ignore_pattern: None,
            follow_symlinks: true,
        }
    }
}

enum Listing {
    Entries(Vec<FsEntry>),
    Denied,
}

struct Frame {
    node: TreeNode,
    pending: std::vec::IntoIter<FsEntry>,
    depth: usize,
}

/// Read the directory tree under `dir`.
///
/// Directories that cannot be listed for lack of permission are kept in the
/// tree, flagged, and not descended. Any other listing failure aborts the
/// walk. Traversal uses an explicit stack, so nesting depth is bounded by
/// memory rather than by the call stack.
pub async fn walk_dir<F: FileSystem>(
    fs: &F,
    dir: &Path,
    options: &WalkOptions,
) -> anyhow::Result<DirTree> {
    let patterns = options
        .ignore_pattern
        .as_deref()
        .map(IgnorePatterns::new)
        .transpose()?;

    let root_entries = match list_children(fs, dir, options, patterns.as_ref()).await? {
        Listing::Entries(entries) => entries,
        Listing::Denied => {
            return Ok(DirTree {
                permission_denied: true,
                children: Vec::new(),
            });
        }
    };

    let mut stack = vec![Frame {
        node: TreeNode::new(crate::root_display_name(dir), EntryKind::Directory),
        pending: root_entries.into_iter(),
        depth: 0,
    }];
    let mut children = Vec::new();

    while let Some(frame) = stack.last_mut() {
        let depth = frame.depth;
        let Some(entry) = frame.pending.next() else {
            if let Some(done) = stack.pop() {
                match stack.last_mut() {
                    Some(parent) => parent.node.children.push(done.node),
                    None => children = done.node.children,
                }
            }
            continue;
        };

        let mut node = TreeNode::new(entry.name, entry.kind);
        if node.is_dir() && within_depth(options.max_depth, depth + 1) {
            match list_children(fs, &entry.path, options, patterns.as_ref()).await? {
                Listing::Entries(entries) => {
                    stack.push(Frame {
                        node,
                        pending: entries.into_iter(),
                        depth: depth + 1,
                    });
                    continue;
                }
                Listing::Denied => node.permission_denied = true,
            }
        }

        if let Some(parent) = stack.last_mut() {
            parent.node.children.push(node);
        }
    }

    Ok(DirTree {
        permission_denied: false,
        children,
    })
}

// -L 1 shows the root's children without listing any of them.
fn within_depth(max_depth: Option<usize>, level: usize) -> bool {
    max_depth.is_none_or(|max| level < max)
}

/// List, filter, resolve and sort the children of one directory.
async fn list_children<F: FileSystem>(
    fs: &F,
    dir: &Path,
    options: &WalkOptions,
    patterns: Option<&IgnorePatterns>,
) -> anyhow::Result<Listing> {
    let entries = match fs.read_dir(dir).await {
        Ok(entries) => entries,
        Err(FsError::PermissionDenied { path }) => {
            warn!(path = %path.display(), "permission denied, not descending");
            return Ok(Listing::Denied);
        }
        Err(err) => return Err(err.into()),
    };
    debug!(path = %dir.display(), entries = entries.len(), "listed directory");

    let mut kept = Vec::with_capacity(entries.len());
    for mut entry in entries {
        if patterns.is_some_and(|p| p.matches(&entry.name)) {
            continue;
        }
        if entry.kind == EntryKind::Symlink
            && options.follow_symlinks
            && fs.is_dir(&entry.path).await
        {
            entry.kind = EntryKind::Directory;
        }
        kept.push(entry);
    }

    // Byte order of UTF-8 is codepoint order.
    kept.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(Listing::Entries(kept))
}
