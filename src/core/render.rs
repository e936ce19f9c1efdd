use std::io::{self, Write};
use std::path::Path;

use crate::core::walk::{WalkOptions, walk_dir};
use crate::fs::FileSystem;
use crate::models::{DirTree, TreeNode};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const BLANK: &str = "    ";
pub const PERMISSION_DENIED_MARKER: &str = "[Permission Denied]";

/// Render the directory at `root` as text.
///
/// The first line is the root's base name followed by `/`. Every line below
/// it starts with `indent`. The output ends with a newline.
pub async fn render<F: FileSystem>(
    fs: &F,
    root: &Path,
    indent: &str,
    options: &WalkOptions,
) -> anyhow::Result<String> {
    let tree = walk_dir(fs, root, options).await?;

    let mut out = Vec::new();
    write_tree(&mut out, &crate::root_display_name(root), &tree, indent)?;
    Ok(String::from_utf8(out)?)
}

pub fn write_tree<W: Write>(
    writer: &mut W,
    root_name: &str,
    tree: &DirTree,
    indent: &str,
) -> io::Result<()> {
    writeln!(writer, "{}/", root_name.trim_end_matches('/'))?;
    if tree.permission_denied {
        return write_marker(writer, indent);
    }
    write_children(writer, &tree.children, indent)
}

pub fn write_children<W: Write>(
    writer: &mut W,
    children: &[TreeNode],
    indent: &str,
) -> io::Result<()> {
    let mut prefix = indent.to_owned();
    // Each level remembers how much of `prefix` belongs to it.
    let mut levels = vec![(children.iter().peekable(), prefix.len())];

    while let Some((siblings, prefix_len)) = levels.last_mut() {
        let prefix_len = *prefix_len;
        let Some(node) = siblings.next() else {
            levels.pop();
            continue;
        };
        let is_last = siblings.peek().is_none();

        prefix.truncate(prefix_len);
        writer.write_all(prefix.as_bytes())?;
        writer.write_all(if is_last { LAST_BRANCH } else { BRANCH }.as_bytes())?;
        writer.write_all(node.display_name().as_bytes())?;
        writer.write_all(b"\n")?;

        if !node.is_dir() {
            continue;
        }

        prefix.push_str(if is_last { BLANK } else { PIPE });
        if node.permission_denied {
            write_marker(writer, &prefix)?;
        } else if !node.children.is_empty() {
            levels.push((node.children.iter().peekable(), prefix.len()));
        }
    }

    Ok(())
}

fn write_marker<W: Write>(writer: &mut W, prefix: &str) -> io::Result<()> {
    writeln!(writer, "{prefix}{BLANK}{PERMISSION_DENIED_MARKER}")
}
