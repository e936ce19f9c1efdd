pub mod render;
pub mod walk;

pub use render::{PERMISSION_DENIED_MARKER, render, write_children, write_tree};
pub use walk::{IgnorePatterns, WalkOptions, walk_dir};
