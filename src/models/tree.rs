use super::EntryKind;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeNode {
    pub name: String,
    /// `Directory` whenever the is-directory test passed, links included.
    pub kind: EntryKind,
    pub permission_denied: bool,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
            permission_denied: false,
            children: Vec::new(),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Name as shown in the tree: directories carry a trailing `/`.
    pub fn display_name(&self) -> String {
        if self.is_dir() {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Contents of the root directory of a render.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DirTree {
    pub permission_denied: bool,
    pub children: Vec<TreeNode>,
}
