//! File and folder node type.

use std::fmt;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// A single file or folder in an in-memory tree.
///
/// Whether a node is a file or a folder is structural: a node with no
/// children is a file, a node with at least one child is a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// File/folder name. Not required to be unique across the tree.
    pub name: CompactString,

    /// The node's own size (file size, or folder overhead).
    #[serde(default)]
    pub size: u64,

    /// Children in insertion order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node with size 0 and no children.
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self::with_children(name, 0, Vec::new())
    }

    /// Create a childless node with the given size.
    pub fn with_size(name: impl Into<CompactString>, size: u64) -> Self {
        Self::with_children(name, size, Vec::new())
    }

    /// Create a node with the given size and children.
    pub fn with_children(
        name: impl Into<CompactString>,
        size: u64,
        children: Vec<Node>,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            children,
        }
    }

    /// Append a child after construction.
    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Check if this node is a file (no children).
    pub fn is_file(&self) -> bool {
        self.children.is_empty()
    }

    /// Check if this node is a folder (one or more children).
    pub fn is_folder(&self) -> bool {
        !self.children.is_empty()
    }

    /// Get the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

// Unlinks descendants onto a heap list so deep chains drop without recursion.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node({:?}, {}, children={})",
            self.name.as_str(),
            self.size,
            self.children.len()
        )
    }
}
