//! Total size of a subtree.

use sizetree_core::Node;

use crate::walk::post_order;

/// Total size of `node`: its own size plus the size of every descendant.
///
/// Returns 0 for an absent node. A file's total is its own size.
pub fn total_size(node: Option<&Node>) -> u64 {
    let Some(root) = node else {
        return 0;
    };

    let total = post_order(root, |_, _| {});
    tracing::debug!(root = %root.name, total, "computed total size");
    total
}

/// Traversal shortcuts on a present [`Node`].
pub trait NodeExt {
    /// Own size plus the size of every descendant.
    fn total_size(&self) -> u64;

    /// Number of nodes in the subtree, including this one.
    fn node_count(&self) -> usize;
}

impl NodeExt for Node {
    fn total_size(&self) -> u64 {
        total_size(Some(self))
    }

    fn node_count(&self) -> usize {
        let mut count = 0;
        post_order(self, |_, _| count += 1);
        count
    }
}
