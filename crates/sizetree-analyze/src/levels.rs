//! Breadth-first grouping of node names by depth.

use std::collections::VecDeque;

use compact_str::CompactString;
use sizetree_core::Node;

/// Node names per depth, root level first.
pub type Levels = Vec<Vec<CompactString>>;

/// Group node names by depth, breadth-first.
///
/// Level 0 holds the root's name. Level k lists every node at depth k,
/// taking the nodes of level k-1 in order and each node's children in stored
/// order. Returns an empty list for an absent node.
pub fn level_order(node: Option<&Node>) -> Levels {
    let mut levels = Levels::new();
    let Some(root) = node else {
        return levels;
    };

    let mut queue: VecDeque<&Node> = VecDeque::from([root]);

    while !queue.is_empty() {
        let width = queue.len();
        let mut level = Vec::with_capacity(width);

        for _ in 0..width {
            let Some(current) = queue.pop_front() else {
                break;
            };
            level.push(current.name.clone());
            queue.extend(current.children.iter());
        }

        levels.push(level);
    }

    tracing::debug!(root = %root.name, depth = levels.len(), "computed level order");
    levels
}
