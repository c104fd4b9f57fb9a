//! Explicit-stack post-order walk shared by the size aggregations.

use sizetree_core::Node;

/// A node whose children are still being visited.
struct Frame<'a> {
    node: &'a Node,
    next_child: usize,
    total: u64,
}

impl<'a> Frame<'a> {
    fn new(node: &'a Node) -> Self {
        Self {
            node,
            next_child: 0,
            total: node.size,
        }
    }
}

/// Walk `root` in post-order and return its subtree total.
///
/// Children are visited in stored order. Once every child of a node has
/// finished, `on_finish` is called with the node and its subtree total (own
/// size plus all descendants), and that total is folded into the parent.
///
/// The walk keeps its own stack of frames, so it does not recurse.
pub fn post_order<'a, F>(root: &'a Node, mut on_finish: F) -> u64
where
    F: FnMut(&'a Node, u64),
{
    let mut stack = vec![Frame::new(root)];
    let mut root_total = 0;

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;
        if let Some(child) = node.children.get(frame.next_child) {
            frame.next_child += 1;
            stack.push(Frame::new(child));
            continue;
        }

        let total = frame.total;
        stack.pop();
        on_finish(node, total);

        match stack.last_mut() {
            Some(parent) => parent.total = parent.total.saturating_add(total),
            None => root_total = total,
        }
    }

    root_total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_order_is_post_order() {
        let root = Node::with_children(
            "root",
            1,
            vec![
                Node::with_size("a", 2),
                Node::with_children("b", 0, vec![Node::with_size("c", 5)]),
            ],
        );

        let mut finished = Vec::new();
        let total = post_order(&root, |node, total| {
            finished.push((node.name.to_string(), total));
        });

        assert_eq!(total, 8);
        assert_eq!(
            finished,
            [
                ("a".to_string(), 2),
                ("c".to_string(), 5),
                ("b".to_string(), 5),
                ("root".to_string(), 8),
            ]
        );
    }

    #[test]
    fn test_single_node() {
        let leaf = Node::with_size("f", 10);
        let mut calls = 0;
        assert_eq!(post_order(&leaf, |_, _| calls += 1), 10);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        let root = Node::with_children(
            "big",
            u64::MAX,
            vec![Node::with_size("more", 1)],
        );
        assert_eq!(post_order(&root, |_, _| {}), u64::MAX);
    }
}
