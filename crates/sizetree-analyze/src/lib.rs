//! Traversal algorithms for sizetree.
//!
//! Every function here is a read-only query over an in-memory [`Node`] tree
//! and takes `Option<&Node>`, where `None` stands for an absent tree:
//!
//! - [`total_size`] - own size plus the size of every descendant
//! - [`folder_sizes`] - folder name to total size, for every node with children
//! - [`level_order`] - node names grouped by depth, breadth-first
//!
//! Size aggregation uses an explicit-stack post-order walk, so tree depth is
//! bounded by heap memory rather than the call stack.
//!
//! ```rust
//! use sizetree_analyze::{folder_sizes, level_order, total_size};
//! use sizetree_core::Node;
//!
//! let root = Node::with_children(
//!     "root",
//!     1,
//!     vec![
//!         Node::with_size("a", 2),
//!         Node::with_children("b", 0, vec![Node::with_size("c", 5)]),
//!     ],
//! );
//!
//! assert_eq!(total_size(Some(&root)), 8);
//! assert_eq!(folder_sizes(Some(&root))["b"], 5);
//! assert_eq!(level_order(Some(&root))[1], ["a", "b"]);
//! ```

mod folders;
mod levels;
mod report;
mod total;
mod walk;

pub use folders::{FolderSizes, folder_sizes};
pub use levels::{Levels, level_order};
pub use report::TreeReport;
pub use total::{NodeExt, total_size};
pub use walk::post_order;

// Re-export core types
pub use sizetree_core::{FolderOrder, Node, ReportConfig};
