//! Folder name to total size mapping.

use compact_str::CompactString;
use indexmap::IndexMap;
use sizetree_core::Node;

use crate::walk::post_order;

/// Folder name to total size, in the order folders were first recorded.
pub type FolderSizes = IndexMap<CompactString, u64>;

/// Map every folder in the tree to its total size.
///
/// Only nodes with at least one child are recorded; files never appear as
/// keys. Returns an empty map for an absent node.
///
/// Entries are recorded in post-order (a folder after all of its
/// descendants). Folder names are not unique, and a later folder with the
/// same name replaces the value recorded for an earlier one, so the map
/// holds the total of the last same-named folder to finish.
pub fn folder_sizes(node: Option<&Node>) -> FolderSizes {
    let mut sizes = FolderSizes::new();
    let Some(root) = node else {
        return sizes;
    };

    post_order(root, |node, total| {
        if node.is_folder() {
            tracing::trace!(folder = %node.name, total, "recorded folder");
            if let Some(previous) = sizes.insert(node.name.clone(), total) {
                tracing::debug!(
                    folder = %node.name,
                    previous,
                    total,
                    "duplicate folder name replaced earlier entry"
                );
            }
        }
    });

    tracing::debug!(root = %root.name, folders = sizes.len(), "computed folder sizes");
    sizes
}
