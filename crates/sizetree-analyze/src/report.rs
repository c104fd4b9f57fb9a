//! Combined report over a tree.

use compact_str::CompactString;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use sizetree_core::{FolderOrder, Node, ReportConfig};

use crate::folders::{FolderSizes, folder_sizes};
use crate::levels::{Levels, level_order};
use crate::walk::post_order;

/// Summary of a tree: totals, counts, folder sizes and levels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeReport {
    /// Total size of the root (0 when absent).
    pub total_size: u64,
    /// Number of nodes in the tree.
    pub node_count: usize,
    /// Number of childless nodes.
    pub file_count: usize,
    /// Number of nodes with children.
    pub folder_count: usize,
    /// Number of levels.
    pub depth: usize,
    /// Folder name to total size.
    pub folders: FolderSizes,
    /// Node names per depth.
    pub levels: Levels,
}

impl TreeReport {
    /// Build a report for a tree, or an empty report for an absent one.
    pub fn build(node: Option<&Node>) -> Self {
        let Some(root) = node else {
            return Self::default();
        };

        let mut file_count = 0;
        let mut folder_count = 0;
        let total_size = post_order(root, |node, _| {
            if node.is_folder() {
                folder_count += 1;
            } else {
                file_count += 1;
            }
        });
        let levels = level_order(node);

        let report = Self {
            total_size,
            node_count: file_count + folder_count,
            file_count,
            folder_count,
            depth: levels.len(),
            folders: folder_sizes(node),
            levels,
        };

        tracing::debug!(
            root = %root.name,
            nodes = report.node_count,
            total = report.total_size,
            "built tree report"
        );
        report
    }

    /// Check if the report describes an absent tree.
    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Folder entries in the requested order.
    pub fn folders_sorted(&self, order: FolderOrder) -> Vec<(&CompactString, u64)> {
        let entries = self.folders.iter().map(|(name, size)| (name, *size));
        match order {
            FolderOrder::PostOrder => entries.collect(),
            FolderOrder::SizeDesc => entries
                .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
                .collect(),
            FolderOrder::Name => entries.sorted_by(|a, b| a.0.cmp(b.0)).collect(),
        }
    }

    /// Copy of the report with folders in `config.folder_order` and levels
    /// cut to `config.max_levels`. Counts and `depth` describe the whole tree.
    pub fn arranged(&self, config: &ReportConfig) -> Self {
        let folders = self
            .folders_sorted(config.folder_order)
            .into_iter()
            .map(|(name, size)| (name.clone(), size))
            .collect();

        Self {
            folders,
            levels: config.visible_levels(&self.levels).to_vec(),
            ..self.clone()
        }
    }
}
