//! Report configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::TreeError;

/// Ordering for folder entries when a report is rendered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FolderOrder {
    /// The order folders finished during the post-order walk.
    #[default]
    PostOrder,
    /// Largest total size first.
    SizeDesc,
    /// Alphabetical by name.
    Name,
}

/// Configuration for rendering a tree report.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(
    setter(into),
    build_fn(validate = "Self::validate", error = "TreeError")
)]
pub struct ReportConfig {
    /// Render sizes in binary units (KiB, MiB, ...) instead of raw numbers.
    #[builder(default = "false")]
    #[serde(default)]
    pub human_readable: bool,

    /// Ordering of folder entries.
    #[builder(default)]
    #[serde(default)]
    pub folder_order: FolderOrder,

    /// Maximum number of levels to show (None = all).
    #[builder(default)]
    #[serde(default)]
    pub max_levels: Option<usize>,
}

impl ReportConfigBuilder {
    fn validate(&self) -> Result<(), TreeError> {
        if let Some(Some(0)) = self.max_levels {
            return Err(TreeError::InvalidConfig {
                message: "max_levels must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl ReportConfig {
    /// Create a new report config builder.
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }

    /// Format a size according to this config.
    pub fn format_size(&self, size: u64) -> String {
        if self.human_readable {
            humansize::format_size(size, humansize::BINARY)
        } else {
            size.to_string()
        }
    }

    /// Truncate a list of levels to `max_levels`.
    pub fn visible_levels<'a, T>(&self, levels: &'a [T]) -> &'a [T] {
        match self.max_levels {
            Some(max) if max < levels.len() => &levels[..max],
            _ => levels,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            human_readable: false,
            folder_order: FolderOrder::PostOrder,
            max_levels: None,
        }
    }
}
