//! Error types for loading trees and building configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur outside the traversal functions themselves.
///
/// Traversals are total over `Option<&Node>` and never fail; these errors
/// come from reading a serialized tree or from invalid configuration.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Input file not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input was not a valid serialized tree.
    #[error("Invalid tree document: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl TreeError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

impl From<derive_builder::UninitializedFieldError> for TreeError {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Self::InvalidConfig {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_error_io_not_found() {
        let err = TreeError::io(
            "/missing/tree.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, TreeError::NotFound { .. }));
        assert!(err.to_string().contains("/missing/tree.json"));
    }

    #[test]
    fn test_tree_error_io_other() {
        let err = TreeError::io(
            "/tree.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, TreeError::Io { .. }));
    }
}
