//! Core types for sizetree.
//!
//! This crate provides the in-memory [`Node`] tree that the traversal engine
//! in `sizetree-analyze` operates on, along with the error type, report
//! configuration and helpers for loading a tree from JSON.

mod config;
mod error;
pub mod load;
mod node;

pub use config::{FolderOrder, ReportConfig, ReportConfigBuilder};
pub use error::TreeError;
pub use node::Node;
