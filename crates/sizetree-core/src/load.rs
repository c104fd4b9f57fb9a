//! Loading a [`Node`] tree from JSON.
//!
//! The expected document is a nested object:
//!
//! ```json
//! {"name": "root", "size": 1, "children": [{"name": "a", "size": 2}]}
//! ```
//!
//! `size` defaults to 0 and `children` to empty when omitted.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::TreeError;
use crate::node::Node;

/// Read a tree from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<Node, TreeError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a tree from a JSON string.
pub fn from_str(json: &str) -> Result<Node, TreeError> {
    Ok(serde_json::from_str(json)?)
}

/// Read a tree from a JSON file.
pub fn from_path(path: impl AsRef<Path>) -> Result<Node, TreeError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| TreeError::io(path, e))?;
    from_reader(BufReader::new(file))
}
