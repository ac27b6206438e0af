//! JSON tree format
//!
//! Human-readable serde representation of [`SdfTree`]. File I/O streams
//! through `BufWriter` / `BufReader` instead of building a `String`.

use super::{check_version, IoError};
use crate::types::SdfTree;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Save an SDF tree as pretty-printed JSON
pub fn save_json(tree: &SdfTree, path: impl AsRef<Path>) -> Result<(), IoError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, tree)
        .map_err(|e| IoError::Serialization(e.to_string()))?;
    writer.flush()?;

    debug!(path = %path.display(), nodes = tree.node_count(), "Saved tree");
    Ok(())
}

/// Load an SDF tree from JSON, checking its version
pub fn load_json(path: impl AsRef<Path>) -> Result<SdfTree, IoError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let tree: SdfTree =
        serde_json::from_reader(reader).map_err(|e| IoError::Serialization(e.to_string()))?;
    check_version(&tree)?;

    debug!(path = %path.display(), nodes = tree.node_count(), "Loaded tree");
    Ok(tree)
}

/// Serialize an SDF tree to a JSON string
pub fn to_json_string(tree: &SdfTree) -> Result<String, IoError> {
    serde_json::to_string_pretty(tree).map_err(|e| IoError::Serialization(e.to_string()))
}

/// Parse an SDF tree from a JSON string, checking its version
pub fn from_json_string(json: &str) -> Result<SdfTree, IoError> {
    let tree: SdfTree =
        serde_json::from_str(json).map_err(|e| IoError::Serialization(e.to_string()))?;
    check_version(&tree)?;
    Ok(tree)
}
