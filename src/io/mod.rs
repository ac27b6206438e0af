//! File I/O for SDF trees
//!
//! Trees persist as JSON (`.json`, conventionally `.sdf.json`). Each file
//! carries the writing crate's version; files from another major version
//! are rejected on load.

mod json;

pub use json::{from_json_string, load_json, save_json, to_json_string};

use crate::types::SdfTree;
use std::path::Path;
use thiserror::Error;

/// File I/O errors
#[derive(Error, Debug)]
pub enum IoError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid file format
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Unsupported file version
    #[error("Unsupported version: {0}")]
    UnsupportedVersion(String),
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Save an SDF tree to file (format from extension)
///
/// # Arguments
/// * `tree` - The SDF tree to save
/// * `path` - File path (.json)
pub fn save(tree: &SdfTree, path: impl AsRef<Path>) -> Result<(), IoError> {
    let path = path.as_ref();
    if is_json(path) {
        save_json(tree, path)
    } else {
        Err(IoError::InvalidFormat(format!(
            "unknown file extension for {}, use .json",
            path.display()
        )))
    }
}

/// Load an SDF tree from file (format from extension)
pub fn load(path: impl AsRef<Path>) -> Result<SdfTree, IoError> {
    let path = path.as_ref();
    if is_json(path) {
        load_json(path)
    } else {
        Err(IoError::InvalidFormat(format!(
            "unknown file extension for {}, use .json",
            path.display()
        )))
    }
}

/// Get file info without keeping the tree
///
/// # Returns
/// Multi-line summary: format, version, node count and pre-order types
pub fn get_info(path: impl AsRef<Path>) -> Result<String, IoError> {
    let tree = load(path)?;
    let types: Vec<&str> = tree.tree_type().iter().map(|t| t.as_str()).collect();
    Ok(format!(
        "Format: SDF JSON\nVersion: {}\nNode count: {}\nTypes: {}",
        tree.version,
        tree.node_count(),
        types.join(" ")
    ))
}

/// Reject trees written by another major version
pub(crate) fn check_version(tree: &SdfTree) -> Result<(), IoError> {
    let major = |v: &str| v.split('.').next().map(str::to_owned);
    if major(&tree.version) != major(crate::VERSION) {
        return Err(IoError::UnsupportedVersion(tree.version.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SdfNode;
    use glam::Vec3;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("sdf_sculpt_io_{}", name))
    }

    #[test]
    fn test_save_load_by_extension() {
        let tree = SdfTree::new(SdfNode::torus(1.0, 0.25).rotate_x(0.5));
        let path = temp_path("dispatch.sdf.json");
        save(&tree, &path).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded.tree_type(), tree.tree_type());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_unknown_extension() {
        let tree = SdfTree::new(SdfNode::sphere(Vec3::ZERO, 1.0));
        assert!(matches!(
            save(&tree, temp_path("tree.bin")),
            Err(IoError::InvalidFormat(_))
        ));
        assert!(matches!(
            load(temp_path("tree.bin")),
            Err(IoError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load(temp_path("missing.json")),
            Err(IoError::Io(_))
        ));
    }

    #[test]
    fn test_get_info() {
        let tree = SdfTree::new(SdfNode::sphere(Vec3::ZERO, 1.0).union(SdfNode::plane(Vec3::Y, 0.0)));
        let path = temp_path("info.json");
        save(&tree, &path).unwrap();
        let info = get_info(&path).unwrap();
        assert!(info.contains("Node count: 3"));
        assert!(info.contains("BINARY_OPERATOR_UNION PRIMITIVE_SPHERE PRIMITIVE_PLANE"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_version_check() {
        let mut tree = SdfTree::empty();
        assert!(check_version(&tree).is_ok());
        tree.version = "99.0.0".to_string();
        assert!(matches!(
            check_version(&tree),
            Err(IoError::UnsupportedVersion(v)) if v == "99.0.0"
        ));
    }
}
