//! Error types for tree polygonization and parametric meshing.

use crate::io::IoError;
use thiserror::Error;

/// Result type for fallible crate operations.
pub type SdfResult<T> = Result<T, SdfError>;

/// Errors raised by the crate's fallible entry points.
///
/// The infallible entry points (`SdfTree::polygonize`, `intersect`) degrade
/// gracefully instead: empty mesh, `false`.
#[derive(Debug, Error)]
pub enum SdfError {
    /// The tree has no root node.
    #[error("tree has no root node")]
    EmptyTree,

    /// A lattice or parameter grid was requested with too few samples.
    #[error("invalid resolution {resolution}: at least {minimum} samples per axis are required")]
    InvalidResolution {
        /// Requested resolution.
        resolution: usize,
        /// Smallest accepted resolution.
        minimum: usize,
    },

    /// A curve or patch does not have enough control points to be meshed.
    #[error("not enough control points: got {got}, need more than {required}")]
    NotEnoughControlPoints {
        /// Number of control points supplied.
        got: usize,
        /// Exclusive lower bound.
        required: usize,
    },

    /// A control grid's point count does not match its dimensions.
    #[error("control grid {width}x{height} needs {count} points, got {len}", count = .width * .height)]
    InvalidGrid {
        /// Columns.
        width: usize,
        /// Rows.
        height: usize,
        /// Points supplied.
        len: usize,
    },

    /// Tree persistence failed.
    #[error(transparent)]
    Io(#[from] IoError),
}

impl SdfError {
    /// Check a resolution against a minimum sample count.
    pub fn check_resolution(resolution: usize, minimum: usize) -> SdfResult<()> {
        if resolution < minimum {
            return Err(SdfError::InvalidResolution { resolution, minimum });
        }
        Ok(())
    }
}
