//! Evaluation root wrapper

use super::{default_lambda, Aabb, IntersectMethod, SdfNode, SdfRef, SdfType};
use crate::error::{SdfError, SdfResult};
use crate::eval::{EvalCounter, ScalarField};
use crate::mesh::{self, marching_cubes, marching_cubes_counted, MarchingCubesConfig, Mesh};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// SDF Tree - top-level container
///
/// Holds an optional root node (an empty tree has nothing to render) that
/// can be swapped while editing. Evaluates to `+inf` when empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdfTree {
    /// Format version string
    pub version: String,
    /// Root node
    pub root: Option<SdfRef>,
    /// Lipschitz factor used by [`SdfTree::intersect`]
    #[serde(default = "default_lambda")]
    pub lambda: f32,
    /// Ray intersection strategy
    #[serde(default)]
    pub intersect_method: IntersectMethod,
}

impl Default for SdfTree {
    fn default() -> Self {
        SdfTree::empty()
    }
}

impl SdfTree {
    /// Create a new SDF tree
    pub fn new(root: impl Into<SdfRef>) -> Self {
        SdfTree {
            root: Some(root.into()),
            ..SdfTree::empty()
        }
    }

    /// Create a tree without a root
    pub fn empty() -> Self {
        SdfTree {
            version: crate::VERSION.to_string(),
            root: None,
            lambda: default_lambda(),
            intersect_method: IntersectMethod::default(),
        }
    }

    /// Root node, if any
    #[inline]
    pub fn root(&self) -> Option<&SdfRef> {
        self.root.as_ref()
    }

    /// Replace the root node
    pub fn set_root(&mut self, root: impl Into<SdfRef>) {
        self.root = Some(root.into());
    }

    /// Detach and return the root, leaving the tree empty
    pub fn take_root(&mut self) -> Option<SdfRef> {
        self.root.take()
    }

    /// Mutable access to the root, cloning it first if it is shared
    pub fn root_mut(&mut self) -> Option<&mut SdfNode> {
        self.root.as_mut().map(Arc::make_mut)
    }

    /// True when there is no root
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Get total node count
    pub fn node_count(&self) -> u32 {
        self.root.as_ref().map_or(0, |root| root.node_count())
    }

    /// Pre-order listing of the root's node types
    pub fn tree_type(&self) -> Vec<SdfType> {
        self.root
            .as_ref()
            .map_or_else(Vec::new, |root| root.tree_type())
    }

    /// Discriminator of the tree itself
    #[inline]
    pub fn sdf_type(&self) -> SdfType {
        SdfType::Tree
    }

    /// Refine the zero crossing between `a` and `b` on this tree's field
    ///
    /// See [`mesh::dichotomy`].
    pub fn dichotomy(&self, a: Vec3, b: Vec3, va: f32, vb: f32, length: f32) -> Vec3 {
        mesh::dichotomy(self, a, b, va, vb, length, mesh::DICHOTOMY_EPSILON)
    }

    /// Polygonize on a `resolution³` lattice spanning `bounds`
    ///
    /// An empty tree or a resolution below 2 yields an empty mesh; use
    /// [`SdfTree::try_polygonize`] to have those reported as errors.
    pub fn polygonize(&self, resolution: u32, bounds: &Aabb) -> Mesh {
        self.polygonize_with(bounds, &MarchingCubesConfig::with_resolution(resolution))
    }

    /// Polygonize with explicit marching-cubes settings
    pub fn polygonize_with(&self, bounds: &Aabb, config: &MarchingCubesConfig) -> Mesh {
        match &self.root {
            Some(root) => marching_cubes(root.as_ref(), bounds, config),
            None => {
                warn!("Polygonizing an empty tree");
                Mesh::default()
            }
        }
    }

    /// Polygonize, counting every node evaluation in `counter`
    pub fn polygonize_counted(
        &self,
        resolution: u32,
        bounds: &Aabb,
        counter: &EvalCounter,
    ) -> Mesh {
        let config = MarchingCubesConfig::with_resolution(resolution);
        match &self.root {
            Some(root) => marching_cubes_counted(root.as_ref(), bounds, &config, counter),
            None => {
                warn!("Polygonizing an empty tree");
                Mesh::default()
            }
        }
    }

    /// Polygonize, rejecting an empty tree or a resolution below 2
    pub fn try_polygonize(&self, resolution: u32, bounds: &Aabb) -> SdfResult<Mesh> {
        if self.is_empty() {
            return Err(SdfError::EmptyTree);
        }
        SdfError::check_resolution(resolution as usize, 2)?;
        Ok(self.polygonize(resolution, bounds))
    }
}

impl ScalarField for SdfTree {
    #[inline]
    fn value_with(&self, point: Vec3, counter: Option<&EvalCounter>) -> f32 {
        self.root
            .as_ref()
            .map_or(f32::INFINITY, |root| root.value_with(point, counter))
    }
}
