//! Transform and unary-operator builders for SdfNode

use glam::Vec3;

use super::{NodeKind, SdfNode};

impl SdfNode {
    // === Transform methods ===

    /// Translate by offset
    #[inline]
    pub fn translate(self, offset: Vec3) -> Self {
        SdfNode::new(NodeKind::Translation {
            child: self.into_ref(),
            offset,
        })
    }

    /// Rotate around an arbitrary axis (radians)
    #[inline]
    pub fn rotate(self, axis: Vec3, angle: f32) -> Self {
        SdfNode::new(NodeKind::Rotation {
            child: self.into_ref(),
            axis,
            angle,
        })
    }

    /// Rotate around the X axis (radians)
    #[inline]
    pub fn rotate_x(self, angle: f32) -> Self {
        SdfNode::new(NodeKind::RotationX {
            child: self.into_ref(),
            angle,
        })
    }

    /// Rotate around the Y axis (radians)
    #[inline]
    pub fn rotate_y(self, angle: f32) -> Self {
        SdfNode::new(NodeKind::RotationY {
            child: self.into_ref(),
            angle,
        })
    }

    /// Rotate around the Z axis (radians)
    #[inline]
    pub fn rotate_z(self, angle: f32) -> Self {
        SdfNode::new(NodeKind::RotationZ {
            child: self.into_ref(),
            angle,
        })
    }

    /// Uniform scale
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        SdfNode::new(NodeKind::Scale {
            child: self.into_ref(),
            factor,
        })
    }

    // === Unary operators ===

    /// Shell of the given thickness around the surface
    #[inline]
    pub fn hull(self, thickness: f32) -> Self {
        SdfNode::new(NodeKind::Hull {
            child: self.into_ref(),
            thickness,
        })
    }

    /// Inflate by a radius
    #[inline]
    pub fn round(self, radius: f32) -> Self {
        SdfNode::new(NodeKind::Rounding {
            child: self.into_ref(),
            radius,
        })
    }

    /// Stretch along each axis by inserting a slab of the given half extent
    #[inline]
    pub fn elongate(self, extent: Vec3) -> Self {
        SdfNode::new(NodeKind::Elongation {
            child: self.into_ref(),
            extent,
        })
    }

    /// Repeat infinitely with the given period per axis
    #[inline]
    pub fn repeat(self, period: Vec3) -> Self {
        SdfNode::new(NodeKind::Repetition {
            child: self.into_ref(),
            period,
        })
    }
}
