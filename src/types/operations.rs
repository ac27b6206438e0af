//! Boolean and blending operations for SdfNode
//!
//! Every combinator takes its operands as `impl Into<SdfRef>`, so both owned
//! nodes and shared handles can be passed.

use super::{NodeKind, SdfNode, SdfRef};

impl SdfNode {
    // === Operation methods ===

    /// Union with another shape
    #[inline]
    pub fn union(self, other: impl Into<SdfRef>) -> Self {
        SdfNode::union_of(self, other)
    }

    /// Intersection with another shape
    #[inline]
    pub fn intersection(self, other: impl Into<SdfRef>) -> Self {
        SdfNode::intersection_of(self, other)
    }

    /// Subtract another shape from this one
    #[inline]
    pub fn subtract(self, other: impl Into<SdfRef>) -> Self {
        SdfNode::substraction_of(self, other)
    }

    /// Symmetric difference with another shape
    #[inline]
    pub fn xor(self, other: impl Into<SdfRef>) -> Self {
        SdfNode::xor_of(self, other)
    }

    /// Smooth union with another shape
    #[inline]
    pub fn smooth_union(self, other: impl Into<SdfRef>, k: f32) -> Self {
        SdfNode::new(NodeKind::SmoothUnion {
            a: self.into_ref(),
            b: other.into(),
            k,
        })
    }

    /// Smooth intersection with another shape
    #[inline]
    pub fn smooth_intersection(self, other: impl Into<SdfRef>, k: f32) -> Self {
        SdfNode::new(NodeKind::SmoothIntersection {
            a: self.into_ref(),
            b: other.into(),
            k,
        })
    }

    /// Smooth subtraction of another shape
    #[inline]
    pub fn smooth_subtract(self, other: impl Into<SdfRef>, k: f32) -> Self {
        SdfNode::new(NodeKind::SmoothSubstraction {
            a: self.into_ref(),
            b: other.into(),
            k,
        })
    }

    // === Two-operand factories ===

    /// Union of two nodes or shared handles
    #[inline]
    pub fn union_of(a: impl Into<SdfRef>, b: impl Into<SdfRef>) -> Self {
        SdfNode::new(NodeKind::Union {
            a: a.into(),
            b: b.into(),
        })
    }

    /// Intersection of two nodes or shared handles
    #[inline]
    pub fn intersection_of(a: impl Into<SdfRef>, b: impl Into<SdfRef>) -> Self {
        SdfNode::new(NodeKind::Intersection {
            a: a.into(),
            b: b.into(),
        })
    }

    /// `a` minus `b`
    #[inline]
    pub fn substraction_of(a: impl Into<SdfRef>, b: impl Into<SdfRef>) -> Self {
        SdfNode::new(NodeKind::Substraction {
            a: a.into(),
            b: b.into(),
        })
    }

    /// Symmetric difference of two nodes or shared handles
    #[inline]
    pub fn xor_of(a: impl Into<SdfRef>, b: impl Into<SdfRef>) -> Self {
        SdfNode::new(NodeKind::Xor {
            a: a.into(),
            b: b.into(),
        })
    }
}
