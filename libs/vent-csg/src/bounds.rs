//! # Bounding Boxes
//!
//! Conservative axis-aligned bounds of a [`Solid`] tree, computed from the
//! description alone without tessellating anything.
//!
//! Circles and cylinders are bounded by their full radius, so bounds are
//! exact for fragment counts divisible by four and slightly generous
//! otherwise. Differences are bounded by their base operand; rotations by
//! the rotated corners of the child box.

use glam::{DMat3, DVec3};

use crate::geometry::Solid;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: DVec3,
    /// Maximum corner of the bounding box.
    pub max: DVec3,
}

impl Aabb {
    /// Creates a box from two corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Extent along each axis.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Centre point.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Smallest box containing both.
    pub fn merge(&self, other: &Aabb) -> Aabb {
        Aabb::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Overlap of both boxes, or `None` when they are disjoint.
    pub fn intersect(&self, other: &Aabb) -> Option<Aabb> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        (min.cmple(max).all()).then_some(Aabb::new(min, max))
    }

    /// Whether `point` lies inside or on the boundary.
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    fn corners(&self) -> [DVec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            DVec3::new(a.x, a.y, a.z),
            DVec3::new(b.x, a.y, a.z),
            DVec3::new(a.x, b.y, a.z),
            DVec3::new(b.x, b.y, a.z),
            DVec3::new(a.x, a.y, b.z),
            DVec3::new(b.x, a.y, b.z),
            DVec3::new(a.x, b.y, b.z),
            DVec3::new(b.x, b.y, b.z),
        ]
    }

    fn transformed(&self, matrix: DMat3) -> Aabb {
        let corners = self.corners().map(|c| matrix * c);
        let mut out = Aabb::new(corners[0], corners[0]);
        for corner in &corners[1..] {
            out = out.merge(&Aabb::new(*corner, *corner));
        }
        out
    }
}

/// Rotation matrix for Euler angles in degrees, X applied first.
pub fn rotation_matrix(angles: [f64; 3]) -> DMat3 {
    let [x, y, z] = angles.map(f64::to_radians);
    DMat3::from_rotation_z(z) * DMat3::from_rotation_y(y) * DMat3::from_rotation_x(x)
}

impl Solid {
    /// Conservative bounding box, or `None` for empty geometry.
    ///
    /// Planar profiles report a zero-height box at z=0.
    pub fn bounds(&self) -> Option<Aabb> {
        match self {
            Solid::Cube { size, center } => {
                let size = DVec3::from_array(*size);
                let min = if *center { -size * 0.5 } else { DVec3::ZERO };
                Some(Aabb::new(min, min + size))
            }
            Solid::Cylinder {
                height,
                radius1,
                radius2,
                center,
                ..
            } => {
                let r = radius1.max(*radius2);
                let z0 = if *center { -height / 2.0 } else { 0.0 };
                Some(Aabb::new(
                    DVec3::new(-r, -r, z0),
                    DVec3::new(r, r, z0 + height),
                ))
            }
            Solid::Square { size, center } => {
                let (w, d) = (size[0], size[1]);
                let min = if *center {
                    DVec3::new(-w / 2.0, -d / 2.0, 0.0)
                } else {
                    DVec3::ZERO
                };
                Some(Aabb::new(min, min + DVec3::new(w, d, 0.0)))
            }
            Solid::Circle { radius, .. } => Some(Aabb::new(
                DVec3::new(-radius, -radius, 0.0),
                DVec3::new(*radius, *radius, 0.0),
            )),
            Solid::Translate { offset, child } => child.bounds().map(|b| {
                let offset = DVec3::from_array(*offset);
                Aabb::new(b.min + offset, b.max + offset)
            }),
            Solid::Rotate { angles, child } => child
                .bounds()
                .map(|b| b.transformed(rotation_matrix(*angles))),
            Solid::Union { children } | Solid::Hull { children } => children
                .iter()
                .filter_map(Solid::bounds)
                .reduce(|a, b| a.merge(&b)),
            Solid::Difference { children } => children.first().and_then(Solid::bounds),
            Solid::Intersection { children } => {
                let mut boxes = children.iter().map(Solid::bounds);
                let first = boxes.next()??;
                boxes.try_fold(first, |acc, b| acc.intersect(&b?))
            }
            Solid::LinearExtrude { height, child } => child.bounds().map(|b| {
                Aabb::new(
                    DVec3::new(b.min.x, b.min.y, 0.0),
                    DVec3::new(b.max.x, b.max.y, *height),
                )
            }),
            Solid::Offset { delta, child, .. } => child.bounds().and_then(|b| {
                let grow = DVec3::new(*delta, *delta, 0.0);
                let out = Aabb::new(b.min - grow, b.max + grow);
                (out.min.x <= out.max.x && out.min.y <= out.max.y).then_some(out)
            }),
            Solid::Empty => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
