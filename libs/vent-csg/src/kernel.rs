//! # Geometry Kernel Seam
//!
//! The operations the construction pipeline needs from an external CSG
//! kernel, and the tree walk that drives them.
//!
//! ## Required Operations
//!
//! - 2D: `square`, `circle`, round `offset`
//! - 3D: `cube`, `cylinder` (truncated cone), `linear_extrude`
//! - transforms: `translate`, `rotate`
//! - booleans: `union`, `difference`, `intersection`, plus `hull`
//!
//! ## Example
//!
//! ```rust,ignore
//! let mesh = vent_csg::realize(&solid, &my_kernel)?;
//! ```

use crate::geometry::Solid;

/// A CSG backend able to evaluate a [`Solid`] tree.
///
/// Operands are handed over by value; the kernel owns them for the duration
/// of the call.
pub trait GeometryKernel {
    /// Kernel-side representation of evaluated geometry.
    type Shape;
    /// Failure reported by the kernel.
    type Error: std::fmt::Display;

    /// Geometry containing nothing.
    fn empty(&self) -> Result<Self::Shape, Self::Error>;

    /// Rectangle in the XY plane.
    fn square(&self, size: [f64; 2], center: bool) -> Result<Self::Shape, Self::Error>;

    /// Circle in the XY plane approximated by `fragments` segments.
    fn circle(&self, radius: f64, fragments: u32) -> Result<Self::Shape, Self::Error>;

    /// Axis-aligned box.
    fn cube(&self, size: [f64; 3], center: bool) -> Result<Self::Shape, Self::Error>;

    /// Truncated cone along +Z.
    fn cylinder(
        &self,
        height: f64,
        radius_bottom: f64,
        radius_top: f64,
        center: bool,
        fragments: u32,
    ) -> Result<Self::Shape, Self::Error>;

    /// Round offset of a planar shape.
    fn offset(
        &self,
        shape: Self::Shape,
        delta: f64,
        fragments: u32,
    ) -> Result<Self::Shape, Self::Error>;

    /// Extrusion of a planar shape from z=0 to z=height.
    fn linear_extrude(&self, shape: Self::Shape, height: f64) -> Result<Self::Shape, Self::Error>;

    /// Translation.
    fn translate(&self, shape: Self::Shape, offset: [f64; 3]) -> Result<Self::Shape, Self::Error>;

    /// Rotation by Euler angles in degrees, X first.
    fn rotate(&self, shape: Self::Shape, angles: [f64; 3]) -> Result<Self::Shape, Self::Error>;

    /// Union.
    fn union(&self, shapes: Vec<Self::Shape>) -> Result<Self::Shape, Self::Error>;

    /// `base` minus every cutter.
    fn difference(
        &self,
        base: Self::Shape,
        cutters: Vec<Self::Shape>,
    ) -> Result<Self::Shape, Self::Error>;

    /// Intersection.
    fn intersection(&self, shapes: Vec<Self::Shape>) -> Result<Self::Shape, Self::Error>;

    /// Convex hull.
    fn hull(&self, shapes: Vec<Self::Shape>) -> Result<Self::Shape, Self::Error>;
}

/// Evaluates `solid` bottom-up through `kernel`.
///
/// # Errors
///
/// The first error returned by the kernel, unchanged.
pub fn realize<K>(solid: &Solid, kernel: &K) -> Result<K::Shape, K::Error>
where
    K: GeometryKernel + ?Sized,
{
    let all = |children: &[Solid]| -> Result<Vec<K::Shape>, K::Error> {
        children.iter().map(|c| realize(c, kernel)).collect()
    };

    match solid {
        Solid::Cube { size, center } => kernel.cube(*size, *center),
        Solid::Cylinder {
            height,
            radius1,
            radius2,
            center,
            fn_,
        } => kernel.cylinder(*height, *radius1, *radius2, *center, *fn_),
        Solid::Square { size, center } => kernel.square(*size, *center),
        Solid::Circle { radius, fn_ } => kernel.circle(*radius, *fn_),
        Solid::Translate { offset, child } => kernel.translate(realize(child, kernel)?, *offset),
        Solid::Rotate { angles, child } => kernel.rotate(realize(child, kernel)?, *angles),
        Solid::LinearExtrude { height, child } => {
            kernel.linear_extrude(realize(child, kernel)?, *height)
        }
        Solid::Offset { delta, fn_, child } => kernel.offset(realize(child, kernel)?, *delta, *fn_),
        Solid::Union { children } => kernel.union(all(children)?),
        Solid::Intersection { children } => kernel.intersection(all(children)?),
        Solid::Hull { children } => kernel.hull(all(children)?),
        Solid::Difference { children } => match children.split_first() {
            Some((base, cutters)) => kernel.difference(realize(base, kernel)?, all(cutters)?),
            None => kernel.empty(),
        },
        Solid::Empty => kernel.empty(),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Kernel that renders each call as a compact expression.
    struct TraceKernel;

    impl GeometryKernel for TraceKernel {
        type Shape = String;
        type Error = String;

        fn empty(&self) -> Result<String, String> {
            Ok("empty".into())
        }
        fn square(&self, size: [f64; 2], _: bool) -> Result<String, String> {
            Ok(format!("sq{}x{}", size[0], size[1]))
        }
        fn circle(&self, radius: f64, _: u32) -> Result<String, String> {
            Ok(format!("ci{radius}"))
        }
        fn cube(&self, size: [f64; 3], _: bool) -> Result<String, String> {
            Ok(format!("cu{}", size[0]))
        }
        fn cylinder(&self, h: f64, r1: f64, r2: f64, _: bool, _: u32) -> Result<String, String> {
            Ok(format!("cy{h}/{r1}/{r2}"))
        }
        fn offset(&self, s: String, d: f64, _: u32) -> Result<String, String> {
            Ok(format!("off{d}({s})"))
        }
        fn linear_extrude(&self, s: String, h: f64) -> Result<String, String> {
            Ok(format!("ext{h}({s})"))
        }
        fn translate(&self, s: String, o: [f64; 3]) -> Result<String, String> {
            Ok(format!("t{}({s})", o[0]))
        }
        fn rotate(&self, s: String, a: [f64; 3]) -> Result<String, String> {
            Ok(format!("r{}({s})", a[2]))
        }
        fn union(&self, v: Vec<String>) -> Result<String, String> {
            Ok(format!("u({})", v.join(",")))
        }
        fn difference(&self, b: String, v: Vec<String>) -> Result<String, String> {
            Ok(format!("d({b}-{})", v.join(",")))
        }
        fn intersection(&self, v: Vec<String>) -> Result<String, String> {
            Ok(format!("i({})", v.join(",")))
        }
        fn hull(&self, _: Vec<String>) -> Result<String, String> {
            Err("hull unsupported".into())
        }
    }

    fn cube(edge: f64) -> Solid {
        Solid::Cube {
            size: [edge; 3],
            center: false,
        }
    }

    #[test]
    fn test_realize_walks_bottom_up() {
        let tree = cube(3.0).difference([cube(1.0).translate([1.0, 0.0, 0.0])]);
        assert_eq!(realize(&tree, &TraceKernel), Ok("d(cu3-t1(cu1))".to_string()));
    }

    #[test]
    fn test_realize_extrude_and_offset() {
        let tree = Solid::Square {
            size: [2.0, 4.0],
            center: true,
        }
        .offset(1.0, 8)
        .linear_extrude(5.0);
        assert_eq!(realize(&tree, &TraceKernel), Ok("ext5(off1(sq2x4))".to_string()));
    }

    #[test]
    fn test_realize_propagates_kernel_error() {
        let tree = Solid::union([cube(1.0), Solid::hull([cube(1.0), cube(2.0)])]);
        assert_eq!(realize(&tree, &TraceKernel), Err("hull unsupported".to_string()));
    }

    #[test]
    fn test_realize_empty() {
        assert_eq!(realize(&Solid::Empty, &TraceKernel), Ok("empty".to_string()));
    }
}
