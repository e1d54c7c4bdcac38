//! # Solid Tree
//!
//! The immutable geometry description produced by the construction pipeline.
//!
//! Every value is fully resolved: sizes are concrete numbers and fragment
//! counts are already clamped. Combinators consume their operands and return
//! a new node; nothing is ever mutated in place.

use serde::{Deserialize, Serialize};

// =============================================================================
// SOLID
// =============================================================================

/// A node in the geometry tree.
///
/// Planar variants (`Square`, `Circle`, `Offset`) describe profiles that only
/// become volumes under [`Solid::LinearExtrude`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Solid {
    // =========================================================================
    // 3D PRIMITIVES
    // =========================================================================

    /// Axis-aligned box.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cube([x, y, z], center=true);
    /// ```
    Cube {
        /// Size as [x, y, z].
        size: [f64; 3],
        /// Whether centered at origin.
        center: bool,
    },

    /// Cylinder or truncated cone along +Z.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cylinder(h=10, r1=5, r2=3, $fn=64);
    /// ```
    Cylinder {
        /// Height.
        height: f64,
        /// Radius at the bottom face.
        radius1: f64,
        /// Radius at the top face.
        radius2: f64,
        /// Whether centered along Z.
        center: bool,
        /// Number of fragments.
        fn_: u32,
    },

    // =========================================================================
    // 2D PRIMITIVES
    // =========================================================================

    /// Rectangle in the XY plane.
    Square {
        /// Size as [x, y].
        size: [f64; 2],
        /// Whether centered.
        center: bool,
    },

    /// Circle in the XY plane.
    Circle {
        /// Radius.
        radius: f64,
        /// Number of fragments.
        fn_: u32,
    },

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Translation transform.
    Translate {
        /// Translation vector [x, y, z].
        offset: [f64; 3],
        /// Child geometry.
        child: Box<Solid>,
    },

    /// Rotation transform, applied about X, then Y, then Z.
    Rotate {
        /// Rotation angles [x, y, z] in degrees.
        angles: [f64; 3],
        /// Child geometry.
        child: Box<Solid>,
    },

    // =========================================================================
    // BOOLEAN OPERATIONS
    // =========================================================================

    /// Union of children.
    Union {
        /// Child geometries.
        children: Vec<Solid>,
    },

    /// Difference (first child minus rest).
    Difference {
        /// Child geometries.
        children: Vec<Solid>,
    },

    /// Intersection of children.
    Intersection {
        /// Child geometries.
        children: Vec<Solid>,
    },

    /// Convex hull of children.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// hull() {
    ///   cube([1, 4, 0.1]);
    ///   translate([0, 0, 20]) cube([1, 6, 0.1]);
    /// }
    /// ```
    Hull {
        /// Child geometries to hull.
        children: Vec<Solid>,
    },

    // =========================================================================
    // 2D OPERATIONS
    // =========================================================================

    /// Linear extrusion of a planar profile from z=0 to z=height.
    LinearExtrude {
        /// Extrusion height.
        height: f64,
        /// Child 2D geometry.
        child: Box<Solid>,
    },

    /// Round 2D offset (positive grows, negative shrinks).
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// offset(r = 5, $fn = 64) square([110, 70], center=true);
    /// ```
    Offset {
        /// Offset amount.
        delta: f64,
        /// Number of fragments used for rounded corners.
        fn_: u32,
        /// Child 2D geometry to offset.
        child: Box<Solid>,
    },

    // =========================================================================
    // META
    // =========================================================================

    /// Empty geometry.
    Empty,
}

impl Solid {
    // =========================================================================
    // COMBINATORS
    // =========================================================================

    /// Union of all non-empty operands.
    ///
    /// Zero operands give [`Solid::Empty`]; a single operand is returned as is.
    pub fn union(children: impl IntoIterator<Item = Solid>) -> Solid {
        let mut nodes: Vec<Solid> = children.into_iter().filter(|c| !c.is_empty()).collect();
        match nodes.len() {
            0 => Solid::Empty,
            1 => nodes.remove(0),
            _ => Solid::Union { children: nodes },
        }
    }

    /// Subtracts every non-empty cutter from `self`.
    pub fn difference(self, cutters: impl IntoIterator<Item = Solid>) -> Solid {
        if self.is_empty() {
            return Solid::Empty;
        }
        let mut children = vec![self];
        children.extend(cutters.into_iter().filter(|c| !c.is_empty()));
        if children.len() == 1 {
            children.remove(0)
        } else {
            Solid::Difference { children }
        }
    }

    /// Intersection of the operands.
    ///
    /// An empty operand makes the whole intersection empty.
    pub fn intersection(children: impl IntoIterator<Item = Solid>) -> Solid {
        let mut nodes: Vec<Solid> = children.into_iter().collect();
        if nodes.is_empty() || nodes.iter().any(Solid::is_empty) {
            return Solid::Empty;
        }
        if nodes.len() == 1 {
            nodes.remove(0)
        } else {
            Solid::Intersection { children: nodes }
        }
    }

    /// Convex hull of all non-empty operands.
    pub fn hull(children: impl IntoIterator<Item = Solid>) -> Solid {
        let mut nodes: Vec<Solid> = children.into_iter().filter(|c| !c.is_empty()).collect();
        match nodes.len() {
            0 => Solid::Empty,
            1 => nodes.remove(0),
            _ => Solid::Hull { children: nodes },
        }
    }

    /// Moves the solid by `offset`.
    pub fn translate(self, offset: [f64; 3]) -> Solid {
        if self.is_empty() {
            return Solid::Empty;
        }
        Solid::Translate {
            offset,
            child: Box::new(self),
        }
    }

    /// Rotates the solid by Euler angles in degrees.
    pub fn rotate(self, angles: [f64; 3]) -> Solid {
        if self.is_empty() {
            return Solid::Empty;
        }
        Solid::Rotate {
            angles,
            child: Box::new(self),
        }
    }

    /// Rotates the solid about the Z axis.
    pub fn rotate_z(self, degrees: f64) -> Solid {
        self.rotate([0.0, 0.0, degrees])
    }

    /// Extrudes a planar profile to `height`.
    pub fn linear_extrude(self, height: f64) -> Solid {
        if self.is_empty() {
            return Solid::Empty;
        }
        Solid::LinearExtrude {
            height,
            child: Box::new(self),
        }
    }

    /// Round offset of a planar profile.
    pub fn offset(self, delta: f64, fn_: u32) -> Solid {
        if self.is_empty() {
            return Solid::Empty;
        }
        Solid::Offset {
            delta,
            fn_,
            child: Box::new(self),
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Check if this is an empty node.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Check if this node describes a planar profile.
    pub fn is_2d(&self) -> bool {
        match self {
            Self::Square { .. } | Self::Circle { .. } | Self::Offset { .. } => true,
            Self::Translate { child, .. } | Self::Rotate { child, .. } => child.is_2d(),
            Self::Union { children }
            | Self::Difference { children }
            | Self::Intersection { children }
            | Self::Hull { children } => children.first().is_some_and(Solid::is_2d),
            _ => false,
        }
    }

    /// Direct children of this node.
    pub fn children(&self) -> &[Solid] {
        match self {
            Self::Translate { child, .. }
            | Self::Rotate { child, .. }
            | Self::LinearExtrude { child, .. }
            | Self::Offset { child, .. } => std::slice::from_ref(child.as_ref()),
            Self::Union { children }
            | Self::Difference { children }
            | Self::Intersection { children }
            | Self::Hull { children } => children,
            _ => &[],
        }
    }

    /// Total number of nodes in the tree, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Solid::node_count).sum::<usize>()
    }
}

// =============================================================================
// TESTS
// =============================================================================
