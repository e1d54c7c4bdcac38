//! # Vent CSG
//!
//! Immutable solid tree and construction vocabulary for the vent cover
//! pipeline.
//!
//! ## Architecture
//!
//! ```text
//! primitives / distribute → Solid tree → GeometryKernel (external) → mesh
//!                                      ↘ printer (OpenSCAD source)
//! ```
//!
//! Nothing in this crate evaluates a boolean or produces a mesh. A [`Solid`]
//! is a description; realizing it is the job of whatever implements
//! [`GeometryKernel`].
//!
//! ## Example
//!
//! ```rust
//! use vent_csg::{primitives, Solid};
//!
//! let plate = primitives::filleted_rectangle_outline(120.0, 80.0, 5.0, 64)
//!     .unwrap()
//!     .linear_extrude(2.0);
//! let hole = primitives::truncated_cone(2.0, 10.0, 10.0, 64).unwrap();
//! let part = plate.difference([hole]);
//! assert!(matches!(part, Solid::Difference { .. }));
//! ```

pub mod bounds;
pub mod distribute;
pub mod error;
pub mod geometry;
pub mod kernel;
pub mod primitives;
pub mod printer;

// Re-export public API
pub use bounds::Aabb;
pub use error::{CsgError, CsgResult};
pub use geometry::Solid;
pub use kernel::{realize, GeometryKernel};
pub use printer::to_scad;
