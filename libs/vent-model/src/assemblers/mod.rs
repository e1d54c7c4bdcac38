//! # Component Assemblers
//!
//! Each assembler is a pure function of the parameter set producing one
//! named [`Part`]. All parts share the same frame: the plate's top face and
//! the cone's bottom face lie on z=0 and every part is centred on the Z axis.
//!
//! | assembler | component |
//! |-----------|-----------|
//! | [`plate_with_rim`] | plate, optional rim, cone hole |
//! | [`hollow_cone`] | tapered tube with radial slots |
//! | [`stripe_grid`] | sheared stripes clipped to the cone footprint |
//! | [`stabilizer_stripes`] | perpendicular stripes above the grid |

mod cone;
mod grid;
mod plate;
mod stabilizers;

pub use cone::{hollow_cone, inner_frustum, outer_frustum, Frustum};
pub use grid::stripe_grid;
pub use plate::{cone_hole, plate_with_rim};
pub use stabilizers::stabilizer_stripes;

use config::constants::{clamp_fragments, GlobalConfig};
use vent_csg::{primitives, CsgResult, Solid};

use crate::error::{Component, Warning};
use crate::params::ParameterSet;

/// One assembled component of the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    /// Which assembler produced it.
    pub component: Component,
    /// The geometry; [`Solid::Empty`] when the component was omitted.
    pub solid: Solid,
    /// Degenerate configurations met while assembling.
    pub warnings: Vec<Warning>,
}

impl Part {
    fn new(component: Component, solid: Solid) -> Self {
        Self {
            component,
            solid,
            warnings: Vec::new(),
        }
    }

    fn omitted(component: Component, parameter: &'static str) -> Self {
        Self {
            component,
            solid: Solid::Empty,
            warnings: vec![Warning::EmptyComponent {
                component,
                parameter,
            }],
        }
    }

    /// Whether the component contributes no geometry.
    pub fn is_omitted(&self) -> bool {
        self.solid.is_empty()
    }
}

/// Fragment count for circular primitives; 0 falls back to the config.
pub(crate) fn resolve_fragments(params: &ParameterSet, config: &GlobalConfig) -> u32 {
    match params.fragments {
        0 => config.default_fragments,
        n => clamp_fragments(n),
    }
}

/// Upright cylinder of `radius` covering z ∈ [0, height], used to clip the
/// grid layers to the cone's footprint.
pub(crate) fn footprint_cylinder(radius: f64, height: f64, fragments: u32) -> CsgResult<Solid> {
    primitives::truncated_cone(height, radius, radius, fragments)
}
