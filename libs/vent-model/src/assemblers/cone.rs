//! Hollow tapered mounting cone with radial wedge slots.

use config::constants::{GlobalConfig, WEDGE_RADIAL_MARGIN};
use tracing::debug;
use vent_csg::{distribute, primitives, CsgResult, Solid};

use super::{resolve_fragments, Part};
use crate::error::{Component, InComponent, VentResult, Warning};
use crate::params::ParameterSet;

/// A truncated cone placed along the Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Height of the bottom face.
    pub z_bottom: f64,
    /// Extent along Z.
    pub height: f64,
    /// Radius at `z_bottom`.
    pub radius_bottom: f64,
    /// Radius at `z_bottom + height`.
    pub radius_top: f64,
}

impl Frustum {
    /// Radius at height `z`, linearly interpolated (or extrapolated).
    pub fn radius_at(&self, z: f64) -> f64 {
        let t = (z - self.z_bottom) / self.height;
        self.radius_bottom + (self.radius_top - self.radius_bottom) * t
    }

    /// Builds the frustum as a solid.
    ///
    /// # Errors
    ///
    /// Same as [`primitives::truncated_cone`].
    pub fn to_solid(&self, fragments: u32) -> CsgResult<Solid> {
        Ok(
            primitives::truncated_cone(self.height, self.radius_bottom, self.radius_top, fragments)?
                .translate([0.0, 0.0, self.z_bottom]),
        )
    }
}

/// Outer surface of the cone, z ∈ [0, cone_height].
pub fn outer_frustum(params: &ParameterSet) -> Frustum {
    let radii = params.cone_radii();
    Frustum {
        z_bottom: 0.0,
        height: params.cone_height,
        radius_bottom: radii.outer_bottom,
        radius_top: radii.outer_top,
    }
}

/// Inner cutter of the cone, overshooting both end faces by `epsilon`.
///
/// The radii are extrapolated along the wall's taper so the wall keeps its
/// exact thickness at z=0 and z=cone_height.
pub fn inner_frustum(params: &ParameterSet, epsilon: f64) -> Frustum {
    let radii = params.cone_radii();
    let slope = (radii.inner_top - radii.inner_bottom) / params.cone_height;
    Frustum {
        z_bottom: -epsilon,
        height: params.cone_height + 2.0 * epsilon,
        radius_bottom: (radii.inner_bottom - slope * epsilon).max(0.0),
        radius_top: (radii.inner_top + slope * epsilon).max(0.0),
    }
}

/// Outer cone minus inner cone minus the radially distributed slots.
///
/// A zero slot count, or two zero slot widths, leaves the cone unslotted
/// and records a warning.
///
/// # Errors
///
/// `VentError::Geometry` when a cone or slot cannot be built; a validated
/// parameter set never triggers it.
pub fn hollow_cone(params: &ParameterSet, config: &GlobalConfig) -> VentResult<Part> {
    let fragments = resolve_fragments(params, config);
    let outer = outer_frustum(params)
        .to_solid(fragments)
        .in_component(Component::HollowCone)?;
    let inner = inner_frustum(params, config.boolean_epsilon)
        .to_solid(fragments)
        .in_component(Component::HollowCone)?;

    let mut warnings = Vec::new();
    let slots = if params.slot_count == 0 {
        warnings.push(Warning::DegenerateDistribution {
            component: Component::HollowCone,
            parameter: "slot_count",
        });
        Solid::Empty
    } else if params.slot_width_bottom == 0.0 && params.slot_width_top == 0.0 {
        warnings.push(Warning::EmptyComponent {
            component: Component::HollowCone,
            parameter: "slot_width_top",
        });
        Solid::Empty
    } else {
        let depth = params.cone_radii().max_outer() + WEDGE_RADIAL_MARGIN;
        let wedge = primitives::wedge_slot(
            depth,
            params.slot_width_bottom,
            params.slot_width_top,
            params.cone_height,
        )
        .in_component(Component::HollowCone)?;
        debug!(count = params.slot_count, depth, "distributing cone slots");
        distribute::distribute_radially(&wedge, params.slot_count)
    };

    Ok(Part {
        component: Component::HollowCone,
        solid: outer.difference([inner, slots]),
        warnings,
    })
}
