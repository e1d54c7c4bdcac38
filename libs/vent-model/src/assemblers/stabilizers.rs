//! Stabilizer stripes running across the airflow stripes.

use config::constants::GlobalConfig;
use tracing::debug;
use vent_csg::{distribute, primitives, Solid};

use super::{footprint_cylinder, resolve_fragments, Part};
use crate::error::{Component, InComponent, VentResult, Warning};
use crate::params::ParameterSet;

/// Bars along X at symmetric Y offsets, starting at
/// `stripe_thickness - stabilizer_overlap`, clipped to the cone footprint.
///
/// The clipping disc reaches from z=0 past the higher of the grid and the
/// bars. A zero count omits the component with a degenerate distribution
/// warning; a zero width or height omits it too.
///
/// # Errors
///
/// `VentError::Geometry` when a bar or the footprint cannot be built.
pub fn stabilizer_stripes(params: &ParameterSet, config: &GlobalConfig) -> VentResult<Part> {
    let Some(spacing) = params.stabilizer_spacing() else {
        return Ok(Part {
            component: Component::Stabilizers,
            solid: Solid::Empty,
            warnings: vec![Warning::DegenerateDistribution {
                component: Component::Stabilizers,
                parameter: "stabilizer_count",
            }],
        });
    };
    if params.stabilizer_width == 0.0 {
        return Ok(Part::omitted(Component::Stabilizers, "stabilizer_width"));
    }
    if params.stabilizer_height == 0.0 {
        return Ok(Part::omitted(Component::Stabilizers, "stabilizer_height"));
    }

    let radius = params.cone_radii().outer_bottom;
    let base = params.stabilizer_base();
    let width = params.stabilizer_width;
    let bar = primitives::cuboid([2.0 * radius, width, params.stabilizer_height], false)
        .in_component(Component::Stabilizers)?;

    let bars = distribute::distribute_symmetric(params.stabilizer_count, spacing, |y| {
        bar.clone().translate([-radius, y - width / 2.0, base])
    });

    let top = (base + params.stabilizer_height).max(params.stripe_thickness)
        + config.boolean_epsilon;
    let footprint = footprint_cylinder(radius, top, resolve_fragments(params, config))
        .in_component(Component::Stabilizers)?;

    debug!(
        count = params.stabilizer_count,
        spacing, base, "assembled stabilizer stripes"
    );
    Ok(Part::new(
        Component::Stabilizers,
        Solid::intersection([bars, footprint]),
    ))
}
