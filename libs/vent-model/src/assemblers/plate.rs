//! Plate with optional rim and the hole the cone sits over.

use config::constants::GlobalConfig;
use tracing::debug;
use vent_csg::{primitives, Solid};

use super::{resolve_fragments, Part};
use crate::error::{Component, InComponent, VentResult};
use crate::params::ParameterSet;

/// Filleted plate below z=0, rim wall above it, cone hole through both.
///
/// # Errors
///
/// `VentError::Geometry` when the outline or hole cannot be built; a
/// validated parameter set never triggers it.
pub fn plate_with_rim(params: &ParameterSet, config: &GlobalConfig) -> VentResult<Part> {
    let fragments = resolve_fragments(params, config);
    let outline = primitives::filleted_rectangle_outline(
        params.plate_width,
        params.plate_depth,
        params.fillet_radius,
        fragments,
    )
    .in_component(Component::PlateRim)?;

    let plate = outline
        .clone()
        .linear_extrude(params.plate_thickness)
        .translate([0.0, 0.0, -params.plate_thickness]);

    let rim = if params.has_rim() {
        let inner = outline.clone().offset(-params.rim_width, fragments);
        outline.difference([inner]).linear_extrude(params.rim_height)
    } else {
        Solid::Empty
    };

    let hole = cone_hole(params, config)?;
    debug!(
        rim = params.has_rim(),
        hole_radius = params.cone_radii().inner_bottom,
        "assembled plate"
    );
    Ok(Part::new(
        Component::PlateRim,
        Solid::union([plate, rim]).difference([hole]),
    ))
}

/// Cylinder of the cone's bottom inner radius, overshooting both plate faces.
///
/// # Errors
///
/// `VentError::Geometry` for a non-positive radius or plate thickness.
pub fn cone_hole(params: &ParameterSet, config: &GlobalConfig) -> VentResult<Solid> {
    let radius = params.cone_radii().inner_bottom;
    let epsilon = config.boolean_epsilon;
    let cutter = primitives::truncated_cone(
        params.plate_thickness + 2.0 * epsilon,
        radius,
        radius,
        resolve_fragments(params, config),
    )
    .in_component(Component::PlateRim)?;
    Ok(cutter.translate([0.0, 0.0, -params.plate_thickness - epsilon]))
}
