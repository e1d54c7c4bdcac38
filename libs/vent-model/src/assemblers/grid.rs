//! Sheared airflow stripes clipped to the cone's footprint.

use config::constants::GlobalConfig;
use tracing::debug;
use vent_csg::{distribute, primitives, CsgResult, Solid};

use super::{footprint_cylinder, resolve_fragments, Part};
use crate::error::{Component, InComponent, VentResult};
use crate::params::ParameterSet;

/// Stripes along Y, tiled along X across twice the cone's bottom diameter
/// and intersected with a disc of the cone's bottom outer radius.
///
/// The layer spans z ∈ [0, stripe_thickness]. A zero thickness or stripe
/// width omits the grid.
///
/// # Errors
///
/// `VentError::Geometry` when a stripe or the footprint cannot be built.
pub fn stripe_grid(params: &ParameterSet, config: &GlobalConfig) -> VentResult<Part> {
    if params.stripe_thickness == 0.0 {
        return Ok(Part::omitted(Component::StripeGrid, "stripe_thickness"));
    }
    if params.stripe_width == 0.0 {
        return Ok(Part::omitted(Component::StripeGrid, "stripe_width"));
    }

    let radius = params.cone_radii().outer_bottom;
    let diameter = 2.0 * radius;
    let shear = params.shear_offset();
    let stripe = primitives::sheared_prism(
        params.stripe_width,
        2.0 * diameter,
        params.stripe_thickness,
        shear,
    )
    .in_component(Component::StripeGrid)?;

    let tiles = stripe_count(params).in_component(Component::StripeGrid)?;
    let stripes = distribute::tile_linearly(diameter, params.stripe_step(), |x| {
        stripe.clone().translate([x, 0.0, 0.0])
    })
    .in_component(Component::StripeGrid)?;

    let footprint = footprint_cylinder(
        radius,
        params.stripe_thickness,
        resolve_fragments(params, config),
    )
    .in_component(Component::StripeGrid)?;

    debug!(
        stripes = tiles,
        shear,
        step = params.stripe_step(),
        "assembled stripe grid"
    );
    Ok(Part::new(
        Component::StripeGrid,
        Solid::intersection([stripes, footprint]),
    ))
}

/// Number of stripes tiled across the footprint, before clipping.
pub(crate) fn stripe_count(params: &ParameterSet) -> CsgResult<usize> {
    distribute::linear_count(2.0 * params.cone_radii().outer_bottom, params.stripe_step())
}
