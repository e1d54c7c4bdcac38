//! # Parameter Validation
//!
//! Geometric feasibility checks, run before any solid is built.

use tracing::debug;
use vent_csg::distribute;

use crate::error::{ConeEnd, VentError, VentResult};
use crate::params::{ConeRadii, ParameterSet};

/// Checks a parameter set and returns its cone radii.
///
/// # Errors
///
/// - `InvalidDimension` for negative or non-finite lengths, a zero plate
///   or cone dimension, a fillet or rim too wide for the plate, a shear
///   angle of 90° or more, stabilizers sunk below the grid, a cone hole
///   wider than the plate, or a stripe step too fine to tile the grid.
/// - `InfeasibleWallGeometry` when the wall consumes the radius at either
///   cone end.
pub fn validate(params: &ParameterSet) -> VentResult<ConeRadii> {
    for (parameter, value) in params.signed_values() {
        if !value.is_finite() {
            return Err(invalid(parameter, value, "must be finite"));
        }
    }
    for (parameter, value) in params.non_negative_lengths() {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(parameter, value, "must be finite and not negative"));
        }
    }
    for (parameter, value) in params.positive_lengths() {
        if !value.is_finite() || value <= 0.0 {
            return Err(invalid(parameter, value, "must be finite and positive"));
        }
    }

    let half_side = params.plate_width.min(params.plate_depth) / 2.0;
    if params.fillet_radius >= half_side {
        return Err(invalid(
            "fillet_radius",
            params.fillet_radius,
            format!("must be below half the smaller plate side ({half_side})"),
        ));
    }
    if params.has_rim() && params.rim_width >= half_side {
        return Err(invalid(
            "rim_width",
            params.rim_width,
            format!("must be below half the smaller plate side ({half_side})"),
        ));
    }
    if params.stripe_shear_angle.abs() >= 90.0 {
        return Err(invalid(
            "stripe_shear_angle",
            params.stripe_shear_angle,
            "must lie strictly between -90 and 90 degrees",
        ));
    }
    if params.stabilizer_count > 0 && params.stabilizer_base() < 0.0 {
        return Err(invalid(
            "stabilizer_overlap",
            params.stabilizer_overlap,
            format!(
                "must not exceed stripe_thickness ({})",
                params.stripe_thickness
            ),
        ));
    }

    let radii = params.cone_radii();
    for (end, outer_radius, inner_radius) in [
        (ConeEnd::Bottom, radii.outer_bottom, radii.inner_bottom),
        (ConeEnd::Top, radii.outer_top, radii.inner_top),
    ] {
        if inner_radius <= 0.0 {
            return Err(VentError::InfeasibleWallGeometry {
                end,
                outer_radius,
                wall_thickness: params.wall_thickness,
            });
        }
    }
    if radii.inner_bottom >= half_side {
        return Err(invalid(
            "cone_bottom_diameter",
            params.cone_bottom_diameter,
            format!(
                "cone hole radius {} does not fit inside the plate",
                radii.inner_bottom
            ),
        ));
    }

    if params.stripe_thickness > 0.0 && params.stripe_width > 0.0 {
        let extent = 2.0 * radii.outer_bottom;
        if let Err(e) = distribute::linear_count(extent, params.stripe_step()) {
            return Err(invalid(
                "stripe_width",
                params.stripe_width,
                format!("stripe step {} is too fine: {e}", params.stripe_step()),
            ));
        }
    }

    debug!(
        outer_bottom = radii.outer_bottom,
        outer_top = radii.outer_top,
        inner_bottom = radii.inner_bottom,
        inner_top = radii.inner_top,
        "validated vent parameters"
    );
    Ok(radii)
}

fn invalid(parameter: &'static str, value: f64, reason: impl Into<String>) -> VentError {
    VentError::InvalidDimension {
        parameter,
        value,
        reason: reason.into(),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected_parameter(params: &ParameterSet) -> &'static str {
        match validate(params) {
            Err(VentError::InvalidDimension { parameter, .. }) => parameter,
            other => panic!("Expected InvalidDimension, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let radii = validate(&ParameterSet::default()).expect("defaults validate");
        assert_eq!(radii.inner_bottom, 45.5);
    }

    #[test]
    fn test_negative_length_rejected() {
        let params = ParameterSet {
            stripe_spacing: -1.0,
            ..ParameterSet::default()
        };
        assert_eq!(rejected_parameter(&params), "stripe_spacing");
    }

    #[test]
    fn test_nan_rejected() {
        let params = ParameterSet {
            cone_top_tolerance: f64::NAN,
            ..ParameterSet::default()
        };
        assert_eq!(rejected_parameter(&params), "cone_top_tolerance");
    }

    #[test]
    fn test_zero_cone_height_rejected() {
        let params = ParameterSet {
            cone_height: 0.0,
            ..ParameterSet::default()
        };
        assert_eq!(rejected_parameter(&params), "cone_height");
    }

    #[test]
    fn test_fillet_at_half_side_rejected() {
        let params = ParameterSet {
            plate_width: 100.0,
            plate_depth: 110.0,
            fillet_radius: 50.0,
            ..ParameterSet::default()
        };
        assert_eq!(rejected_parameter(&params), "fillet_radius");
    }

    #[test]
    fn test_rim_too_wide_rejected_only_when_enabled() {
        let params = ParameterSet {
            rim_width: 60.0,
            ..ParameterSet::default()
        };
        assert_eq!(rejected_parameter(&params), "rim_width");

        let no_rim = ParameterSet {
            rim_height: 0.0,
            ..params
        };
        assert!(validate(&no_rim).is_ok());
    }

    #[test]
    fn test_right_angle_shear_rejected() {
        let params = ParameterSet {
            stripe_shear_angle: -90.0,
            ..ParameterSet::default()
        };
        assert_eq!(rejected_parameter(&params), "stripe_shear_angle");
    }

    #[test]
    fn test_negative_overlap_is_a_gap() {
        let params = ParameterSet {
            stabilizer_overlap: -1.0,
            ..ParameterSet::default()
        };
        assert!(validate(&params).is_ok());

        let sunk = ParameterSet {
            stabilizer_overlap: 2.5,
            ..ParameterSet::default()
        };
        assert_eq!(rejected_parameter(&sunk), "stabilizer_overlap");
    }

    #[test]
    fn test_stripe_step_too_fine_rejected() {
        let params = ParameterSet {
            stripe_width: 1e-5,
            stripe_spacing: 0.0,
            ..ParameterSet::default()
        };
        assert_eq!(rejected_parameter(&params), "stripe_width");

        // Without a grid layer the step is never tiled.
        let no_grid = ParameterSet {
            stripe_thickness: 0.0,
            stabilizer_overlap: 0.0,
            ..params
        };
        assert!(validate(&no_grid).is_ok());
    }

    #[test]
    fn test_wall_thicker_than_radius() {
        let params = ParameterSet {
            cone_bottom_diameter: 6.0,
            cone_top_diameter: 10.0,
            wall_thickness: 3.0,
            ..ParameterSet::default()
        };
        assert_eq!(
            validate(&params),
            Err(VentError::InfeasibleWallGeometry {
                end: ConeEnd::Bottom,
                outer_radius: 3.0,
                wall_thickness: 3.0,
            })
        );
    }

    #[test]
    fn test_top_tolerance_consumes_wall() {
        let params = ParameterSet {
            cone_top_tolerance: 46.5,
            ..ParameterSet::default()
        };
        assert!(matches!(
            validate(&params),
            Err(VentError::InfeasibleWallGeometry {
                end: ConeEnd::Top,
                ..
            })
        ));
    }

    #[test]
    fn test_cone_hole_wider_than_plate() {
        let params = ParameterSet {
            plate_width: 80.0,
            plate_depth: 80.0,
            ..ParameterSet::default()
        };
        assert_eq!(rejected_parameter(&params), "cone_bottom_diameter");
    }
}
