//! End-to-end construction scenarios for the vent cover.
//!
//! Run with: cargo test -p vent-model --test scenarios

use approx::assert_relative_eq;
use vent_csg::Solid;
use vent_model::{compose, validate, Component, ConeEnd, ParameterSet, VentError, Warning};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn part_solid(params: &ParameterSet, component: Component) -> Solid {
    let scene = compose(params).expect("valid parameters");
    scene.part(component).expect("part present").solid.clone()
}

// =============================================================================
// SCENARIO A: CONE RADII
// =============================================================================

#[test]
fn test_default_inner_radii() {
    let radii = validate(&ParameterSet::default()).unwrap();
    assert_relative_eq!(radii.inner_bottom, 45.5);
    assert_relative_eq!(radii.inner_top, 46.0);
}

#[test]
fn test_hole_radius_follows_wall_and_tolerance() {
    for (tolerance, wall) in [(0.0, 2.0), (0.2, 1.2), (-0.3, 3.5)] {
        let params = ParameterSet {
            cone_bottom_tolerance: tolerance,
            wall_thickness: wall,
            ..ParameterSet::default()
        };
        let plate = part_solid(&params, Component::PlateRim);
        let Solid::Difference { children } = &plate else {
            panic!("expected plate minus hole, got {plate:?}");
        };
        let hole = children[1].bounds().unwrap();
        assert_relative_eq!(hole.max.x, 47.5 - tolerance - wall, epsilon = 1e-12);
    }
}

// =============================================================================
// SCENARIO B: RADIAL SLOTS
// =============================================================================

#[test]
fn test_six_tapered_slots() {
    init_tracing();
    let cone = part_solid(&ParameterSet::default(), Component::HollowCone);
    let Solid::Difference { children } = &cone else {
        panic!("expected hollow cone, got {cone:?}");
    };
    let slots = children[2].children();
    assert_eq!(slots.len(), 6);

    for (i, slot) in slots.iter().enumerate() {
        let Solid::Rotate { angles, child } = slot else {
            panic!("expected rotated slot, got {slot:?}");
        };
        assert_relative_eq!(angles[2], 60.0 * i as f64, epsilon = 1e-9);

        let Solid::Hull { children: slabs } = child.as_ref() else {
            panic!("expected hulled wedge, got {child:?}");
        };
        let bottom = slabs[0].bounds().unwrap();
        let top = slabs[1].bounds().unwrap();
        assert_relative_eq!(bottom.size().y, 1.0);
        assert_relative_eq!(top.size().y, 5.0);
        assert_relative_eq!(bottom.max.z, 0.0);
        assert_relative_eq!(top.min.z, 20.0);
    }
}

// =============================================================================
// SCENARIO C: STABILIZERS
// =============================================================================

#[test]
fn test_four_stabilizer_offsets() {
    let stabilizers = part_solid(&ParameterSet::default(), Component::Stabilizers);
    let bars = stabilizers.children()[0].children();
    let offsets: Vec<f64> = bars
        .iter()
        .map(|bar| bar.bounds().unwrap().center().y)
        .collect();
    assert_eq!(offsets, vec![-35.625, -11.875, 11.875, 35.625]);
}

// =============================================================================
// SCENARIO D: UNSHEARED STRIPES
// =============================================================================

#[test]
fn test_zero_shear_gives_straight_stripes() {
    let params = ParameterSet {
        stripe_shear_angle: 0.0,
        ..ParameterSet::default()
    };
    assert_eq!(params.shear_offset(), 0.0);

    let grid = part_solid(&params, Component::StripeGrid);
    for stripe in grid.children()[0].children() {
        let Solid::Hull { children: slabs } = &stripe.children()[0] else {
            panic!("expected hulled stripe, got {stripe:?}");
        };
        let bottom = slabs[0].bounds().unwrap();
        let top = slabs[1].bounds().unwrap();
        assert_eq!(bottom.min.x, top.min.x);
        assert_eq!(bottom.max.x, top.max.x);
    }
}

// =============================================================================
// DEGENERATE CONFIGURATIONS
// =============================================================================

#[test]
fn test_zero_counts_are_reported_not_fatal() {
    init_tracing();
    let params = ParameterSet {
        slot_count: 0,
        stabilizer_count: 0,
        ..ParameterSet::default()
    };
    let scene = compose(&params).unwrap();
    let warned: Vec<Component> = scene.warnings().map(Warning::component).collect();
    assert_eq!(warned, vec![Component::HollowCone, Component::Stabilizers]);
    assert!(scene.part(Component::Stabilizers).unwrap().is_omitted());
    assert!(!scene.part(Component::HollowCone).unwrap().is_omitted());
}

#[test]
fn test_omitted_parts_leave_the_scad_output() {
    let params = ParameterSet {
        stabilizer_count: 0,
        stripe_thickness: 0.0,
        stabilizer_overlap: 0.0,
        ..ParameterSet::default()
    };
    let scene = compose(&params).unwrap();
    let Solid::Union { children } = scene.solid() else {
        panic!("expected union of plate and cone");
    };
    assert_eq!(children.len(), 2);
    assert!(!scene.to_scad().contains("intersection()"));
}

#[test]
fn test_wall_too_thick_fails_before_building() {
    let params = ParameterSet {
        wall_thickness: 48.0,
        ..ParameterSet::default()
    };
    match compose(&params) {
        Err(VentError::InfeasibleWallGeometry { end, .. }) => assert_eq!(end, ConeEnd::Bottom),
        other => panic!("expected infeasible wall, got {other:?}"),
    }
}

#[test]
fn test_parameters_from_json() {
    let params = ParameterSet::from_json(
        r#"{ "plate_width": 150, "plate_depth": 140, "slot_count": 4, "fragments": 0 }"#,
    )
    .unwrap();
    let scene = compose(&params).unwrap();
    let scad = scene.to_scad();
    assert!(scad.contains("$fn = 128"));
    assert!(scad.contains("rotate([0, 0, 270])"));
}

#[test]
fn test_scene_into_solid_matches_solid() {
    let scene = compose(&ParameterSet::default()).unwrap();
    let solid = scene.solid();
    assert_eq!(scene.into_solid(), solid);
}

#[test]
fn test_compose_with_custom_margin() {
    let config = config::constants::GlobalConfig::new(0.05, 64).unwrap();
    let params = ParameterSet {
        fragments: 0,
        ..ParameterSet::default()
    };
    let scene = vent_model::compose_with(&params, &config).unwrap();
    let plate = &scene.part(Component::PlateRim).unwrap().solid;
    let hole = plate.children()[1].bounds().unwrap();
    assert_relative_eq!(hole.min.z, -2.05, epsilon = 1e-12);
    assert!(scene.to_scad().contains("$fn = 64"));
}

#[test]
fn test_too_fine_stripe_step_fails_before_building() {
    let params = ParameterSet {
        stripe_width: 1e-5,
        stripe_spacing: 0.0,
        ..ParameterSet::default()
    };
    match compose(&params) {
        Err(VentError::InvalidDimension { parameter, .. }) => assert_eq!(parameter, "stripe_width"),
        other => panic!("expected invalid stripe width, got {other:?}"),
    }
}
