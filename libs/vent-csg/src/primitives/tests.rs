use super::*;
use approx::assert_relative_eq;

#[test]
fn test_outline_bounding_box_matches_size() {
    let outline = filleted_rectangle_outline(120.0, 80.0, 5.0, 64).expect("valid outline");
    let b = outline.bounds().expect("bounded");
    assert_relative_eq!(b.size().x, 120.0);
    assert_relative_eq!(b.size().y, 80.0);
    assert_relative_eq!(b.center().x, 0.0);
    assert!(outline.is_2d());
}

#[test]
fn test_outline_is_inset_then_grown() {
    match filleted_rectangle_outline(20.0, 10.0, 2.0, 24).expect("valid outline") {
        Solid::Offset { delta, fn_, child } => {
            assert_eq!(delta, 2.0);
            assert_eq!(fn_, 24);
            assert_eq!(
                *child,
                Solid::Square {
                    size: [16.0, 6.0],
                    center: true
                }
            );
        }
        other => panic!("Expected Offset, got {other:?}"),
    }
}

#[test]
fn test_outline_zero_fillet_is_sharp() {
    let outline = filleted_rectangle_outline(20.0, 10.0, 0.0, 24).expect("valid outline");
    assert_eq!(
        outline,
        Solid::Square {
            size: [20.0, 10.0],
            center: true
        }
    );
}

#[test]
fn test_outline_fillet_too_large() {
    let err = filleted_rectangle_outline(20.0, 10.0, 5.0, 24).unwrap_err();
    assert!(matches!(err, CsgError::DegenerateShape { .. }));
    assert!(filleted_rectangle_outline(20.0, 10.0, 4.99, 24).is_ok());
    assert!(filleted_rectangle_outline(0.0, 10.0, 0.0, 24).is_err());
}

#[test]
fn test_outline_negative_width() {
    assert!(matches!(
        filleted_rectangle_outline(-1.0, 10.0, 0.0, 24),
        Err(CsgError::InvalidArgument { name: "width", .. })
    ));
}

#[test]
fn test_truncated_cone() {
    let cone = truncated_cone(20.0, 47.5, 48.0, 2).expect("valid cone");
    match cone {
        Solid::Cylinder {
            height,
            radius1,
            radius2,
            center,
            fn_,
        } => {
            assert_eq!(height, 20.0);
            assert_eq!(radius1, 47.5);
            assert_eq!(radius2, 48.0);
            assert!(!center);
            assert_eq!(fn_, 3, "fragment count is clamped");
        }
        other => panic!("Expected Cylinder, got {other:?}"),
    }
}

#[test]
fn test_truncated_cone_rejects_degenerate() {
    assert!(truncated_cone(0.0, 1.0, 1.0, 32).is_err());
    assert!(truncated_cone(5.0, -1.0, 1.0, 32).is_err());
    assert!(matches!(
        truncated_cone(5.0, 0.0, 0.0, 32),
        Err(CsgError::DegenerateShape { .. })
    ));
    assert!(truncated_cone(5.0, 0.0, 3.0, 32).is_ok());
}

fn hull_slabs(solid: &Solid) -> (&Solid, &Solid) {
    match solid {
        Solid::Hull { children } => {
            assert_eq!(children.len(), 2);
            (&children[0], &children[1])
        }
        other => panic!("Expected Hull, got {other:?}"),
    }
}

fn slab_placement(slab: &Solid) -> ([f64; 3], [f64; 3]) {
    match slab {
        Solid::Translate { offset, child } => match child.as_ref() {
            Solid::Cube { size, .. } => (*offset, *size),
            other => panic!("Expected Cube, got {other:?}"),
        },
        other => panic!("Expected Translate, got {other:?}"),
    }
}

#[test]
fn test_wedge_slot_tapers_between_faces() {
    let wedge = wedge_slot(49.0, 1.0, 5.0, 20.0).expect("valid wedge");
    let (bottom, top) = hull_slabs(&wedge);

    let (offset, size) = slab_placement(bottom);
    assert_eq!(size[0], 49.0);
    assert_eq!(size[1], 1.0);
    assert_eq!(offset[1], -0.5);
    // Bottom slab ends exactly at z=0
    assert_relative_eq!(offset[2] + size[2], 0.0);

    let (offset, size) = slab_placement(top);
    assert_eq!(size[1], 5.0);
    assert_eq!(offset[1], -2.5);
    // Top slab starts exactly at z=height
    assert_eq!(offset[2], 20.0);

    let b = wedge.bounds().expect("bounded");
    assert!(b.min.z < 0.0 && b.max.z > 20.0);
    assert_eq!(b.min.x, 0.0);
}

#[test]
fn test_wedge_slot_narrowing() {
    let wedge = wedge_slot(10.0, 6.0, 2.0, 8.0).expect("narrowing wedge");
    let b = wedge.bounds().expect("bounded");
    assert_relative_eq!(b.size().y, 6.0);
}

#[test]
fn test_wedge_slot_rejects_zero_widths() {
    assert!(wedge_slot(10.0, 0.0, 0.0, 8.0).is_err());
    assert!(wedge_slot(0.0, 1.0, 1.0, 8.0).is_err());
}

#[test]
fn test_sheared_prism_offsets_top_section() {
    let prism = sheared_prism(1.5, 200.0, 2.0, 1.0).expect("valid prism");
    let (bottom, top) = hull_slabs(&prism);
    let (bottom_offset, _) = slab_placement(bottom);
    let (top_offset, size) = slab_placement(top);
    assert_relative_eq!(top_offset[0] - bottom_offset[0], 1.0);
    assert_relative_eq!(top_offset[2] + size[2], 2.0);

    let b = prism.bounds().expect("bounded");
    assert_relative_eq!(b.min.z, 0.0);
    assert_relative_eq!(b.max.z, 2.0);
    assert_relative_eq!(b.min.x, -0.75);
    assert_relative_eq!(b.max.x, 1.75);
}

#[test]
fn test_sheared_prism_side_lean_uses_section_thickness() {
    let (height, shear) = (2.0, 1.0);
    let prism = sheared_prism(1.5, 200.0, height, shear).expect("valid prism");
    let (bottom, top) = hull_slabs(&prism);
    let (bottom_offset, bottom_size) = slab_placement(bottom);
    let (top_offset, top_size) = slab_placement(top);

    let t = BOOLEAN_EPSILON.min(height / 2.0);
    assert_relative_eq!(bottom_size[2], t);
    assert_relative_eq!(top_size[2], t);

    // Left side: bottom section's upper edge to the top section's upper edge.
    let run = top_offset[0] - bottom_offset[0];
    let rise = (top_offset[2] + top_size[2]) - (bottom_offset[2] + bottom_size[2]);
    assert_relative_eq!(run / rise, shear / (height - t), epsilon = 1e-12);

    // Sections never exceed half the height, so a thin prism keeps a slope.
    let thin = sheared_prism(1.5, 200.0, 0.1, 1.0).expect("valid prism");
    let (_, thin_top) = hull_slabs(&thin);
    assert_relative_eq!(slab_placement(thin_top).1[2], 0.05);
}

#[test]
fn test_sheared_prism_zero_shear_is_straight() {
    let prism = sheared_prism(1.5, 200.0, 2.0, 0.0).expect("valid prism");
    let (bottom, top) = hull_slabs(&prism);
    assert_eq!(slab_placement(bottom).0[0], slab_placement(top).0[0]);
}

#[test]
fn test_cuboid() {
    assert_eq!(
        cuboid([1.0, 2.0, 3.0], true),
        Ok(Solid::Cube {
            size: [1.0, 2.0, 3.0],
            center: true
        })
    );
    assert!(cuboid([1.0, -2.0, 3.0], false).is_err());
}
