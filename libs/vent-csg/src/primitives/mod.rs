//! # Primitive Builders
//!
//! Parameterised leaf shapes of the vent cover. Each builder validates its
//! arguments and returns a [`Solid`] description.
//!
//! Hulled shapes are built from thin slabs of thickness
//! [`BOOLEAN_EPSILON`]; the hull of two slabs at different heights gives a
//! straight taper or shear between them.

use config::constants::{clamp_fragments, BOOLEAN_EPSILON};

use crate::error::{non_negative, positive, CsgError, CsgResult};
use crate::geometry::Solid;

/// Rounded rectangle profile centred on the origin.
///
/// The rectangle is inset by `fillet_radius` on every side and grown back
/// with a round offset, which rounds all four corners while keeping the
/// overall extent at `width` × `depth`. A zero radius gives a sharp
/// rectangle.
///
/// # Errors
///
/// `DegenerateShape` when `fillet_radius >= min(width, depth) / 2`, since
/// the inset rectangle would vanish.
///
/// # Example
///
/// ```rust
/// use vent_csg::primitives::filleted_rectangle_outline;
///
/// let outline = filleted_rectangle_outline(100.0, 60.0, 4.0, 32).unwrap();
/// let size = outline.bounds().unwrap().size();
/// assert_eq!((size.x, size.y), (100.0, 60.0));
/// ```
pub fn filleted_rectangle_outline(
    width: f64,
    depth: f64,
    fillet_radius: f64,
    fragments: u32,
) -> CsgResult<Solid> {
    let width = non_negative("width", width)?;
    let depth = non_negative("depth", depth)?;
    let fillet_radius = non_negative("fillet_radius", fillet_radius)?;

    let limit = width.min(depth) / 2.0;
    if fillet_radius >= limit {
        return Err(CsgError::DegenerateShape {
            shape: "filleted rectangle outline",
            reason: format!(
                "fillet radius {fillet_radius} must be below half the smaller side ({limit})"
            ),
        });
    }

    if fillet_radius == 0.0 {
        return Ok(Solid::Square {
            size: [width, depth],
            center: true,
        });
    }

    let inset = Solid::Square {
        size: [width - 2.0 * fillet_radius, depth - 2.0 * fillet_radius],
        center: true,
    };
    Ok(inset.offset(fillet_radius, clamp_fragments(fragments)))
}

/// Truncated cone from `radius_bottom` at z=0 to `radius_top` at z=height.
///
/// # Errors
///
/// `InvalidArgument` for a non-positive height or negative radius,
/// `DegenerateShape` when both radii are zero.
pub fn truncated_cone(
    height: f64,
    radius_bottom: f64,
    radius_top: f64,
    fragments: u32,
) -> CsgResult<Solid> {
    let height = positive("height", height)?;
    let radius_bottom = non_negative("radius_bottom", radius_bottom)?;
    let radius_top = non_negative("radius_top", radius_top)?;
    if radius_bottom == 0.0 && radius_top == 0.0 {
        return Err(CsgError::DegenerateShape {
            shape: "truncated cone",
            reason: "both radii are zero".to_string(),
        });
    }

    Ok(Solid::Cylinder {
        height,
        radius1: radius_bottom,
        radius2: radius_top,
        center: false,
        fn_: clamp_fragments(fragments),
    })
}

/// Radial slot cutter pointing along +X from the rotation axis.
///
/// Hull of a slab of `width_bottom` ending at z=0 and a slab of `width_top`
/// starting at z=height, both spanning x ∈ [0, depth] and centred on y=0.
/// The width therefore tapers linearly over [0, height] in either direction,
/// and the slabs push the cutter past both faces of whatever it cuts.
///
/// # Errors
///
/// `InvalidArgument` for non-positive depth or height or a negative width,
/// `DegenerateShape` when both widths are zero.
pub fn wedge_slot(depth: f64, width_bottom: f64, width_top: f64, height: f64) -> CsgResult<Solid> {
    let depth = positive("depth", depth)?;
    let height = positive("height", height)?;
    let width_bottom = non_negative("width_bottom", width_bottom)?;
    let width_top = non_negative("width_top", width_top)?;
    if width_bottom == 0.0 && width_top == 0.0 {
        return Err(CsgError::DegenerateShape {
            shape: "wedge slot",
            reason: "both widths are zero".to_string(),
        });
    }

    let slab = |width: f64| Solid::Cube {
        size: [depth, width, BOOLEAN_EPSILON],
        center: false,
    };
    let bottom = slab(width_bottom).translate([0.0, -width_bottom / 2.0, -BOOLEAN_EPSILON]);
    let top = slab(width_top).translate([0.0, -width_top / 2.0, height]);
    Ok(Solid::hull([bottom, top]))
}

/// Prism with a parallelogram profile in XZ.
///
/// Hull of two sections of `width` (X) by `span` (Y), centred on the
/// origin; the bottom one rests on z=0, the top one ends at z=height and is
/// shifted by `shear_offset` along X.
///
/// Each section is `t = min(BOOLEAN_EPSILON, height / 2)` thick, so the
/// slanted side faces only run from z=t to z=height and lean by
/// `shear_offset / (height - t)`, slightly steeper than
/// `shear_offset / height`; short vertical facets of height `t` close them
/// at the bottom. The bottom and top faces sit exactly at z=0 and
/// z=height, displaced by the full `shear_offset`.
///
/// # Errors
///
/// `InvalidArgument` for non-positive width, span or height, or a
/// non-finite shear.
pub fn sheared_prism(width: f64, span: f64, height: f64, shear_offset: f64) -> CsgResult<Solid> {
    let width = positive("width", width)?;
    let span = positive("span", span)?;
    let height = positive("height", height)?;
    if !shear_offset.is_finite() {
        return Err(CsgError::InvalidArgument {
            name: "shear_offset",
            value: shear_offset,
            reason: "must be finite",
        });
    }

    let thickness = BOOLEAN_EPSILON.min(height / 2.0);
    let section = Solid::Cube {
        size: [width, span, thickness],
        center: false,
    };
    let bottom = section.clone().translate([-width / 2.0, -span / 2.0, 0.0]);
    let top = section.translate([-width / 2.0 + shear_offset, -span / 2.0, height - thickness]);
    Ok(Solid::hull([bottom, top]))
}

/// Axis-aligned box.
///
/// # Errors
///
/// `InvalidArgument` for a negative or non-finite edge.
pub fn cuboid(size: [f64; 3], centered: bool) -> CsgResult<Solid> {
    non_negative("x", size[0])?;
    non_negative("y", size[1])?;
    non_negative("z", size[2])?;
    Ok(Solid::Cube {
        size,
        center: centered,
    })
}

#[cfg(test)]
mod tests;
