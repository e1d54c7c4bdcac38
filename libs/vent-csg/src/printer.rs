//! # OpenSCAD Printer
//!
//! Renders a [`Solid`] tree as OpenSCAD source so it can be evaluated by any
//! OpenSCAD-compatible kernel.

use crate::geometry::Solid;

const INDENT: &str = "    ";

/// Prints `solid` as an OpenSCAD program.
///
/// ```rust
/// use vent_csg::{to_scad, Solid};
///
/// let cube = Solid::Cube { size: [1.0, 2.0, 3.0], center: true };
/// assert_eq!(to_scad(&cube), "cube([1, 2, 3], center = true);\n");
/// ```
pub fn to_scad(solid: &Solid) -> String {
    let mut out = String::new();
    print_node(&mut out, solid, 0);
    out
}

fn print_node(out: &mut String, solid: &Solid, depth: usize) {
    let pad = INDENT.repeat(depth);
    match solid {
        Solid::Cube { size, center } => {
            out.push_str(&format!("{pad}cube({}, center = {center});\n", vec3(size)));
        }
        Solid::Cylinder {
            height,
            radius1,
            radius2,
            center,
            fn_,
        } => out.push_str(&format!(
            "{pad}cylinder(h = {height}, r1 = {radius1}, r2 = {radius2}, center = {center}, $fn = {fn_});\n"
        )),
        Solid::Square { size, center } => out.push_str(&format!(
            "{pad}square([{}, {}], center = {center});\n",
            size[0], size[1]
        )),
        Solid::Circle { radius, fn_ } => {
            out.push_str(&format!("{pad}circle(r = {radius}, $fn = {fn_});\n"));
        }
        Solid::Translate { offset, child } => {
            print_block(out, &pad, &format!("translate({})", vec3(offset)), [child.as_ref()], depth);
        }
        Solid::Rotate { angles, child } => {
            print_block(out, &pad, &format!("rotate({})", vec3(angles)), [child.as_ref()], depth);
        }
        Solid::LinearExtrude { height, child } => print_block(
            out,
            &pad,
            &format!("linear_extrude(height = {height})"),
            [child.as_ref()],
            depth,
        ),
        Solid::Offset { delta, fn_, child } => print_block(
            out,
            &pad,
            &format!("offset(r = {delta}, $fn = {fn_})"),
            [child.as_ref()],
            depth,
        ),
        Solid::Union { children } => print_block(out, &pad, "union()", children, depth),
        Solid::Difference { children } => print_block(out, &pad, "difference()", children, depth),
        Solid::Intersection { children } => {
            print_block(out, &pad, "intersection()", children, depth);
        }
        Solid::Hull { children } => print_block(out, &pad, "hull()", children, depth),
        Solid::Empty => out.push_str(&format!("{pad};\n")),
    }
}

fn print_block<'a>(
    out: &mut String,
    pad: &str,
    head: &str,
    children: impl IntoIterator<Item = &'a Solid>,
    depth: usize,
) {
    out.push_str(&format!("{pad}{head} {{\n"));
    for child in children {
        print_node(out, child, depth + 1);
    }
    out.push_str(&format!("{pad}}}\n"));
}

fn vec3(v: &[f64; 3]) -> String {
    format!("[{}, {}, {}]", v[0], v[1], v[2])
}

// =============================================================================
// TESTS
// =============================================================================
