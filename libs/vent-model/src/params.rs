//! # Parameter Set
//!
//! The flat record of dimensional inputs and the quantities derived from it.
//!
//! All lengths are in millimetres, angles in degrees. A parameter set is
//! built once and read-only afterwards.
//!
//! ## Example
//!
//! ```rust
//! use vent_model::ParameterSet;
//!
//! let params = ParameterSet::from_json(r#"{ "slot_count": 8, "cone_height": 25 }"#).unwrap();
//! assert_eq!(params.slot_count, 8);
//! assert_eq!(params.plate_width, ParameterSet::default().plate_width);
//! ```

use config::constants::DEFAULT_FRAGMENTS;
use serde::{Deserialize, Serialize};

use crate::error::{VentError, VentResult};

/// Every dimensional input of a vent cover.
///
/// Deserializes from a flat mapping; missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParameterSet {
    // Plate
    /// Plate extent along X.
    pub plate_width: f64,
    /// Plate extent along Y.
    pub plate_depth: f64,
    /// Plate thickness below z=0.
    pub plate_thickness: f64,
    /// Corner rounding radius of the plate outline.
    pub fillet_radius: f64,

    // Rim
    /// Rim height above the plate; 0 disables the rim.
    pub rim_height: f64,
    /// Rim wall width measured inward from the outline; 0 disables the rim.
    pub rim_width: f64,

    // Cone
    /// Nominal outer diameter at z=0.
    pub cone_bottom_diameter: f64,
    /// Nominal outer diameter at z=cone_height.
    pub cone_top_diameter: f64,
    /// Signed radius reduction at the bottom end.
    pub cone_bottom_tolerance: f64,
    /// Signed radius reduction at the top end.
    pub cone_top_tolerance: f64,
    /// Cone wall thickness.
    pub wall_thickness: f64,
    /// Cone height.
    pub cone_height: f64,

    // Slots
    /// Number of radial wedge slots.
    pub slot_count: u32,
    /// Slot width at z=0.
    pub slot_width_bottom: f64,
    /// Slot width at z=cone_height.
    pub slot_width_top: f64,

    // Stripes
    /// Grid layer thickness.
    pub stripe_thickness: f64,
    /// Width of each stripe.
    pub stripe_width: f64,
    /// Gap between neighbouring stripes.
    pub stripe_spacing: f64,
    /// Stripe shear angle from vertical, degrees.
    pub stripe_shear_angle: f64,

    // Stabilizers
    /// Number of stabilizer stripes.
    pub stabilizer_count: u32,
    /// Width of each stabilizer.
    pub stabilizer_width: f64,
    /// Height of each stabilizer.
    pub stabilizer_height: f64,
    /// Depth the stabilizers sink into the grid layer; negative leaves a gap.
    pub stabilizer_overlap: f64,

    /// Circle tessellation fragment count; 0 uses the configured default.
    pub fragments: u32,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            plate_width: 120.0,
            plate_depth: 120.0,
            plate_thickness: 2.0,
            fillet_radius: 5.0,
            rim_height: 3.0,
            rim_width: 2.0,
            cone_bottom_diameter: 95.0,
            cone_top_diameter: 96.0,
            cone_bottom_tolerance: 0.0,
            cone_top_tolerance: 0.0,
            wall_thickness: 2.0,
            cone_height: 20.0,
            slot_count: 6,
            slot_width_bottom: 1.0,
            slot_width_top: 5.0,
            stripe_thickness: 2.0,
            stripe_width: 1.5,
            stripe_spacing: 3.0,
            stripe_shear_angle: 30.0,
            stabilizer_count: 4,
            stabilizer_width: 1.5,
            stabilizer_height: 2.0,
            stabilizer_overlap: 0.5,
            fragments: DEFAULT_FRAGMENTS,
        }
    }
}

/// Outer and inner radii at both cone ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeRadii {
    /// Outer radius at z=0.
    pub outer_bottom: f64,
    /// Outer radius at z=height.
    pub outer_top: f64,
    /// Inner radius at z=0.
    pub inner_bottom: f64,
    /// Inner radius at z=height.
    pub inner_top: f64,
}

impl ConeRadii {
    /// The larger of the two outer radii.
    pub fn max_outer(&self) -> f64 {
        self.outer_bottom.max(self.outer_top)
    }
}

impl ParameterSet {
    /// Reads a parameter set from a flat JSON object.
    ///
    /// # Errors
    ///
    /// `VentError::Parameters` for malformed JSON, unknown fields or
    /// values of the wrong type.
    pub fn from_json(source: &str) -> VentResult<Self> {
        serde_json::from_str(source).map_err(|e| VentError::Parameters(e.to_string()))
    }

    /// Radii after tolerance and wall thickness.
    ///
    /// Outer radius is half the nominal diameter minus the end's tolerance;
    /// inner radius is the outer radius minus the wall thickness.
    pub fn cone_radii(&self) -> ConeRadii {
        let outer_bottom = self.cone_bottom_diameter / 2.0 - self.cone_bottom_tolerance;
        let outer_top = self.cone_top_diameter / 2.0 - self.cone_top_tolerance;
        ConeRadii {
            outer_bottom,
            outer_top,
            inner_bottom: outer_bottom - self.wall_thickness,
            inner_top: outer_top - self.wall_thickness,
        }
    }

    /// Horizontal displacement of a stripe's top face relative to its bottom.
    pub fn shear_offset(&self) -> f64 {
        self.stripe_thickness * self.stripe_shear_angle.to_radians().tan()
    }

    /// Distance between neighbouring stripe positions.
    pub fn stripe_step(&self) -> f64 {
        self.stripe_width + self.stripe_spacing
    }

    /// Distance between neighbouring stabilizers, `None` without stabilizers.
    pub fn stabilizer_spacing(&self) -> Option<f64> {
        (self.stabilizer_count > 0)
            .then(|| 2.0 * self.cone_radii().outer_bottom / f64::from(self.stabilizer_count))
    }

    /// Height at which the stabilizers start.
    pub fn stabilizer_base(&self) -> f64 {
        self.stripe_thickness - self.stabilizer_overlap
    }

    /// Whether the rim is requested.
    pub fn has_rim(&self) -> bool {
        self.rim_height > 0.0 && self.rim_width > 0.0
    }

    /// Lengths that must be strictly positive.
    pub(crate) fn positive_lengths(&self) -> [(&'static str, f64); 7] {
        [
            ("plate_width", self.plate_width),
            ("plate_depth", self.plate_depth),
            ("plate_thickness", self.plate_thickness),
            ("cone_bottom_diameter", self.cone_bottom_diameter),
            ("cone_top_diameter", self.cone_top_diameter),
            ("wall_thickness", self.wall_thickness),
            ("cone_height", self.cone_height),
        ]
    }

    /// Lengths that may be zero, which disables the feature they size.
    pub(crate) fn non_negative_lengths(&self) -> [(&'static str, f64); 10] {
        [
            ("fillet_radius", self.fillet_radius),
            ("rim_height", self.rim_height),
            ("rim_width", self.rim_width),
            ("slot_width_bottom", self.slot_width_bottom),
            ("slot_width_top", self.slot_width_top),
            ("stripe_thickness", self.stripe_thickness),
            ("stripe_width", self.stripe_width),
            ("stripe_spacing", self.stripe_spacing),
            ("stabilizer_width", self.stabilizer_width),
            ("stabilizer_height", self.stabilizer_height),
        ]
    }

    /// Signed quantities, only required to be finite.
    pub(crate) fn signed_values(&self) -> [(&'static str, f64); 4] {
        [
            ("cone_bottom_tolerance", self.cone_bottom_tolerance),
            ("cone_top_tolerance", self.cone_top_tolerance),
            ("stripe_shear_angle", self.stripe_shear_angle),
            ("stabilizer_overlap", self.stabilizer_overlap),
        ]
    }
}

// =============================================================================
// TESTS
// =============================================================================
