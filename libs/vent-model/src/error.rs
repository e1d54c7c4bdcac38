//! # Vent Errors
//!
//! Error and warning types for parameter validation and scene assembly.
//!
//! ## Error Policy
//!
//! - Parameter problems are reported before any geometry is built
//! - Kernel failures name the component whose operand failed
//! - Degenerate distributions are warnings: the component is omitted

use std::fmt;

use thiserror::Error;
use vent_csg::CsgError;

// =============================================================================
// COMPONENTS
// =============================================================================

/// The independently assembled parts of a vent cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Base plate with optional rim and the cone hole.
    PlateRim,
    /// Hollow slotted cone.
    HollowCone,
    /// Sheared airflow stripes.
    StripeGrid,
    /// Perpendicular stabilizer stripes.
    Stabilizers,
}

impl Component {
    /// All components in composition order.
    pub const ALL: [Component; 4] = [
        Component::PlateRim,
        Component::HollowCone,
        Component::StripeGrid,
        Component::Stabilizers,
    ];
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Component::PlateRim => "plate and rim",
            Component::HollowCone => "hollow cone",
            Component::StripeGrid => "stripe grid",
            Component::Stabilizers => "stabilizer stripes",
        })
    }
}

/// One end of the mounting cone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConeEnd {
    /// The end resting on the plate (z = 0).
    Bottom,
    /// The free end (z = cone height).
    Top,
}

impl fmt::Display for ConeEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConeEnd::Bottom => "bottom",
            ConeEnd::Top => "top",
        })
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Errors that stop a vent cover from being built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VentError {
    /// A length is negative or non-finite, or violates a geometric limit.
    #[error("Invalid dimension {parameter} = {value}: {reason}")]
    InvalidDimension {
        /// Parameter name.
        parameter: &'static str,
        /// Supplied value.
        value: f64,
        /// Constraint that was violated.
        reason: String,
    },

    /// The wall is at least as thick as the radius it is cut from.
    #[error(
        "Infeasible wall geometry at cone {end}: outer radius {outer_radius} \
         leaves no room for wall thickness {wall_thickness}"
    )]
    InfeasibleWallGeometry {
        /// Cone end where the inner radius vanishes.
        end: ConeEnd,
        /// Outer radius after tolerance.
        outer_radius: f64,
        /// Requested wall thickness.
        wall_thickness: f64,
    },

    /// A primitive builder rejected its arguments.
    #[error("Failed to build {component}: {source}")]
    Geometry {
        /// Component being assembled.
        component: Component,
        /// Builder error.
        #[source]
        source: CsgError,
    },

    /// The geometry kernel failed on an operand of one component.
    #[error("Kernel failed while building {component}: {message}")]
    Construction {
        /// Component whose operand failed.
        component: Component,
        /// Kernel message.
        message: String,
    },

    /// The geometry kernel failed on the final union of components.
    #[error("Kernel failed while composing the scene: {0}")]
    Composition(String),

    /// The flat parameter mapping could not be read.
    #[error("Invalid parameter mapping: {0}")]
    Parameters(String),
}

/// Result type alias for vent cover operations.
pub type VentResult<T> = Result<T, VentError>;

/// Attaches the component being assembled to builder errors.
pub(crate) trait InComponent<T> {
    fn in_component(self, component: Component) -> VentResult<T>;
}

impl<T> InComponent<T> for Result<T, CsgError> {
    fn in_component(self, component: Component) -> VentResult<T> {
        self.map_err(|source| VentError::Geometry { component, source })
    }
}

// =============================================================================
// WARNINGS
// =============================================================================

/// A recoverable degenerate configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// A distribution count of zero; the distributed part is omitted.
    DegenerateDistribution {
        /// Affected component.
        component: Component,
        /// The zero count parameter.
        parameter: &'static str,
    },
    /// A zero dimension makes a component, or a feature of it, vanish; the
    /// vanished geometry is omitted.
    EmptyComponent {
        /// Affected component.
        component: Component,
        /// The zero parameter.
        parameter: &'static str,
    },
}

impl Warning {
    /// Component the warning refers to.
    pub fn component(&self) -> Component {
        match self {
            Warning::DegenerateDistribution { component, .. }
            | Warning::EmptyComponent { component, .. } => *component,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::DegenerateDistribution {
                component,
                parameter,
            } => write!(f, "{parameter} is 0, nothing distributed in {component}"),
            Warning::EmptyComponent {
                component,
                parameter,
            } => write!(f, "{parameter} is 0, geometry it sizes omitted from {component}"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
