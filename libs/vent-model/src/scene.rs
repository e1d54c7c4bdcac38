//! # Scene Composer
//!
//! Validates the parameters, runs the four assemblers and combines their
//! parts into the final printable solid.
//!
//! The assemblers share no state, so they run under `rayon::join`. The
//! result is identical to running them in sequence.

use config::constants::GlobalConfig;
use tracing::{info, warn};
use vent_csg::{realize, to_scad, GeometryKernel, Solid};

use crate::assemblers::{hollow_cone, plate_with_rim, stabilizer_stripes, stripe_grid, Part};
use crate::error::{Component, VentError, VentResult, Warning};
use crate::params::ParameterSet;
use crate::validate::validate;

/// The assembled vent cover.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    parts: Vec<Part>,
}

impl Scene {
    /// All parts in composition order, omitted ones included.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// The part built by `component`.
    pub fn part(&self, component: Component) -> Option<&Part> {
        self.parts.iter().find(|p| p.component == component)
    }

    /// Every warning raised while assembling.
    pub fn warnings(&self) -> impl Iterator<Item = &Warning> {
        self.parts.iter().flat_map(|p| p.warnings.iter())
    }

    /// Union of all non-omitted parts.
    pub fn solid(&self) -> Solid {
        Solid::union(self.parts.iter().map(|p| p.solid.clone()))
    }

    /// Consumes the scene, returning the union of its parts.
    pub fn into_solid(self) -> Solid {
        Solid::union(self.parts.into_iter().map(|p| p.solid))
    }

    /// Composed solid as OpenSCAD source.
    pub fn to_scad(&self) -> String {
        to_scad(&self.solid())
    }

    /// Evaluates every part through `kernel` and unions the results.
    ///
    /// # Errors
    ///
    /// `Construction` naming the component whose tree the kernel rejected,
    /// or `Composition` when the final union fails.
    pub fn realize<K>(&self, kernel: &K) -> VentResult<K::Shape>
    where
        K: GeometryKernel + ?Sized,
    {
        let shapes = self
            .parts
            .iter()
            .filter(|p| !p.is_omitted())
            .map(|p| {
                realize(&p.solid, kernel).map_err(|e| VentError::Construction {
                    component: p.component,
                    message: e.to_string(),
                })
            })
            .collect::<VentResult<Vec<_>>>()?;
        kernel
            .union(shapes)
            .map_err(|e| VentError::Composition(e.to_string()))
    }
}

/// Builds a vent cover with the default construction settings.
///
/// # Errors
///
/// Any validation error, before geometry is built.
///
/// # Example
///
/// ```rust
/// use vent_model::{compose, Component, ParameterSet};
///
/// let scene = compose(&ParameterSet::default()).unwrap();
/// assert_eq!(scene.parts().len(), 4);
/// assert!(scene.part(Component::HollowCone).is_some());
/// ```
pub fn compose(params: &ParameterSet) -> VentResult<Scene> {
    compose_with(params, &GlobalConfig::default())
}

/// Builds a vent cover with explicit construction settings.
///
/// # Errors
///
/// Any validation error, before geometry is built, then the first
/// assembler error in composition order.
pub fn compose_with(params: &ParameterSet, config: &GlobalConfig) -> VentResult<Scene> {
    validate(params)?;

    let ((plate, cone), (grid, stabilizers)) = rayon::join(
        || {
            rayon::join(
                || plate_with_rim(params, config),
                || hollow_cone(params, config),
            )
        },
        || {
            rayon::join(
                || stripe_grid(params, config),
                || stabilizer_stripes(params, config),
            )
        },
    );
    let scene = Scene {
        parts: vec![plate?, cone?, grid?, stabilizers?],
    };

    for warning in scene.warnings() {
        warn!(component = %warning.component(), "{warning}");
    }
    info!(
        parts = scene.parts.iter().filter(|p| !p.is_omitted()).count(),
        nodes = scene.solid().node_count(),
        "composed vent cover"
    );
    Ok(scene)
}
