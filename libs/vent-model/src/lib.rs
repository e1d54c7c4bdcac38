//! # Vent Model
//!
//! Parametric vent cover: a filleted plate with optional rim, a hollow
//! slotted mounting cone, and a sheared airflow grid with stabilizers, all
//! composed into one [`Solid`](vent_csg::Solid) tree.
//!
//! ## Architecture
//!
//! ```text
//! ParameterSet → validate → assemblers → scene → Solid → GeometryKernel
//! ```
//!
//! ## Example
//!
//! ```rust
//! use vent_model::{compose, ParameterSet};
//!
//! let params = ParameterSet { slot_count: 8, ..ParameterSet::default() };
//! let scene = compose(&params).unwrap();
//! assert_eq!(scene.warnings().count(), 0);
//! let scad = scene.to_scad();
//! assert!(scad.starts_with("union()"));
//! ```

pub mod assemblers;
pub mod error;
pub mod params;
pub mod scene;
pub mod validate;

// Re-export public API
pub use error::{Component, ConeEnd, VentError, VentResult, Warning};
pub use params::{ConeRadii, ParameterSet};
pub use scene::{compose, compose_with, Scene};
pub use validate::validate;
