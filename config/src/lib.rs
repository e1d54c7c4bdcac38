//! # Config Crate
//!
//! Centralized configuration constants for the vent cover composition
//! pipeline. Every overshoot margin, tessellation bound and tunable default
//! lives here so the geometry crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{clamp_fragments, BOOLEAN_EPSILON, MAX_FRAGMENTS};
//!
//! // Subtracted volumes overshoot their target faces by this margin
//! let hole_height = 2.0 + 2.0 * BOOLEAN_EPSILON;
//! assert!(hole_height > 2.0);
//!
//! // Fragment counts are always clamped before reaching a primitive
//! assert_eq!(clamp_fragments(1_000_000), MAX_FRAGMENTS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Kernel-Agnostic**: No values tied to a particular mesh backend
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
