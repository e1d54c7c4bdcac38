//! Centralized configuration values shared across the composition pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Overshoot applied to subtracted and clipping volumes.
///
/// A cutter whose face is coplanar with a face of the solid it cuts leaves
/// the boolean kernel with an ambiguous classification. Every cutter in the
/// pipeline is extended past the faces it must remove by this margin, and
/// thin hull sections use it as their thickness.
///
/// Whether `0.1` is sufficient depends on the epsilon of the kernel that
/// eventually evaluates the tree. Callers with a coarser kernel can raise it
/// through [`GlobalConfig`].
///
/// # Examples
/// ```
/// use config::constants::BOOLEAN_EPSILON;
/// assert!(BOOLEAN_EPSILON > 0.0 && BOOLEAN_EPSILON < 1.0);
/// ```
pub const BOOLEAN_EPSILON: f64 = 0.1;

/// Extra radial reach of slot cutters beyond the widest cone radius.
///
/// # Examples
/// ```
/// use config::constants::WEDGE_RADIAL_MARGIN;
/// let depth = 48.0_f64.max(47.5) + WEDGE_RADIAL_MARGIN;
/// assert_eq!(depth, 49.0);
/// ```
pub const WEDGE_RADIAL_MARGIN: f64 = 1.0;

/// Tolerance for comparing derived lengths (radii, offsets) in validation.
///
/// # Examples
/// ```
/// use config::constants::LENGTH_TOLERANCE;
/// assert!(LENGTH_TOLERANCE < 1.0e-6);
/// ```
pub const LENGTH_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default tessellation fragment count for circular primitives.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_FRAGMENTS;
/// assert!(DEFAULT_FRAGMENTS >= 32);
/// ```
pub const DEFAULT_FRAGMENTS: u32 = 128;

/// Minimum number of fragments for any circle: a triangle.
pub const MIN_FRAGMENTS: u32 = 3;

/// Maximum number of fragments for any circle.
///
/// Safety limit to prevent tessellation requests that would exhaust the
/// kernel's memory.
pub const MAX_FRAGMENTS: u32 = 1000;

/// Maximum number of instances a linear tiling may produce.
///
/// The default stripe grid needs 43 tiles. A step small enough to exceed
/// this limit would build a tree no kernel can evaluate.
///
/// # Examples
/// ```
/// use config::constants::MAX_TILES;
/// assert!(MAX_TILES >= 1_000);
/// ```
pub const MAX_TILES: usize = 10_000;

/// Clamps a requested fragment count into `MIN_FRAGMENTS..=MAX_FRAGMENTS`.
///
/// # Examples
/// ```
/// use config::constants::{clamp_fragments, MIN_FRAGMENTS};
/// assert_eq!(clamp_fragments(0), MIN_FRAGMENTS);
/// assert_eq!(clamp_fragments(64), 64);
/// ```
#[inline]
pub fn clamp_fragments(requested: u32) -> u32 {
    requested.clamp(MIN_FRAGMENTS, MAX_FRAGMENTS)
}

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of construction settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.boolean_epsilon > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Overshoot margin applied to cutters and thin hull sections.
    pub boolean_epsilon: f64,
    /// Fragment count used when a caller supplies none.
    pub default_fragments: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// margin and fragment count.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(0.05, 64).expect("valid config");
    /// assert_eq!(cfg.default_fragments, 64);
    /// ```
    pub fn new(boolean_epsilon: f64, default_fragments: u32) -> Result<Self, ConfigError> {
        if !boolean_epsilon.is_finite() || boolean_epsilon <= 0.0 {
            return Err(ConfigError::InvalidEpsilon(boolean_epsilon));
        }
        if !(MIN_FRAGMENTS..=MAX_FRAGMENTS).contains(&default_fragments) {
            return Err(ConfigError::InvalidFragments(default_fragments));
        }
        Ok(Self {
            boolean_epsilon,
            default_fragments,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            boolean_epsilon: BOOLEAN_EPSILON,
            default_fragments: DEFAULT_FRAGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the overshoot margin is zero, negative or not finite.
    InvalidEpsilon(f64),
    /// Raised when the fragment count is outside the supported range.
    InvalidFragments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidEpsilon(value) => {
                write!(f, "boolean_epsilon must be positive and finite: {value}")
            }
            ConfigError::InvalidFragments(value) => {
                write!(
                    f,
                    "default_fragments must be within {MIN_FRAGMENTS}..={MAX_FRAGMENTS}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
