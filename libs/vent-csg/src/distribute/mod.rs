//! # Distribution Policies
//!
//! Placement generators and the helpers that turn them into repeated
//! geometry.
//!
//! Placements are always computed from an index, a count and a span, never
//! accumulated, so every generator is a finite, restartable (`Clone`)
//! iterator with no shared state.
//!
//! | policy | placement of instance `i` |
//! |--------|---------------------------|
//! | radial | `i · 360° / count` |
//! | linear | `-extent + i · step` while `≤ extent` |
//! | symmetric | `(i − (count − 1) / 2) · spacing` |

use config::constants::{LENGTH_TOLERANCE, MAX_TILES};

use crate::error::{CsgError, CsgResult};
use crate::geometry::Solid;

// =============================================================================
// RADIAL
// =============================================================================

/// Angles in degrees of `count` evenly spaced instances around Z.
#[derive(Debug, Clone)]
pub struct RadialAngles {
    count: u32,
    index: u32,
}

/// Angles `i · 360 / count` for `i` in `0..count`.
///
/// A count of zero yields nothing.
///
/// ```rust
/// use vent_csg::distribute::radial_angles;
///
/// let angles: Vec<f64> = radial_angles(4).collect();
/// assert_eq!(angles, vec![0.0, 90.0, 180.0, 270.0]);
/// ```
pub fn radial_angles(count: u32) -> RadialAngles {
    RadialAngles { count, index: 0 }
}

impl Iterator for RadialAngles {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.count {
            return None;
        }
        let angle = f64::from(self.index) * 360.0 / f64::from(self.count);
        self.index += 1;
        Some(angle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.count - self.index) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RadialAngles {}

/// Union of `count` copies of `primitive` rotated about Z.
pub fn distribute_radially(primitive: &Solid, count: u32) -> Solid {
    Solid::union(radial_angles(count).map(|angle| primitive.clone().rotate_z(angle)))
}

// =============================================================================
// LINEAR
// =============================================================================

/// Positions from `-extent` to `+extent` in increments of `step`.
#[derive(Debug, Clone)]
pub struct LinearPositions {
    extent: f64,
    step: f64,
    count: usize,
    index: usize,
}

/// Number of positions `-extent + i · step` that do not pass `+extent`.
///
/// # Errors
///
/// `NonPositiveStep` when `step` is zero, negative or non-finite,
/// `InvalidArgument` when `extent` is negative or non-finite, and
/// `TooManyTiles` when the count would exceed [`MAX_TILES`].
///
/// ```rust
/// use vent_csg::distribute::linear_count;
///
/// assert_eq!(linear_count(95.0, 4.5).unwrap(), 43);
/// assert!(linear_count(95.0, 1e-5).is_err());
/// ```
pub fn linear_count(extent: f64, step: f64) -> CsgResult<usize> {
    if !step.is_finite() || step <= 0.0 {
        return Err(CsgError::NonPositiveStep(step));
    }
    if !extent.is_finite() || extent < 0.0 {
        return Err(CsgError::InvalidArgument {
            name: "extent",
            value: extent,
            reason: "must be finite and not negative",
        });
    }
    let intervals = ((2.0 * extent + LENGTH_TOLERANCE) / step).floor();
    if intervals >= MAX_TILES as f64 {
        return Err(CsgError::TooManyTiles {
            span: 2.0 * extent,
            step,
            limit: MAX_TILES,
        });
    }
    // Bounded by MAX_TILES above, so the cast is exact.
    Ok(intervals as usize + 1)
}

/// Positions `-extent + i · step` while they do not pass `+extent`.
///
/// # Errors
///
/// Same as [`linear_count`].
///
/// ```rust
/// use vent_csg::distribute::linear_positions;
///
/// let xs: Vec<f64> = linear_positions(2.0, 1.5).unwrap().collect();
/// assert_eq!(xs, vec![-2.0, -0.5, 1.0]);
/// ```
pub fn linear_positions(extent: f64, step: f64) -> CsgResult<LinearPositions> {
    Ok(LinearPositions {
        extent,
        step,
        count: linear_count(extent, step)?,
        index: 0,
    })
}

impl Iterator for LinearPositions {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.count {
            return None;
        }
        let position = -self.extent + self.index as f64 * self.step;
        self.index += 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for LinearPositions {}

/// Union of the factory's output at every linear position.
///
/// # Errors
///
/// Same as [`linear_positions`].
pub fn tile_linearly<F>(extent: f64, step: f64, factory: F) -> CsgResult<Solid>
where
    F: FnMut(f64) -> Solid,
{
    Ok(Solid::union(linear_positions(extent, step)?.map(factory)))
}

// =============================================================================
// SYMMETRIC
// =============================================================================

/// Offsets of `count` instances centred on zero.
#[derive(Debug, Clone)]
pub struct SymmetricOffsets {
    count: u32,
    spacing: f64,
    index: u32,
}

/// Offsets `(i − (count − 1) / 2) · spacing` for `i` in `0..count`.
///
/// Odd counts put one instance on zero, even counts straddle it.
///
/// ```rust
/// use vent_csg::distribute::symmetric_offsets;
///
/// let ys: Vec<f64> = symmetric_offsets(3, 10.0).collect();
/// assert_eq!(ys, vec![-10.0, 0.0, 10.0]);
/// ```
pub fn symmetric_offsets(count: u32, spacing: f64) -> SymmetricOffsets {
    SymmetricOffsets {
        count,
        spacing,
        index: 0,
    }
}

impl Iterator for SymmetricOffsets {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.count {
            return None;
        }
        let middle = (f64::from(self.count) - 1.0) / 2.0;
        let offset = (f64::from(self.index) - middle) * self.spacing;
        self.index += 1;
        Some(offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.count - self.index) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for SymmetricOffsets {}

/// Union of the factory's output at every symmetric offset.
pub fn distribute_symmetric<F>(count: u32, spacing: f64, factory: F) -> Solid
where
    F: FnMut(f64) -> Solid,
{
    Solid::union(symmetric_offsets(count, spacing).map(factory))
}
