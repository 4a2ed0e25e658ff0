#![warn(missing_docs)]
//! Curved mirror
use super::{check_radius, checked_matrix, RayTransfer, DEFAULT_RADIUS};
use crate::error::OptResult;
use nalgebra::{matrix, Matrix2};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
/// Reflection at a spherical mirror with radius of curvature `r`.
///
/// The transfer matrix is
/// ```text
/// |  1   0 |
/// | 2/r  1 |
/// ```
/// so a mirror with negative radius focuses a collimated beam at `|r|/2`. A radius of +/- infinity is equivalent
/// to a [`PlanarMirror`](super::PlanarMirror).
pub struct SphericalMirror {
    radius: f64,
    matrix: Matrix2<f64>,
}
impl SphericalMirror {
    /// Creates a new [`SphericalMirror`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the radius of curvature is zero, NaN or so small that the
    /// matrix overflows.
    pub fn new(radius: f64) -> OptResult<Self> {
        check_radius(radius, "radius")?;
        let matrix = checked_matrix(matrix![1.0, 0.0; 2.0 / radius, 1.0], "SphericalMirror")?;
        Ok(Self { radius, matrix })
    }
    /// Returns the radius of curvature of this [`SphericalMirror`].
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }
}
impl Default for SphericalMirror {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            matrix: matrix![1.0, 0.0; 2.0 / DEFAULT_RADIUS, 1.0],
        }
    }
}
impl RayTransfer for SphericalMirror {
    fn matrix(&self) -> Matrix2<f64> {
        self.matrix
    }
}
impl Display for SphericalMirror {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SphericalMirror(r = {})", self.radius)
    }
}
