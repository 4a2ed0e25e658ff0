#![warn(missing_docs)]
//! Refraction at a flat interface between two media
use super::{check_refractive_index, checked_matrix, RayTransfer, DEFAULT_REFRACTIVE_INDEX};
use crate::error::OptResult;
use nalgebra::{matrix, Matrix2};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
/// A planar boundary between a medium with refractive index `n1` (incoming side) and `n2`.
///
/// The height of a ray is unchanged while its angle is scaled by `n1/n2` (paraxial Snell's law).
pub struct PlanarBoundary {
    n1: f64,
    n2: f64,
    matrix: Matrix2<f64>,
}
impl PlanarBoundary {
    /// Creates a new [`PlanarBoundary`].
    ///
    /// # Errors
    ///
    /// This function will return an error if one of the refractive indices is zero, NaN or infinite or if
    /// their ratio overflows.
    pub fn new(n1: f64, n2: f64) -> OptResult<Self> {
        check_refractive_index(n1, "n1")?;
        check_refractive_index(n2, "n2")?;
        let matrix = checked_matrix(matrix![1.0, 0.0; 0.0, n1 / n2], "PlanarBoundary")?;
        Ok(Self { n1, n2, matrix })
    }
    /// Returns the refractive index on the incoming side.
    #[must_use]
    pub const fn n1(&self) -> f64 {
        self.n1
    }
    /// Returns the refractive index on the outgoing side.
    #[must_use]
    pub const fn n2(&self) -> f64 {
        self.n2
    }
}
impl Default for PlanarBoundary {
    fn default() -> Self {
        Self {
            n1: DEFAULT_REFRACTIVE_INDEX,
            n2: DEFAULT_REFRACTIVE_INDEX,
            matrix: Matrix2::identity(),
        }
    }
}
impl RayTransfer for PlanarBoundary {
    fn matrix(&self) -> Matrix2<f64> {
        self.matrix
    }
}
impl Display for PlanarBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PlanarBoundary(n1 = {}, n2 = {})", self.n1, self.n2)
    }
}
