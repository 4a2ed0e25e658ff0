#![warn(missing_docs)]
//! Ideal thin lens
use super::{check_focal_length, checked_matrix, RayTransfer, DEFAULT_FOCAL_LENGTH};
use crate::error::OptResult;
use nalgebra::{matrix, Matrix2};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
/// An ideal, infinitely thin lens with focal length `f`.
///
/// Positive focal lengths describe focusing, negative ones defocusing lenses. An infinite focal
/// length has no refractive power at all.
pub struct ThinLens {
    focal_length: f64,
    matrix: Matrix2<f64>,
}
impl ThinLens {
    /// Creates a new [`ThinLens`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the focal length is zero or NaN or so small that the refractive
    /// power overflows.
    pub fn new(focal_length: f64) -> OptResult<Self> {
        check_focal_length(focal_length)?;
        let matrix = checked_matrix(matrix![1.0, 0.0; -1.0 / focal_length, 1.0], "ThinLens")?;
        Ok(Self {
            focal_length,
            matrix,
        })
    }
    /// Returns the focal length of this [`ThinLens`].
    #[must_use]
    pub const fn focal_length(&self) -> f64 {
        self.focal_length
    }
}
impl Default for ThinLens {
    fn default() -> Self {
        Self {
            focal_length: DEFAULT_FOCAL_LENGTH,
            matrix: matrix![1.0, 0.0; -1.0 / DEFAULT_FOCAL_LENGTH, 1.0],
        }
    }
}
impl RayTransfer for ThinLens {
    fn matrix(&self) -> Matrix2<f64> {
        self.matrix
    }
}
impl Display for ThinLens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ThinLens(f = {})", self.focal_length)
    }
}
