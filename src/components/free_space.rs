#![warn(missing_docs)]
//! Propagation through a homogeneous medium
use super::{check_finite, RayTransfer};
use crate::error::OptResult;
use nalgebra::{matrix, Matrix2};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
/// Free-space propagation over a given (axial) distance.
///
/// The transfer matrix is
/// ```text
/// | 1  d |
/// | 0  1 |
/// ```
/// A ray keeps its angle while its height changes by `d * angle`. Negative distances are allowed
/// (e.g. for modelling principal plane shifts).
pub struct FreeSpace {
    distance: f64,
    matrix: Matrix2<f64>,
}
impl FreeSpace {
    /// Creates a new [`FreeSpace`] propagation of the given distance.
    ///
    /// # Errors
    ///
    /// This function will return an error if the distance is NaN or infinite.
    pub fn new(distance: f64) -> OptResult<Self> {
        check_finite(distance, "distance")?;
        Ok(Self {
            distance,
            matrix: matrix![1.0, distance; 0.0, 1.0],
        })
    }
    /// Returns the propagation distance of this [`FreeSpace`].
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }
}
impl Default for FreeSpace {
    /// Zero-length propagation (identity matrix).
    fn default() -> Self {
        Self {
            distance: 0.0,
            matrix: Matrix2::identity(),
        }
    }
}
impl RayTransfer for FreeSpace {
    fn matrix(&self) -> Matrix2<f64> {
        self.matrix
    }
}
impl Display for FreeSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FreeSpace(d = {})", self.distance)
    }
}
