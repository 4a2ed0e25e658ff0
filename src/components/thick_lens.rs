#![warn(missing_docs)]
//! Lens of finite thickness with two spherical surfaces
use super::{
    checked_matrix, FreeSpace, RayTransfer, SphericalBoundary, DEFAULT_RADIUS,
    DEFAULT_REFRACTIVE_INDEX,
};
use crate::error::OptResult;
use nalgebra::Matrix2;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
/// A thick lens made of a medium with refractive index `n2`, embedded in a medium with index `n1`.
///
/// The lens is modelled as the sequence
///   1. [`SphericalBoundary`] with radius `r1` from `n1` to `n2`
///   2. [`FreeSpace`] propagation of the center thickness `w`
///   3. [`SphericalBoundary`] with radius `r2` from `n2` back to `n1`
///
/// whose matrices are composed in reverse order.
pub struct ThickLens {
    r1: f64,
    r2: f64,
    width: f64,
    n1: f64,
    n2: f64,
    matrix: Matrix2<f64>,
}
impl ThickLens {
    /// Creates a new [`ThickLens`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - one of the radii is zero or NaN.
    ///   - the width is NaN or infinite.
    ///   - one of the refractive indices is zero, NaN or infinite.
    pub fn new(r1: f64, r2: f64, width: f64, n1: f64, n2: f64) -> OptResult<Self> {
        let front = SphericalBoundary::new(r1, n1, n2)?;
        let body = FreeSpace::new(width)?;
        let rear = SphericalBoundary::new(r2, n2, n1)?;
        let matrix = checked_matrix(rear.compose(&body) * front.matrix(), "ThickLens")?;
        Ok(Self {
            r1,
            r2,
            width,
            n1,
            n2,
            matrix,
        })
    }
    /// Returns the radius of curvature of the front surface.
    #[must_use]
    pub const fn r1(&self) -> f64 {
        self.r1
    }
    /// Returns the radius of curvature of the rear surface.
    #[must_use]
    pub const fn r2(&self) -> f64 {
        self.r2
    }
    /// Returns the center thickness of this [`ThickLens`].
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }
    /// Returns the refractive index of the surrounding medium.
    #[must_use]
    pub const fn n1(&self) -> f64 {
        self.n1
    }
    /// Returns the refractive index of the lens material.
    #[must_use]
    pub const fn n2(&self) -> f64 {
        self.n2
    }
}
impl Default for ThickLens {
    /// Zero thickness lens of the same material as its surrounding (identity matrix).
    fn default() -> Self {
        Self {
            r1: DEFAULT_RADIUS,
            r2: DEFAULT_RADIUS,
            width: 0.0,
            n1: DEFAULT_REFRACTIVE_INDEX,
            n2: DEFAULT_REFRACTIVE_INDEX,
            matrix: Matrix2::identity(),
        }
    }
}
impl RayTransfer for ThickLens {
    fn matrix(&self) -> Matrix2<f64> {
        self.matrix
    }
}
impl Display for ThickLens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ThickLens(r1 = {}, r2 = {}, w = {}, n1 = {}, n2 = {})",
            self.r1, self.r2, self.width, self.n1, self.n2
        )
    }
}
