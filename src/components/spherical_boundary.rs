#![warn(missing_docs)]
//! Refraction at a curved interface between two media
use super::{
    check_radius, check_refractive_index, checked_matrix, RayTransfer, DEFAULT_RADIUS,
    DEFAULT_REFRACTIVE_INDEX,
};
use crate::error::OptResult;
use nalgebra::{matrix, Matrix2};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
/// A spherical boundary with radius of curvature `r` between media with refractive indices `n1` (incoming side)
/// and `n2`.
///
/// The transfer matrix is
/// ```text
/// |        1              0    |
/// | -(n2 - n1)/(n2 * r)  n1/n2 |
/// ```
/// Curvature convention: a positive radius means the center of curvature lies behind the surface (convex as seen
/// by the incoming ray). A radius of +/- infinity corresponds to a [`PlanarBoundary`](super::PlanarBoundary).
pub struct SphericalBoundary {
    radius: f64,
    n1: f64,
    n2: f64,
    matrix: Matrix2<f64>,
}
impl SphericalBoundary {
    /// Creates a new [`SphericalBoundary`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the radius is zero or NaN.
    ///   - one of the refractive indices is zero, NaN or infinite.
    ///   - the parameters lead to an overflow of the matrix entries.
    pub fn new(radius: f64, n1: f64, n2: f64) -> OptResult<Self> {
        check_radius(radius, "radius")?;
        check_refractive_index(n1, "n1")?;
        check_refractive_index(n2, "n2")?;
        let matrix = checked_matrix(
            matrix![1.0, 0.0; -(n2 - n1) / (n2 * radius), n1 / n2],
            "SphericalBoundary",
        )?;
        Ok(Self {
            radius,
            n1,
            n2,
            matrix,
        })
    }
    /// Returns the radius of curvature of this [`SphericalBoundary`].
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
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
impl Default for SphericalBoundary {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            n1: DEFAULT_REFRACTIVE_INDEX,
            n2: DEFAULT_REFRACTIVE_INDEX,
            matrix: Matrix2::identity(),
        }
    }
}
impl RayTransfer for SphericalBoundary {
    fn matrix(&self) -> Matrix2<f64> {
        self.matrix
    }
}
impl Display for SphericalBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SphericalBoundary(n1 = {}, n2 = {}, r = {})",
            self.n1, self.n2, self.radius
        )
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        components::PlanarBoundary, error::OpticsError,
        utils::test_helper::test_helper::assert_matrix_eq,
    };
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    #[test]
    fn default() {
        let node = SphericalBoundary::default();
        assert_eq!(node.radius(), 1.0);
        assert_eq!(node.n1(), 1.003);
        assert_eq!(node.n2(), 1.003);
        assert_eq!(node, SphericalBoundary::new(1.0, 1.003, 1.003).unwrap());
    }
    #[test]
    fn new() {
        let node = SphericalBoundary::new(10.0, 1.0, 1.5).unwrap();
        assert_eq!(node.radius(), 10.0);
        assert_matrix_eq(
            &node.matrix(),
            &matrix![1.0, 0.0; -0.5 / 15.0, 1.0 / 1.5],
        );
    }
    #[test]
    fn new_wrong() {
        assert_matches!(
            SphericalBoundary::new(0.0, 1.0, 1.5),
            Err(OpticsError::DegenerateParameter(_))
        );
        assert_matches!(
            SphericalBoundary::new(f64::NAN, 1.0, 1.5),
            Err(OpticsError::TypeCondition(_))
        );
        assert_matches!(
            SphericalBoundary::new(1.0, 0.0, 1.5),
            Err(OpticsError::DegenerateParameter(_))
        );
        assert_matches!(
            SphericalBoundary::new(1.0, 1.0, 0.0),
            Err(OpticsError::DegenerateParameter(_))
        );
        assert_matches!(
            SphericalBoundary::new(1e-320, 1.0, 1.5),
            Err(OpticsError::DegenerateParameter(_))
        );
        assert_matches!(
            SphericalBoundary::new(1.0, 1e300, 1e-300),
            Err(OpticsError::DegenerateParameter(_))
        );
    }
    #[test]
    fn infinite_radius_is_planar() {
        let node = SphericalBoundary::new(f64::INFINITY, 1.0, 1.5).unwrap();
        assert_matrix_eq(&node.matrix(), &PlanarBoundary::new(1.0, 1.5).unwrap().matrix());
        let node = SphericalBoundary::new(f64::NEG_INFINITY, 1.0, 1.5).unwrap();
        assert_matrix_eq(&node.matrix(), &PlanarBoundary::new(1.0, 1.5).unwrap().matrix());
    }
    #[test]
    fn determinant() {
        let node = SphericalBoundary::new(-25.0, 1.5, 1.2).unwrap();
        assert_abs_diff_eq!(node.matrix().determinant(), 1.5 / 1.2, epsilon = 1e-15);
    }
    #[test]
    fn same_media_is_identity() {
        let node = SphericalBoundary::new(3.0, 1.33, 1.33).unwrap();
        assert_matrix_eq(&node.matrix(), &Matrix2::identity());
    }
    #[test]
    fn display() {
        assert_eq!(
            format!("{}", SphericalBoundary::new(10.0, 1.0, 1.5).unwrap()),
            "SphericalBoundary(n1 = 1, n2 = 1.5, r = 10)"
        );
    }
}
