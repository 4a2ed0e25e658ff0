//! Flat mirror
use super::RayTransfer;
use nalgebra::Matrix2;
use std::fmt::Display;

/// Reflection at a flat mirror. In the unfolded representation its transfer matrix is the identity.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarMirror {
    matrix: Matrix2<f64>,
}
impl PlanarMirror {
    /// Creates a new [`PlanarMirror`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            matrix: Matrix2::identity(),
        }
    }
}
impl Default for PlanarMirror {
    fn default() -> Self {
        Self::new()
    }
}
impl RayTransfer for PlanarMirror {
    fn matrix(&self) -> Matrix2<f64> {
        self.matrix
    }
}
impl Display for PlanarMirror {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PlanarMirror")
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::RayState;
    #[test]
    fn new() {
        let node = PlanarMirror::new();
        assert_eq!(node.matrix(), Matrix2::identity());
        assert_eq!(node.matrix().determinant(), 1.0);
        assert_eq!(node, PlanarMirror::default());
    }
    #[test]
    fn apply() {
        let ray = RayState::new(1.5, -0.3).unwrap();
        assert_eq!(PlanarMirror::new().apply(&ray), *ray.vector());
    }
    #[test]
    fn display() {
        assert_eq!(format!("{}", PlanarMirror::new()), "PlanarMirror");
    }
}
