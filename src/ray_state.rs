#![warn(missing_docs)]
//! The transverse state of a paraxial ray.
use crate::error::{OpticsError, OptResult};
use nalgebra::Vector2;
use std::{fmt::Display, str::FromStr};

/// Height and angle of a ray (or the chief ray of a beam) at a reference plane.
///
/// The state is stored as the column vector `[height; angle]` which is left-multiplied by ray-transfer
/// matrices. A [`RayState`] is never modified in place. Propagation always creates a new one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayState {
    vector: Vector2<f64>,
}
impl RayState {
    /// Creates a new [`RayState`].
    ///
    /// # Errors
    ///
    /// This function will return an [`OpticsError::TypeCondition`] if height or angle are NaN or infinite.
    pub fn new(height: f64, angle: f64) -> OptResult<Self> {
        Self::try_from(Vector2::new(height, angle))
    }
    /// Returns the height of this [`RayState`].
    #[must_use]
    pub fn height(&self) -> f64 {
        self.vector[0]
    }
    /// Returns the angle of this [`RayState`].
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.vector[1]
    }
    /// Returns the state as `[height; angle]` column vector.
    #[must_use]
    pub const fn vector(&self) -> &Vector2<f64> {
        &self.vector
    }
}
impl Default for RayState {
    /// A ray on the optical axis travelling parallel to it.
    fn default() -> Self {
        Self {
            vector: Vector2::zeros(),
        }
    }
}
impl TryFrom<Vector2<f64>> for RayState {
    type Error = OpticsError;

    fn try_from(vector: Vector2<f64>) -> OptResult<Self> {
        if !vector[0].is_finite() {
            return Err(OpticsError::TypeCondition(format!(
                "ray height must be a finite number but was {}",
                vector[0]
            )));
        }
        if !vector[1].is_finite() {
            return Err(OpticsError::TypeCondition(format!(
                "ray angle must be a finite number but was {}",
                vector[1]
            )));
        }
        Ok(Self { vector })
    }
}
impl Display for RayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(height = {}, angle = {})", self.height(), self.angle())
    }
}
fn parse_coordinate(value: &str, name: &str) -> OptResult<f64> {
    value.trim().parse::<f64>().map_err(|_| {
        OpticsError::TypeCondition(format!("ray {name} '{}' is not a number", value.trim()))
    })
}
impl FromStr for RayState {
    type Err = OpticsError;

    /// Parses `"height, angle"` or the label form `"(height = 1, angle = 0)"`.
    fn from_str(s: &str) -> OptResult<Self> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|t| t.strip_suffix(')'))
            .unwrap_or(trimmed);
        let parts: Vec<&str> = inner.split(',').collect();
        let [height, angle] = parts.as_slice() else {
            return Err(OpticsError::TypeCondition(format!(
                "'{trimmed}' is not a ray state. Expected \"height, angle\""
            )));
        };
        let (height, angle) = (*height, *angle);
        let height = height
            .trim()
            .strip_prefix("height")
            .and_then(|h| h.trim_start().strip_prefix('='))
            .unwrap_or(height);
        let angle = angle
            .trim()
            .strip_prefix("angle")
            .and_then(|a| a.trim_start().strip_prefix('='))
            .unwrap_or(angle);
        Self::new(
            parse_coordinate(height, "height")?,
            parse_coordinate(angle, "angle")?,
        )
    }
}
