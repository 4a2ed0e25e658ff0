#![warn(missing_docs)]
//! This module contains the optical components (free space, boundaries, lenses, mirrors) and their
//! ray-transfer matrices.
//!
//! Each component computes its 2x2 matrix once during construction. The matrix maps the incoming
//! [`RayState`] `[height; angle]` onto the outgoing one. All components are bundled in the closed
//! [`OpticalComponent`] enum which is the element type of an [`OpticalSystem`](crate::OpticalSystem).
mod description;
mod free_space;
mod label;
mod planar_boundary;
mod planar_mirror;
mod spherical_boundary;
mod spherical_mirror;
mod thick_lens;
mod thin_lens;

pub use free_space::FreeSpace;
pub use planar_boundary::PlanarBoundary;
pub use planar_mirror::PlanarMirror;
pub use spherical_boundary::SphericalBoundary;
pub use spherical_mirror::SphericalMirror;
pub use thick_lens::ThickLens;
pub use thin_lens::ThinLens;

use crate::{
    error::{OpticsError, OptResult},
    utils::math_utils::is_finite_matrix,
    RayState,
};
use description::ComponentDescription;
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use strum::EnumIter;

/// Refractive index used for boundaries and thick lenses if not specified otherwise.
pub const DEFAULT_REFRACTIVE_INDEX: f64 = 1.003;
/// Radius of curvature used for spherical surfaces if not specified otherwise.
pub const DEFAULT_RADIUS: f64 = 1.0;
/// Focal length used for thin lenses if not specified otherwise.
pub const DEFAULT_FOCAL_LENGTH: f64 = 1.0;

/// Everything which is described by a first-order ray-transfer matrix.
pub trait RayTransfer {
    /// Returns the 2x2 ray-transfer (ABCD) matrix.
    fn matrix(&self) -> Matrix2<f64>;
    /// Returns the matrix product `M(self) * M(other)`.
    ///
    /// Matrices are composed in reverse traversal order: the resulting matrix describes a ray
    /// passing `other` first and `self` afterwards.
    fn compose<T: RayTransfer + ?Sized>(&self, other: &T) -> Matrix2<f64> {
        self.matrix() * other.matrix()
    }
    /// Returns the `[height; angle]` vector of the given [`RayState`] after passing this element.
    fn apply(&self, ray: &RayState) -> Vector2<f64> {
        self.matrix() * ray.vector()
    }
}

/// The seven kinds of optical components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, strum::Display)]
pub enum ComponentKind {
    /// see [`FreeSpace`]
    FreeSpace,
    /// see [`PlanarBoundary`]
    PlanarBoundary,
    /// see [`SphericalBoundary`]
    SphericalBoundary,
    /// see [`ThinLens`]
    ThinLens,
    /// see [`PlanarMirror`]
    PlanarMirror,
    /// see [`SphericalMirror`]
    SphericalMirror,
    /// see [`ThickLens`]
    ThickLens,
}

/// A named numeric construction parameter of a [`ComponentKind`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameter {
    /// short name as used in the component labels (e.g. `f`)
    pub key: &'static str,
    /// human readable description
    pub description: &'static str,
    /// value used if the parameter is not given
    pub default: f64,
}
const fn param(key: &'static str, description: &'static str, default: f64) -> Parameter {
    Parameter {
        key,
        description,
        default,
    }
}
const N1: Parameter = param("n1", "refractive index n1", DEFAULT_REFRACTIVE_INDEX);
const N2: Parameter = param("n2", "refractive index n2", DEFAULT_REFRACTIVE_INDEX);
const RADIUS: Parameter = param("r", "radius", DEFAULT_RADIUS);
const FREE_SPACE_PARAMS: [Parameter; 1] = [param("d", "distance", 0.0)];
const PLANAR_BOUNDARY_PARAMS: [Parameter; 2] = [N1, N2];
const SPHERICAL_BOUNDARY_PARAMS: [Parameter; 3] = [RADIUS, N1, N2];
const THIN_LENS_PARAMS: [Parameter; 1] = [param("f", "focal length", DEFAULT_FOCAL_LENGTH)];
const PLANAR_MIRROR_PARAMS: [Parameter; 0] = [];
const SPHERICAL_MIRROR_PARAMS: [Parameter; 1] = [RADIUS];
const THICK_LENS_PARAMS: [Parameter; 5] = [
    param("r1", "radius r1", DEFAULT_RADIUS),
    param("r2", "radius r2", DEFAULT_RADIUS),
    param("w", "width", 0.0),
    N1,
    N2,
];

impl ComponentKind {
    /// Returns the construction parameters of this kind in the order expected by [`ComponentKind::build`].
    #[must_use]
    pub const fn parameters(&self) -> &'static [Parameter] {
        match self {
            Self::FreeSpace => &FREE_SPACE_PARAMS,
            Self::PlanarBoundary => &PLANAR_BOUNDARY_PARAMS,
            Self::SphericalBoundary => &SPHERICAL_BOUNDARY_PARAMS,
            Self::ThinLens => &THIN_LENS_PARAMS,
            Self::PlanarMirror => &PLANAR_MIRROR_PARAMS,
            Self::SphericalMirror => &SPHERICAL_MIRROR_PARAMS,
            Self::ThickLens => &THICK_LENS_PARAMS,
        }
    }
    /// Construct an [`OpticalComponent`] of this kind from the given parameter values.
    ///
    /// The values must be given in the order of [`ComponentKind::parameters`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the number of values does not match the number of parameters of this kind.
    ///   - the constructor of the component rejects the values.
    pub fn build(&self, values: &[f64]) -> OptResult<OpticalComponent> {
        if values.len() != self.parameters().len() {
            return Err(OpticsError::TypeCondition(format!(
                "{self} needs {} parameter(s) but {} were given",
                self.parameters().len(),
                values.len()
            )));
        }
        let component = match (self, values) {
            (Self::FreeSpace, &[d]) => FreeSpace::new(d)?.into(),
            (Self::PlanarBoundary, &[n1, n2]) => PlanarBoundary::new(n1, n2)?.into(),
            (Self::SphericalBoundary, &[r, n1, n2]) => SphericalBoundary::new(r, n1, n2)?.into(),
            (Self::ThinLens, &[f]) => ThinLens::new(f)?.into(),
            (Self::PlanarMirror, &[]) => PlanarMirror::new().into(),
            (Self::SphericalMirror, &[r]) => SphericalMirror::new(r)?.into(),
            (Self::ThickLens, &[r1, r2, w, n1, n2]) => ThickLens::new(r1, r2, w, n1, n2)?.into(),
            _ => {
                return Err(OpticsError::Other(format!(
                    "parameter list of {self} does not match its definition"
                )))
            }
        };
        Ok(component)
    }
    /// Construct an [`OpticalComponent`] of this kind with all parameters set to their defaults.
    ///
    /// # Errors
    ///
    /// This function only returns an error if a default value is rejected by the constructor.
    pub fn build_default(&self) -> OptResult<OpticalComponent> {
        let values: Vec<f64> = self.parameters().iter().map(|p| p.default).collect();
        self.build(&values)
    }
}

/// An optical component of a paraxial [`OpticalSystem`](crate::OpticalSystem).
///
/// The component only stores its defining parameters together with the precomputed transfer matrix. It
/// cannot be modified after construction.
///
/// ## Serialization
/// Only the parameters are serialized. During deserialization the matrix is recomputed by the
/// (validating) constructor of the respective component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ComponentDescription", into = "ComponentDescription")]
pub enum OpticalComponent {
    /// propagation through free space
    FreeSpace(FreeSpace),
    /// refraction at a flat surface
    PlanarBoundary(PlanarBoundary),
    /// refraction at a spherical surface
    SphericalBoundary(SphericalBoundary),
    /// ideal thin lens
    ThinLens(ThinLens),
    /// flat mirror
    PlanarMirror(PlanarMirror),
    /// spherical mirror
    SphericalMirror(SphericalMirror),
    /// lens with finite thickness
    ThickLens(ThickLens),
}
impl OpticalComponent {
    /// Returns the [`ComponentKind`] of this [`OpticalComponent`].
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::FreeSpace(_) => ComponentKind::FreeSpace,
            Self::PlanarBoundary(_) => ComponentKind::PlanarBoundary,
            Self::SphericalBoundary(_) => ComponentKind::SphericalBoundary,
            Self::ThinLens(_) => ComponentKind::ThinLens,
            Self::PlanarMirror(_) => ComponentKind::PlanarMirror,
            Self::SphericalMirror(_) => ComponentKind::SphericalMirror,
            Self::ThickLens(_) => ComponentKind::ThickLens,
        }
    }
}
impl RayTransfer for OpticalComponent {
    fn matrix(&self) -> Matrix2<f64> {
        match self {
            Self::FreeSpace(c) => c.matrix(),
            Self::PlanarBoundary(c) => c.matrix(),
            Self::SphericalBoundary(c) => c.matrix(),
            Self::ThinLens(c) => c.matrix(),
            Self::PlanarMirror(c) => c.matrix(),
            Self::SphericalMirror(c) => c.matrix(),
            Self::ThickLens(c) => c.matrix(),
        }
    }
}
impl Display for OpticalComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FreeSpace(c) => write!(f, "{c}"),
            Self::PlanarBoundary(c) => write!(f, "{c}"),
            Self::SphericalBoundary(c) => write!(f, "{c}"),
            Self::ThinLens(c) => write!(f, "{c}"),
            Self::PlanarMirror(c) => write!(f, "{c}"),
            Self::SphericalMirror(c) => write!(f, "{c}"),
            Self::ThickLens(c) => write!(f, "{c}"),
        }
    }
}
macro_rules! impl_from_component {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for OpticalComponent {
                fn from(component: $variant) -> Self {
                    Self::$variant(component)
                }
            }
        )*
    };
}
impl_from_component!(
    FreeSpace,
    PlanarBoundary,
    SphericalBoundary,
    ThinLens,
    PlanarMirror,
    SphericalMirror,
    ThickLens
);

fn check_not_nan(value: f64, name: &str) -> OptResult<()> {
    if value.is_nan() {
        return Err(OpticsError::TypeCondition(format!(
            "{name} must be a number but was NaN"
        )));
    }
    Ok(())
}
/// Lengths which enter the matrix directly (distance, width) must be finite.
fn check_finite(value: f64, name: &str) -> OptResult<()> {
    check_not_nan(value, name)?;
    if value.is_infinite() {
        return Err(OpticsError::DegenerateParameter(format!(
            "{name} must be finite"
        )));
    }
    Ok(())
}
fn check_refractive_index(value: f64, name: &str) -> OptResult<()> {
    check_finite(value, name)?;
    if value == 0.0 {
        return Err(OpticsError::DegenerateParameter(format!(
            "refractive index {name} must not be zero"
        )));
    }
    Ok(())
}
/// +/- infinity is a valid radius of curvature (flat surface)
fn check_radius(value: f64, name: &str) -> OptResult<()> {
    check_not_nan(value, name)?;
    if value == 0.0 {
        return Err(OpticsError::DegenerateParameter(format!(
            "{name} must not be zero"
        )));
    }
    Ok(())
}
fn check_focal_length(value: f64) -> OptResult<()> {
    check_not_nan(value, "focal length")?;
    if value == 0.0 {
        return Err(OpticsError::DegenerateParameter(
            "focal length must not be zero".into(),
        ));
    }
    Ok(())
}
fn checked_matrix(matrix: Matrix2<f64>, component: &str) -> OptResult<Matrix2<f64>> {
    if is_finite_matrix(&matrix) {
        Ok(matrix)
    } else {
        Err(OpticsError::DegenerateParameter(format!(
            "parameters of {component} lead to a non-finite transfer matrix"
        )))
    }
}
