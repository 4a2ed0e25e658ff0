//! Serialized form of the optical components.
//!
//! A file only contains the defining parameters. The matrices are rebuilt by the constructors which also
//! validate the parameters.
use super::{
    FreeSpace, OpticalComponent, PlanarBoundary, PlanarMirror, SphericalBoundary,
    SphericalMirror, ThickLens, ThinLens, DEFAULT_FOCAL_LENGTH, DEFAULT_RADIUS,
    DEFAULT_REFRACTIVE_INDEX,
};
use crate::error::{OpticsError, OptResult};
use serde::{Deserialize, Serialize};

const fn default_refractive_index() -> f64 {
    DEFAULT_REFRACTIVE_INDEX
}
const fn default_radius() -> f64 {
    DEFAULT_RADIUS
}
const fn default_focal_length() -> f64 {
    DEFAULT_FOCAL_LENGTH
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComponentDescription {
    FreeSpace {
        #[serde(default)]
        distance: f64,
    },
    PlanarBoundary {
        #[serde(default = "default_refractive_index")]
        n1: f64,
        #[serde(default = "default_refractive_index")]
        n2: f64,
    },
    SphericalBoundary {
        #[serde(default = "default_radius")]
        radius: f64,
        #[serde(default = "default_refractive_index")]
        n1: f64,
        #[serde(default = "default_refractive_index")]
        n2: f64,
    },
    ThinLens {
        #[serde(default = "default_focal_length")]
        focal_length: f64,
    },
    PlanarMirror,
    SphericalMirror {
        #[serde(default = "default_radius")]
        radius: f64,
    },
    ThickLens {
        #[serde(default = "default_radius")]
        r1: f64,
        #[serde(default = "default_radius")]
        r2: f64,
        #[serde(default)]
        width: f64,
        #[serde(default = "default_refractive_index")]
        n1: f64,
        #[serde(default = "default_refractive_index")]
        n2: f64,
    },
}
impl TryFrom<ComponentDescription> for OpticalComponent {
    type Error = OpticsError;

    fn try_from(description: ComponentDescription) -> OptResult<Self> {
        let component = match description {
            ComponentDescription::FreeSpace { distance } => FreeSpace::new(distance)?.into(),
            ComponentDescription::PlanarBoundary { n1, n2 } => PlanarBoundary::new(n1, n2)?.into(),
            ComponentDescription::SphericalBoundary { radius, n1, n2 } => {
                SphericalBoundary::new(radius, n1, n2)?.into()
            }
            ComponentDescription::ThinLens { focal_length } => ThinLens::new(focal_length)?.into(),
            ComponentDescription::PlanarMirror => PlanarMirror::new().into(),
            ComponentDescription::SphericalMirror { radius } => {
                SphericalMirror::new(radius)?.into()
            }
            ComponentDescription::ThickLens {
                r1,
                r2,
                width,
                n1,
                n2,
            } => ThickLens::new(r1, r2, width, n1, n2)?.into(),
        };
        Ok(component)
    }
}
impl From<OpticalComponent> for ComponentDescription {
    fn from(component: OpticalComponent) -> Self {
        match component {
            OpticalComponent::FreeSpace(c) => Self::FreeSpace {
                distance: c.distance(),
            },
            OpticalComponent::PlanarBoundary(c) => Self::PlanarBoundary {
                n1: c.n1(),
                n2: c.n2(),
            },
            OpticalComponent::SphericalBoundary(c) => Self::SphericalBoundary {
                radius: c.radius(),
                n1: c.n1(),
                n2: c.n2(),
            },
            OpticalComponent::ThinLens(c) => Self::ThinLens {
                focal_length: c.focal_length(),
            },
            OpticalComponent::PlanarMirror(_) => Self::PlanarMirror,
            OpticalComponent::SphericalMirror(c) => Self::SphericalMirror { radius: c.radius() },
            OpticalComponent::ThickLens(c) => Self::ThickLens {
                r1: c.r1(),
                r2: c.r2(),
                width: c.width(),
                n1: c.n1(),
                n2: c.n2(),
            },
        }
    }
}
