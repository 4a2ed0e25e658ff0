#![warn(missing_docs)]
//! The sequential paraxial optical system
use crate::{
    components::{OpticalComponent, RayTransfer},
    error::{OpticsError, OptResult},
    utils::round_to_decimals,
    RayState,
};
use itertools::Itertools;
use log::debug;
use nalgebra::Matrix2;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Number of decimal places of the ray coordinates returned by [`OpticalSystem::propagate`].
pub const OUTPUT_DECIMALS: i32 = 2;

/// An ordered sequence of [`OpticalComponent`]s.
///
/// The insertion order is the order in which a ray passes the components: the element with index 0 is hit first.
/// The system is described by a single ray-transfer matrix which is the product of all element matrices in reverse
/// order.
///
/// ```
/// use abcd_optics::{components::{FreeSpace, ThinLens}, OpticalSystem, RayState};
///
/// let mut system = OpticalSystem::default();
/// system.add(FreeSpace::new(2.0).unwrap());
/// system.add(ThinLens::new(5.0).unwrap());
/// let ray = system.propagate(&RayState::new(1.0, 0.0).unwrap()).unwrap();
/// assert_eq!(ray.height(), 1.0);
/// assert_eq!(ray.angle(), -0.2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpticalSystem {
    name: String,
    #[serde(default)]
    elements: Vec<OpticalComponent>,
}
impl Default for OpticalSystem {
    fn default() -> Self {
        Self::new("OpticalSystem")
    }
}
impl OpticalSystem {
    /// Creates a new, empty [`OpticalSystem`] with the given name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            elements: Vec::new(),
        }
    }
    /// Returns the name of this [`OpticalSystem`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Returns the elements of this [`OpticalSystem`] in the order they are passed by a ray.
    #[must_use]
    pub fn elements(&self) -> &[OpticalComponent] {
        &self.elements
    }
    /// Returns the number of elements of this [`OpticalSystem`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }
    /// Returns `true` if this [`OpticalSystem`] does not contain any element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
    /// Append a component at the end of this [`OpticalSystem`].
    ///
    /// The new component is the last one a ray passes.
    pub fn add<C: Into<OpticalComponent>>(&mut self, component: C) {
        let component = component.into();
        debug!("{}: add element #{}: {component}", self.name, self.elements.len());
        self.elements.push(component);
    }
    /// Remove all elements from this [`OpticalSystem`].
    pub fn clear(&mut self) {
        debug!("{}: clear all elements", self.name);
        self.elements.clear();
    }
    /// Returns the ray-transfer matrix of the complete system.
    ///
    /// The matrix of the first element ends up as the right-most factor, so the result can directly be
    /// applied to an incoming ray state.
    ///
    /// # Errors
    ///
    /// This function will return an [`OpticsError::EmptySystem`] if the system does not contain any element.
    pub fn build_matrix(&self) -> OptResult<Matrix2<f64>> {
        let Some((last, preceding)) = self.elements.split_last() else {
            return Err(OpticsError::EmptySystem(format!(
                "{} has no elements. Cannot build a system matrix",
                self.name
            )));
        };
        let matrix = preceding
            .iter()
            .rev()
            .fold(last.matrix(), |acc, element| acc * element.matrix());
        debug!("{}: system matrix {:?}", self.name, matrix.as_slice());
        Ok(matrix)
    }
    /// Propagate a ray through this [`OpticalSystem`].
    ///
    /// Height and angle of the returned [`RayState`] are rounded to [`OUTPUT_DECIMALS`] decimal places.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the system does not contain any element ([`OpticsError::EmptySystem`]).
    ///   - the resulting ray is not finite (numerical overflow).
    pub fn propagate(&self, ray: &RayState) -> OptResult<RayState> {
        let out = self.build_matrix()? * ray.vector();
        RayState::new(
            round_to_decimals(out[0], OUTPUT_DECIMALS),
            round_to_decimals(out[1], OUTPUT_DECIMALS),
        )
        .map_err(|e| OpticsError::Other(format!("propagation through {} failed: {e}", self.name)))
    }
}
impl Display for OpticalSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}([{}])", self.name, self.elements.iter().join(", "))
    }
}
