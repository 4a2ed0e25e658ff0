//! Paraxial optics based on ray-transfer (ABCD) matrices.
//!
//! Every optical element (free-space propagation, refraction at a boundary, reflection at a mirror, lens) is
//! represented by a 2x2 matrix acting on the ray state `[height; angle]`. An [`OpticalSystem`] is an ordered
//! sequence of such [`OpticalComponent`](components::OpticalComponent)s. Propagating a ray through the system means
//! multiplying the element matrices in reverse order and applying the resulting system matrix to the ray.
//!
//! The model is strictly first-order (linear) paraxial optics in one transverse dimension.
#![allow(clippy::module_name_repetitions)]

pub mod components;
pub mod console;
pub mod document;
pub mod error;
pub mod optical_system;
pub mod ray_state;
pub mod utils;

pub use components::RayTransfer;
pub use document::SystemDocument;
pub use optical_system::OpticalSystem;
pub use ray_state::RayState;

/// Return the version information of the currently built executable.
#[must_use]
pub fn get_version() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
