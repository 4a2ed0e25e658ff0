#![warn(missing_docs)]
//! Error structures of the paraxial optics model
use std::{error::Error, fmt::Display};

/// Application specific Result type
pub type OptResult<T> = std::result::Result<T, OpticsError>;

/// Errors that can be returned by the optics model and its front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpticsError {
    /// an argument does not satisfy the required contract (e.g. a text which does not describe an optical
    /// component, a non-numeric or NaN value)
    TypeCondition(String),
    /// the system matrix of an [`OpticalSystem`](crate::OpticalSystem) without any elements was requested
    EmptySystem(String),
    /// a component parameter makes its transfer matrix undefined (zero focal length, zero radius, ...)
    DegenerateParameter(String),
    /// errors while reading or writing optical system files
    Document(String),
    /// errors console io
    Console(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for OpticsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeCondition(m) => {
                write!(f, "TypeCondition:{m}")
            }
            Self::EmptySystem(m) => {
                write!(f, "EmptySystem:{m}")
            }
            Self::DegenerateParameter(m) => {
                write!(f, "DegenerateParameter:{m}")
            }
            Self::Document(m) => {
                write!(f, "Document:{m}")
            }
            Self::Console(m) => {
                write!(f, "Console:{m}")
            }
            Self::Other(m) => write!(f, "Optics Error:Other:{m}"),
        }
    }
}
impl Error for OpticsError {}

impl std::convert::From<String> for OpticsError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
