#![warn(missing_docs)]
//! Reading and writing of optical systems.
//!
//! An [`OpticalSystem`] is stored in a `.ron` file together with the file format version. Only the component
//! parameters are written. The transfer matrices are recomputed (and validated) while loading.
use crate::{
    error::{OpticsError, OptResult},
    OpticalSystem,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

/// Version of the system file format written by this crate.
pub const FILE_VERSION: &str = "1.0";
/// File extension of system files.
pub const FILE_EXTENSION: &str = "ron";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
/// The content of a system file.
pub struct SystemDocument {
    file_version: String,
    #[serde(default)]
    system: OpticalSystem,
}
impl Default for SystemDocument {
    fn default() -> Self {
        Self {
            file_version: FILE_VERSION.to_string(),
            system: OpticalSystem::default(),
        }
    }
}
impl SystemDocument {
    /// Creates a new [`SystemDocument`] containing the given [`OpticalSystem`].
    #[must_use]
    pub fn new(system: OpticalSystem) -> Self {
        Self {
            system,
            ..Default::default()
        }
    }
    /// Create a new [`SystemDocument`] from a file at the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the given path is not found or readable.
    ///   - the parsing / deserialization of the file failed.
    pub fn from_file(path: &Path) -> OptResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            OpticsError::Document(format!("cannot read file {} : {}", path.display(), e))
        })?;
        let document = Self::from_string(&contents)?;
        info!(
            "loaded system '{}' with {} element(s) from {}",
            document.system.name(),
            document.system.len(),
            path.display()
        );
        Ok(document)
    }
    /// Create a new [`SystemDocument`] from the given file content.
    ///
    /// # Errors
    ///
    /// This function will return an error if the parsing of the string failed. This includes components with
    /// degenerate parameters.
    pub fn from_string(file_string: &str) -> OptResult<Self> {
        let document: Self = ron::from_str(file_string)
            .map_err(|e| OpticsError::Document(format!("parsing of system failed: {e}")))?;
        if document.file_version != FILE_VERSION {
            warn!(
                "file version '{}' does not match the supported version '{FILE_VERSION}'. The import might not be correct.",
                document.file_version
            );
        }
        Ok(document)
    }
    /// Save this [`SystemDocument`] to a file with the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the serialization of the document failed.
    ///   - the file path cannot be created.
    ///   - it cannot write into the file (e.g. no space).
    pub fn save_to_file(&self, path: &Path) -> OptResult<()> {
        let serialized = self.to_file_string()?;
        let mut output = File::create(path).map_err(|e| {
            OpticsError::Document(format!(
                "could not create file path: {}: {}",
                path.display(),
                e
            ))
        })?;
        write!(output, "{serialized}").map_err(|e| {
            OpticsError::Document(format!(
                "writing to file path {} failed: {}",
                path.display(),
                e
            ))
        })?;
        info!("saved system '{}' to {}", self.system.name(), path.display());
        Ok(())
    }
    /// Return the file content of this [`SystemDocument`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the serialization fails.
    pub fn to_file_string(&self) -> OptResult<String> {
        ron::ser::to_string_pretty(&self, ron::ser::PrettyConfig::new().new_line("\n".into()))
            .map_err(|e| OpticsError::Document(format!("serialization of system failed: {e}")))
    }
    /// Returns a reference to the [`OpticalSystem`] of this [`SystemDocument`].
    #[must_use]
    pub const fn system(&self) -> &OpticalSystem {
        &self.system
    }
    /// Returns a mutable reference to the [`OpticalSystem`] of this [`SystemDocument`].
    pub fn system_mut(&mut self) -> &mut OpticalSystem {
        &mut self.system
    }
    /// Consumes the document and returns its [`OpticalSystem`].
    #[must_use]
    pub fn into_system(self) -> OpticalSystem {
        self.system
    }
    /// Returns the file format version of this [`SystemDocument`].
    #[must_use]
    pub fn file_version(&self) -> &str {
        &self.file_version
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        components::{FreeSpace, PlanarMirror, ThickLens, ThinLens},
        utils::test_helper::test_helper::check_warnings,
    };
    use assert_matches::assert_matches;
    use tempfile::NamedTempFile;

    fn system() -> OpticalSystem {
        let mut system = OpticalSystem::new("folded telescope");
        system.add(FreeSpace::new(2.0).unwrap());
        system.add(ThinLens::new(5.0).unwrap());
        system.add(PlanarMirror::new());
        system.add(ThickLens::new(10.0, -10.0, 2.0, 1.0, 1.5).unwrap());
        system
    }
    #[test]
    fn new() {
        let document = SystemDocument::new(system());
        assert_eq!(document.file_version(), FILE_VERSION);
        assert_eq!(document.system(), &system());
        assert_eq!(document.into_system(), system());
    }
    #[test]
    fn system_mut() {
        let mut document = SystemDocument::default();
        document.system_mut().add(FreeSpace::new(1.0).unwrap());
        assert_eq!(document.system().len(), 1);
    }
    #[test]
    fn from_string() {
        let document = SystemDocument::from_string(
            "(file_version: \"1.0\", system: (name: \"test\", elements: [FreeSpace(distance: 2.0), ThinLens(focal_length: 5.0)]))",
        )
        .unwrap();
        assert_eq!(document.system().name(), "test");
        assert_eq!(
            document.system().elements(),
            &[
                FreeSpace::new(2.0).unwrap().into(),
                ThinLens::new(5.0).unwrap().into()
            ]
        );
    }
    #[test]
    fn from_string_empty_system() {
        let document = SystemDocument::from_string("(file_version: \"1.0\")").unwrap();
        assert!(document.system().is_empty());
        assert_eq!(document.system().name(), "OpticalSystem");
    }
    #[test]
    fn from_string_wrong() {
        assert_matches!(
            SystemDocument::from_string("no ron"),
            Err(OpticsError::Document(_))
        );
        assert_matches!(
            SystemDocument::from_string(
                "(file_version: \"1.0\", system: (name: \"test\", elements: [ThinLens(focal_length: 0.0)]))"
            ),
            Err(OpticsError::Document(_))
        );
    }
    #[test]
    fn from_string_version_mismatch() {
        testing_logger::setup();
        let document = SystemDocument::from_string("(file_version: \"0.1\")").unwrap();
        assert_eq!(document.file_version(), "0.1");
        check_warnings(vec![
            "file version '0.1' does not match the supported version '1.0'. The import might not be correct.",
        ]);
    }
    #[test]
    fn to_file_string_round_trip() {
        let document = SystemDocument::new(system());
        let serialized = document.to_file_string().unwrap();
        assert_eq!(SystemDocument::from_string(&serialized).unwrap(), document);
    }
    #[test]
    fn save_and_load() {
        let document = SystemDocument::new(system());
        let file = NamedTempFile::new().unwrap();
        document.save_to_file(file.path()).unwrap();
        testing_logger::setup();
        let loaded = SystemDocument::from_file(file.path()).unwrap();
        check_warnings(vec![]);
        assert_eq!(loaded, document);
    }
    #[test]
    fn from_file_not_found() {
        assert_matches!(
            SystemDocument::from_file(Path::new("./this_file_does_not_exist.ron")),
            Err(OpticsError::Document(_))
        );
    }
}
