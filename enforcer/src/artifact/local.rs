//! Locally resolved artifacts and their byte content.
//!
//! A [`LocalArtifact`] pairs Maven coordinates with the path of the file
//! the build tool resolved. The file handle may be absent (the artifact
//! was never downloaded) or stale (the file has since disappeared); both
//! conditions make the artifact unverifiable rather than failing the run.

use camino::{Utf8Path, Utf8PathBuf};
use log::warn;

use super::coordinates::Coordinates;

/// A build artifact already resolved on the local machine.
///
/// Immutable for the duration of a verification run.
///
/// # Examples
///
/// ```
/// use p2_checksum_enforcer::artifact::coordinates::Coordinates;
/// use p2_checksum_enforcer::artifact::local::LocalArtifact;
///
/// let coords = Coordinates::new("org.example", "widget", "1.0.0");
/// let artifact = LocalArtifact::without_file(coords);
/// assert!(!artifact.file_exists());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalArtifact {
    coordinates: Coordinates,
    file: Option<Utf8PathBuf>,
}

impl LocalArtifact {
    /// Create an artifact backed by a file on disk.
    #[must_use]
    pub fn new(coordinates: Coordinates, file: impl Into<Utf8PathBuf>) -> Self {
        Self {
            coordinates,
            file: Some(file.into()),
        }
    }

    /// Create an artifact with no resolved file.
    #[must_use]
    pub fn without_file(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            file: None,
        }
    }

    /// Return the artifact's coordinates.
    #[must_use]
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    /// Return the resolved file path, if one was recorded.
    #[must_use]
    pub fn file(&self) -> Option<&Utf8Path> {
        self.file.as_deref()
    }

    /// Return whether the artifact has a file that currently exists.
    #[must_use]
    pub fn file_exists(&self) -> bool {
        self.file.as_deref().is_some_and(Utf8Path::exists)
    }

    /// Read the full content of the artifact file.
    ///
    /// Returns `None` when no file was recorded or the read fails; a
    /// failed read is logged at warn level. Content is read once per call
    /// and never cached on the artifact.
    #[must_use]
    pub fn read_content(&self) -> Option<Vec<u8>> {
        let path = self.file.as_deref()?;
        match std::fs::read(path.as_std_path()) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(
                    "error reading file {path} of artifact {}: {e}",
                    self.coordinates
                );
                None
            }
        }
    }
}
