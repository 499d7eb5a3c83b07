//! Remote artifact records published by a P2 update site.
//!
//! Each record carries the bundle identity and whatever checksums the
//! repository chose to publish. Checksum selection walks a fixed
//! preference table, strongest algorithm first, so verification never
//! uses a weaker checksum when a stronger one is available.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Accessor for one published checksum slot of a record.
type ChecksumSlot = fn(&RemoteChecksums) -> Option<&str>;

/// Checksum slots in verification preference order, strongest first.
///
/// Selection stops at the first present slot; adding or removing an
/// algorithm is a single edit here plus a digest registration.
const CHECKSUM_PREFERENCE: [(&str, ChecksumSlot); 4] = [
    ("SHA-512", |c| c.sha512.as_deref()),
    ("SHA-256", |c| c.sha256.as_deref()),
    ("SHA-1", |c| c.sha1.as_deref()),
    ("MD5", |c| c.md5.as_deref()),
];

/// The optional checksum slots a repository may publish for a bundle.
///
/// An absent slot means the repository did not publish that checksum, not
/// that the checksum is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteChecksums {
    /// Hex-encoded SHA-512 checksum, if published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha512: Option<String>,
    /// Hex-encoded SHA-256 checksum, if published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
    /// Hex-encoded SHA-1 checksum, if published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    /// Hex-encoded MD5 checksum, if published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,
}

/// A metadata entry from the remote repository's artifact inventory.
///
/// P2 identities have no group segment; matching against local artifacts
/// uses `(artifact_id, version)` exact string equality.
///
/// # Examples
///
/// ```
/// use p2_checksum_enforcer::artifact::remote::{RemoteArtifact, RemoteChecksums};
///
/// let record = RemoteArtifact {
///     artifact_id: "widget".to_owned(),
///     version: "1.0.0".to_owned(),
///     checksums: RemoteChecksums {
///         sha256: Some("ab".repeat(32)),
///         md5: Some("cd".repeat(16)),
///         ..RemoteChecksums::default()
///     },
/// };
/// let (algorithm, _checksum) = record.preferred_checksum().expect("published");
/// assert_eq!(algorithm, "SHA-256");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteArtifact {
    /// The bundle's artifact id.
    pub artifact_id: String,
    /// The bundle's version string.
    pub version: String,
    /// The published checksum slots.
    #[serde(flatten)]
    pub checksums: RemoteChecksums,
}

impl RemoteArtifact {
    /// Return the strongest published checksum and its algorithm name.
    ///
    /// Walks the preference table in declared order and returns the first
    /// present slot, or `None` when the record publishes no checksum at
    /// all. Exactly one checksum is ever selected per record.
    #[must_use]
    pub fn preferred_checksum(&self) -> Option<(&'static str, &str)> {
        CHECKSUM_PREFERENCE
            .iter()
            .find_map(|(algorithm, slot)| slot(&self.checksums).map(|checksum| (*algorithm, checksum)))
    }

    /// Return whether this record matches the given local identity.
    #[must_use]
    pub fn matches(&self, artifact_id: &str, version: &str) -> bool {
        self.artifact_id == artifact_id && self.version == version
    }
}

impl fmt::Display for RemoteArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.artifact_id, self.version)
    }
}
