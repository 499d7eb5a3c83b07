//! Shared test fixtures for the enforcer crate.
//!
//! Used by both unit tests and the integration suite; production code
//! never calls into this module.

use sha2::{Digest, Sha256};

use crate::artifact::coordinates::Coordinates;
use crate::artifact::remote::{RemoteArtifact, RemoteChecksums};

/// Compute the lowercase hex SHA-256 of `data`.
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

/// Coordinates under the fixed test group `org.example`.
#[must_use]
pub fn coordinates(artifact_id: &str, version: &str) -> Coordinates {
    Coordinates::new("org.example", artifact_id, version)
}

/// A remote record with the given checksum slots.
#[must_use]
pub fn remote_artifact(artifact_id: &str, version: &str, checksums: RemoteChecksums) -> RemoteArtifact {
    RemoteArtifact {
        artifact_id: artifact_id.to_owned(),
        version: version.to_owned(),
        checksums,
    }
}

/// A remote record publishing only a SHA-256 checksum.
#[must_use]
pub fn sha256_record(artifact_id: &str, version: &str, sha256: &str) -> RemoteArtifact {
    remote_artifact(
        artifact_id,
        version,
        RemoteChecksums {
            sha256: Some(sha256.to_owned()),
            ..RemoteChecksums::default()
        },
    )
}
