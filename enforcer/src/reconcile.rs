//! Reconciliation of local artifacts against remote checksum records.
//!
//! [`verify`] pairs each local artifact with its remote record, selects
//! the strongest published checksum, recomputes the digest from the local
//! bytes, and aggregates the per-artifact outcomes into a
//! [`VerificationReport`]. Problems local to one artifact (missing file,
//! no matching record, nothing published, unknown algorithm) are absorbed
//! as unverifiable outcomes; only a genuine checksum disagreement is
//! reportable as a failure, and only after every artifact has been
//! processed.

use std::fmt;

use log::{debug, info};
use thiserror::Error;

use crate::artifact::coordinates::Coordinates;
use crate::artifact::local::LocalArtifact;
use crate::artifact::remote::RemoteArtifact;
use crate::digest::{self, DigestError};

/// Why an artifact could not be verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnverifiableReason {
    /// The artifact has no recorded file, or the file is missing or
    /// unreadable.
    FileNotFound,
    /// No remote record matches the artifact's id and version.
    NoRemoteRecord,
    /// The matched remote record publishes no checksum at all.
    NoPublishedChecksum,
    /// The selected checksum algorithm has no registered primitive.
    AlgorithmUnavailable,
}

impl fmt::Display for UnverifiableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::FileNotFound => "file not found",
            Self::NoRemoteRecord => "no remote record",
            Self::NoPublishedChecksum => "no published checksum",
            Self::AlgorithmUnavailable => "algorithm unavailable",
        };
        write!(f, "{reason}")
    }
}

/// A checksum disagreement for one artifact.
///
/// Carries everything needed to diagnose the mismatch without re-running:
/// the full identity, the algorithm used, and both checksum values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    coordinates: Coordinates,
    algorithm: &'static str,
    expected: String,
    actual: String,
}

impl Mismatch {
    /// Return the mismatched artifact's coordinates.
    #[must_use]
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    /// Return the name of the algorithm that was compared.
    #[must_use]
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// Return the checksum the repository published.
    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Return the checksum calculated from the local bytes.
    #[must_use]
    pub fn actual(&self) -> &str {
        &self.actual
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "checksums are not equal for artifact {}: published {} is {}, but calculated {} is {}",
            self.coordinates, self.algorithm, self.expected, self.algorithm, self.actual
        )
    }
}

/// The verification outcome for a single local artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The computed digest matched the published checksum.
    Matched,
    /// The computed digest differed from the published checksum.
    Mismatched(Mismatch),
    /// Verification could not be performed.
    Unverifiable(UnverifiableReason),
}

/// Aggregate failure raised when at least one checksum disagreed.
///
/// The message lists every mismatch on its own line so a failing run can
/// be diagnosed in full from a single error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "checksums are not equal for {} artifact(s):\n{}",
    .mismatches.len(),
    mismatch_lines(.mismatches)
)]
pub struct ChecksumMismatch {
    mismatches: Vec<Mismatch>,
}

impl ChecksumMismatch {
    /// Return the individual mismatches, ordered by coordinates.
    #[must_use]
    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }
}

/// One formatted mismatch per line.
fn mismatch_lines(mismatches: &[Mismatch]) -> String {
    mismatches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Aggregated outcome counts and mismatch details for one run.
///
/// Constructed fresh by every [`verify`] call and never persisted.
/// Unverifiable outcomes are informational; only a non-empty mismatch
/// list makes [`check`](VerificationReport::check) fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    matched: usize,
    unverifiable: usize,
    mismatches: Vec<Mismatch>,
}

impl VerificationReport {
    /// Return how many artifacts verified successfully.
    #[must_use]
    pub fn matched(&self) -> usize {
        self.matched
    }

    /// Return how many artifacts could not be verified.
    #[must_use]
    pub fn unverifiable(&self) -> usize {
        self.unverifiable
    }

    /// Return the checksum disagreements, ordered by coordinates.
    #[must_use]
    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }

    /// Fail when any checksum disagreed.
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumMismatch`] carrying every mismatch when the
    /// mismatch list is non-empty.
    pub fn check(&self) -> Result<(), ChecksumMismatch> {
        if self.mismatches.is_empty() {
            return Ok(());
        }
        Err(ChecksumMismatch {
            mismatches: self.mismatches.clone(),
        })
    }

    /// Tally one artifact's outcome.
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Matched => self.matched += 1,
            Outcome::Unverifiable(_) => self.unverifiable += 1,
            Outcome::Mismatched(mismatch) => self.mismatches.push(mismatch),
        }
    }
}

/// Verify every local artifact against the remote inventory.
///
/// Each artifact is processed exactly once and independently; no outcome
/// short-circuits the remaining artifacts. When the remote list contains
/// duplicate identities, the first occurrence in list order is used.
/// Mismatches are sorted by coordinates so repeated runs over the same
/// inputs produce identical reports.
#[must_use]
pub fn verify(locals: &[LocalArtifact], remotes: &[RemoteArtifact]) -> VerificationReport {
    let mut report = VerificationReport::default();
    for local in locals {
        report.record(verify_artifact(local, remotes));
    }
    report
        .mismatches
        .sort_by(|a, b| a.coordinates.cmp(&b.coordinates));
    report
}

/// Apply the per-artifact verification steps to one local artifact.
fn verify_artifact(local: &LocalArtifact, remotes: &[RemoteArtifact]) -> Outcome {
    let coordinates = local.coordinates();

    if !local.file_exists() {
        info!("artifact {coordinates} file is not found and cannot be checked");
        return Outcome::Unverifiable(UnverifiableReason::FileNotFound);
    }

    let Some(remote) = find_remote(coordinates, remotes) else {
        info!("cannot find repository data for artifact {coordinates}");
        return Outcome::Unverifiable(UnverifiableReason::NoRemoteRecord);
    };
    debug!("for artifact {coordinates} remote record {remote} has been found");

    let Some((algorithm, expected)) = remote.preferred_checksum() else {
        info!("cannot check checksum for artifact {coordinates}: remote record has no checksum information");
        return Outcome::Unverifiable(UnverifiableReason::NoPublishedChecksum);
    };

    // Read failure is logged by the artifact itself; same reason code as a
    // missing file, discovered lazily.
    let Some(content) = local.read_content() else {
        return Outcome::Unverifiable(UnverifiableReason::FileNotFound);
    };

    let actual = match digest::digest(algorithm, &content) {
        Ok(actual) => actual,
        Err(DigestError::UnsupportedAlgorithm { name }) => {
            info!("cannot check checksum for artifact {coordinates}: digest algorithm {name} unavailable");
            return Outcome::Unverifiable(UnverifiableReason::AlgorithmUnavailable);
        }
    };

    if actual.eq_ignore_ascii_case(expected) {
        debug!("{algorithm} checksum for artifact {coordinates} has been compared and found equal");
        Outcome::Matched
    } else {
        Outcome::Mismatched(Mismatch {
            coordinates: coordinates.clone(),
            algorithm,
            expected: expected.to_owned(),
            actual,
        })
    }
}

/// Find the first remote record matching the local identity, in list order.
fn find_remote<'a>(
    coordinates: &Coordinates,
    remotes: &'a [RemoteArtifact],
) -> Option<&'a RemoteArtifact> {
    remotes
        .iter()
        .find(|remote| remote.matches(coordinates.artifact_id(), coordinates.version()))
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
