//! Error types for checksum rule execution.
//!
//! Per-artifact problems (missing files, unmatched identities, absent
//! checksums, unknown algorithms) never appear here; they are absorbed
//! into the verification report as unverifiable outcomes. Only
//! configuration problems, metadata retrieval failures, and genuine
//! checksum disagreements fail a run.

use thiserror::Error;

use crate::provider::ProviderError;
use crate::reconcile::ChecksumMismatch;

/// Errors that can fail a checksum rule run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The original repository URL was not configured.
    #[error("original P2 repository URL unspecified")]
    MissingOriginalUrl,

    /// The repository id was not configured.
    #[error("repository id unspecified")]
    MissingRepositoryId,

    /// The configured repository id matches no declared repository.
    #[error(
        "repository id {id} does not match any declared repository ({})",
        .declared.join(", ")
    )]
    UnknownRepositoryId {
        /// The configured repository id.
        id: String,
        /// The repository ids the project actually declares.
        declared: Vec<String>,
    },

    /// The remote artifact inventory could not be obtained.
    #[error("error reading artifact list: {0}")]
    Provider(#[from] ProviderError),

    /// The remote repository listed no artifacts at all.
    #[error("no artifacts found on repository URL {url}")]
    EmptyRepository {
        /// The repository URL that listed nothing.
        url: String,
    },

    /// At least one artifact's checksum differed from the published value.
    #[error(transparent)]
    ChecksumMismatch(#[from] ChecksumMismatch),
}

/// Result type alias using [`RuleError`].
pub type Result<T> = std::result::Result<T, RuleError>;
