//! Remote artifact metadata provider abstraction.
//!
//! Fetching and parsing a P2 update site's artifact metadata is the
//! host's concern; the rule consumes whatever provider implementation the
//! host wires in. The trait is mockable so tests can exercise rule
//! control flow without network access.

use thiserror::Error;

use crate::artifact::remote::RemoteArtifact;

/// Trait for listing the artifact inventory of a remote repository.
#[cfg_attr(test, mockall::automock)]
pub trait RemoteArtifactProvider {
    /// List every artifact record published at `repository_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Unreachable`] when the repository cannot
    /// be contacted and [`ProviderError::MetadataParse`] when its
    /// metadata cannot be understood.
    fn list_artifacts(&self, repository_url: &str) -> Result<Vec<RemoteArtifact>, ProviderError>;
}

/// Errors arising from remote metadata retrieval.
///
/// Either variant is fatal to a verification run: without the remote
/// inventory there is nothing to reconcile against.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The repository could not be contacted.
    #[error("repository {url} is unreachable: {reason}")]
    Unreachable {
        /// The repository URL that was requested.
        url: String,
        /// A human-readable description of the failure.
        reason: String,
    },

    /// The repository responded but its metadata could not be parsed.
    #[error("invalid artifact metadata from {url}: {reason}")]
    MetadataParse {
        /// The repository URL whose metadata was rejected.
        url: String,
        /// A human-readable description of the parse failure.
        reason: String,
    },
}
