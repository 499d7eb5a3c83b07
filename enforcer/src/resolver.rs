//! Repository-origin filter abstraction.
//!
//! Deciding which resolved artifacts came from a given repository
//! requires the host build tool's resolution machinery, so the rule
//! consumes it as an injected collaborator. Implementations are pure
//! filters: an empty selection is a valid outcome, not an error.

use crate::artifact::local::LocalArtifact;

/// Trait for selecting the artifacts resolved from one repository.
#[cfg_attr(test, mockall::automock)]
pub trait LocalArtifactResolver {
    /// Return the subset of `artifacts` that were resolved from the
    /// repository identified by `repository_id`.
    ///
    /// Artifacts the repository cannot account for are simply omitted
    /// from the result.
    fn select_from_repository(
        &self,
        artifacts: &[LocalArtifact],
        repository_id: &str,
    ) -> Vec<LocalArtifact>;
}
