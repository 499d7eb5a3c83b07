//! The checksum enforcement rule.
//!
//! [`ChecksumRule::execute`] is the entry point a host build hook invokes
//! after dependency resolution: it validates the rule configuration,
//! narrows the project's artifact set to those resolved from the mirror
//! repository, obtains the original update site's inventory through the
//! injected provider, and reconciles the two inventories.

use std::fmt;

use log::{debug, info};

use crate::artifact::local::LocalArtifact;
use crate::error::{Result, RuleError};
use crate::provider::RemoteArtifactProvider;
use crate::reconcile::{self, VerificationReport};
use crate::resolver::LocalArtifactResolver;

/// The host project's state relevant to checksum enforcement.
///
/// Owned by the caller and immutable for the duration of a run.
#[derive(Debug, Clone, Default)]
pub struct ProjectContext {
    /// Ids of the repositories the project declares.
    pub repository_ids: Vec<String>,
    /// Every artifact the build resolved for the project.
    pub artifacts: Vec<LocalArtifact>,
}

/// Rule requiring mirrored P2 artifacts to match the original update
/// site's published checksums.
///
/// Both fields must be set before [`execute`](Self::execute) is called;
/// hosts typically populate them from rule configuration.
///
/// # Examples
///
/// ```
/// use p2_checksum_enforcer::rule::ChecksumRule;
///
/// let rule = ChecksumRule::new("p2-mirror", "https://example.test/updates");
/// assert_eq!(
///     rule.to_string(),
///     "ChecksumRule[repository_id=p2-mirror, original_url=https://example.test/updates]"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChecksumRule {
    /// Id of the declared repository whose artifacts are checked.
    pub repository_id: Option<String>,
    /// URL of the original update site publishing the checksums.
    pub original_url: Option<String>,
}

impl ChecksumRule {
    /// Create a fully configured rule.
    #[must_use]
    pub fn new(repository_id: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            repository_id: Some(repository_id.into()),
            original_url: Some(original_url.into()),
        }
    }

    /// Verify every project artifact resolved from the configured
    /// repository against the original update site's checksums.
    ///
    /// A project with no dependencies, or none resolved from the
    /// configured repository, passes trivially without consulting the
    /// provider. Artifacts that cannot be verified (missing file, no
    /// remote record, no published checksum, unavailable algorithm) are
    /// counted in the report but never fail the run.
    ///
    /// # Errors
    ///
    /// - [`RuleError::MissingOriginalUrl`] / [`RuleError::MissingRepositoryId`]
    ///   when the rule is not fully configured.
    /// - [`RuleError::UnknownRepositoryId`] when the configured id matches
    ///   no declared repository.
    /// - [`RuleError::Provider`] when the remote inventory cannot be
    ///   obtained, and [`RuleError::EmptyRepository`] when it is empty.
    /// - [`RuleError::ChecksumMismatch`] when at least one artifact's
    ///   checksum disagrees, after every artifact has been processed.
    pub fn execute(
        &self,
        project: &ProjectContext,
        provider: &dyn RemoteArtifactProvider,
        resolver: &dyn LocalArtifactResolver,
    ) -> Result<VerificationReport> {
        let original_url = self
            .original_url
            .as_deref()
            .ok_or(RuleError::MissingOriginalUrl)?;
        let repository_id = self
            .repository_id
            .as_deref()
            .ok_or(RuleError::MissingRepositoryId)?;
        if !project.repository_ids.iter().any(|id| id == repository_id) {
            return Err(RuleError::UnknownRepositoryId {
                id: repository_id.to_owned(),
                declared: project.repository_ids.clone(),
            });
        }

        if project.artifacts.is_empty() {
            debug!("project has no dependencies");
            return Ok(VerificationReport::default());
        }
        let from_repository = resolver.select_from_repository(&project.artifacts, repository_id);
        if from_repository.is_empty() {
            debug!("there are no dependencies from repository {repository_id}");
            return Ok(VerificationReport::default());
        }
        debug!(
            "project has {} artifacts from repository {repository_id}: {}",
            from_repository.len(),
            join_coordinates(&from_repository)
        );

        let remote_artifacts = provider.list_artifacts(original_url)?;
        if remote_artifacts.is_empty() {
            return Err(RuleError::EmptyRepository {
                url: original_url.to_owned(),
            });
        }
        debug!(
            "repository {original_url} has {} artifacts",
            remote_artifacts.len()
        );

        let report = reconcile::verify(&from_repository, &remote_artifacts);
        report.check()?;
        info!(
            "checksum analysis finished: {} artifacts have correct checksums, \
             {} artifacts have no checksum information",
            report.matched(),
            report.unverifiable()
        );
        Ok(report)
    }
}

impl fmt::Display for ChecksumRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChecksumRule[repository_id={}, original_url={}]",
            self.repository_id.as_deref().unwrap_or("<unset>"),
            self.original_url.as_deref().unwrap_or("<unset>")
        )
    }
}

/// Comma-separated coordinates for debug listings.
fn join_coordinates(artifacts: &[LocalArtifact]) -> String {
    artifacts
        .iter()
        .map(|artifact| artifact.coordinates().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
