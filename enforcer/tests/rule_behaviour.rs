//! End-to-end behaviour tests for the checksum enforcement rule.
//!
//! Exercises the public API with stub collaborators and real artifact
//! files, the way a host build hook would drive it.

use camino::Utf8PathBuf;
use tempfile::TempDir;

use p2_checksum_enforcer::artifact::coordinates::Coordinates;
use p2_checksum_enforcer::artifact::local::LocalArtifact;
use p2_checksum_enforcer::artifact::remote::{RemoteArtifact, RemoteChecksums};
use p2_checksum_enforcer::error::RuleError;
use p2_checksum_enforcer::provider::{ProviderError, RemoteArtifactProvider};
use p2_checksum_enforcer::resolver::LocalArtifactResolver;
use p2_checksum_enforcer::rule::{ChecksumRule, ProjectContext};
use p2_checksum_enforcer::test_utils::sha256_hex;

const REPOSITORY_ID: &str = "p2-mirror";
const ORIGINAL_URL: &str = "https://example.test/updates";

/// A stub provider returning a canned inventory response.
struct StubProvider {
    response: Result<Vec<RemoteArtifact>, ProviderError>,
}

impl RemoteArtifactProvider for StubProvider {
    fn list_artifacts(&self, _repository_url: &str) -> Result<Vec<RemoteArtifact>, ProviderError> {
        self.response.clone()
    }
}

/// A stub resolver treating every artifact as repository-sourced.
struct EveryArtifactResolver;

impl LocalArtifactResolver for EveryArtifactResolver {
    fn select_from_repository(
        &self,
        artifacts: &[LocalArtifact],
        _repository_id: &str,
    ) -> Vec<LocalArtifact> {
        artifacts.to_vec()
    }
}

/// A stub resolver selecting only the named artifact ids.
struct NamedArtifactResolver {
    artifact_ids: Vec<&'static str>,
}

impl LocalArtifactResolver for NamedArtifactResolver {
    fn select_from_repository(
        &self,
        artifacts: &[LocalArtifact],
        _repository_id: &str,
    ) -> Vec<LocalArtifact> {
        artifacts
            .iter()
            .filter(|a| {
                self.artifact_ids
                    .contains(&a.coordinates().artifact_id())
            })
            .cloned()
            .collect()
    }
}

fn rule() -> ChecksumRule {
    ChecksumRule::new(REPOSITORY_ID, ORIGINAL_URL)
}

fn project_with(artifacts: Vec<LocalArtifact>) -> ProjectContext {
    ProjectContext {
        repository_ids: vec![REPOSITORY_ID.to_owned()],
        artifacts,
    }
}

fn artifact_on_disk(dir: &TempDir, artifact_id: &str, content: &[u8]) -> LocalArtifact {
    let path = dir.path().join(format!("{artifact_id}-1.0.0.jar"));
    std::fs::write(&path, content).expect("write artifact");
    let utf8 = Utf8PathBuf::try_from(path).expect("UTF-8 path");
    LocalArtifact::new(
        Coordinates::new("org.example", artifact_id, "1.0.0"),
        utf8,
    )
}

fn sha256_record(artifact_id: &str, sha256: String) -> RemoteArtifact {
    RemoteArtifact {
        artifact_id: artifact_id.to_owned(),
        version: "1.0.0".to_owned(),
        checksums: RemoteChecksums {
            sha256: Some(sha256),
            ..RemoteChecksums::default()
        },
    }
}

#[test]
fn mixed_inventory_verifies_what_it_can_and_passes() {
    let temp = tempfile::tempdir().expect("temp dir");
    let project = project_with(vec![
        artifact_on_disk(&temp, "widget", b"widget bytes"),
        // No remote record will match this one.
        artifact_on_disk(&temp, "orphan", b"orphan bytes"),
        // Matched, but nothing published.
        artifact_on_disk(&temp, "bare", b"bare bytes"),
    ]);
    let provider = StubProvider {
        response: Ok(vec![
            sha256_record("widget", sha256_hex(b"widget bytes")),
            RemoteArtifact {
                artifact_id: "bare".to_owned(),
                version: "1.0.0".to_owned(),
                checksums: RemoteChecksums::default(),
            },
        ]),
    };

    let report = rule()
        .execute(&project, &provider, &EveryArtifactResolver)
        .expect("no mismatches");
    assert_eq!(report.matched(), 1);
    assert_eq!(report.unverifiable(), 2);
    assert!(report.mismatches().is_empty());
}

#[test]
fn tampered_artifact_fails_the_run_and_names_only_itself() {
    let temp = tempfile::tempdir().expect("temp dir");
    let project = project_with(vec![
        artifact_on_disk(&temp, "widget", b"widget bytes"),
        artifact_on_disk(&temp, "gadget", b"tampered locally"),
    ]);
    let provider = StubProvider {
        response: Ok(vec![
            sha256_record("widget", sha256_hex(b"widget bytes")),
            sha256_record("gadget", sha256_hex(b"gadget bytes")),
        ]),
    };

    let err = rule()
        .execute(&project, &provider, &EveryArtifactResolver)
        .expect_err("mismatch must fail");
    let msg = err.to_string();
    assert!(matches!(err, RuleError::ChecksumMismatch(_)));
    assert!(msg.contains("org.example:gadget:1.0.0"), "message: {msg}");
    assert!(!msg.contains("org.example:widget:1.0.0"), "message: {msg}");
    assert!(msg.contains(&sha256_hex(b"gadget bytes")), "message: {msg}");
    assert!(msg.contains(&sha256_hex(b"tampered locally")), "message: {msg}");
}

#[test]
fn artifacts_outside_the_repository_are_never_checked() {
    let temp = tempfile::tempdir().expect("temp dir");
    // The gadget checksum would mismatch, but the resolver attributes
    // only widget to the mirror repository.
    let project = project_with(vec![
        artifact_on_disk(&temp, "widget", b"widget bytes"),
        artifact_on_disk(&temp, "gadget", b"tampered locally"),
    ]);
    let provider = StubProvider {
        response: Ok(vec![
            sha256_record("widget", sha256_hex(b"widget bytes")),
            sha256_record("gadget", sha256_hex(b"gadget bytes")),
        ]),
    };
    let resolver = NamedArtifactResolver {
        artifact_ids: vec!["widget"],
    };

    let report = rule()
        .execute(&project, &provider, &resolver)
        .expect("only widget is in scope");
    assert_eq!(report.matched(), 1);
    assert_eq!(report.unverifiable(), 0);
}

#[test]
fn unreachable_repository_aborts_before_verification() {
    let temp = tempfile::tempdir().expect("temp dir");
    let project = project_with(vec![artifact_on_disk(&temp, "widget", b"widget bytes")]);
    let provider = StubProvider {
        response: Err(ProviderError::Unreachable {
            url: ORIGINAL_URL.to_owned(),
            reason: "connection timed out".to_owned(),
        }),
    };

    let err = rule()
        .execute(&project, &provider, &EveryArtifactResolver)
        .expect_err("must fail");
    assert!(matches!(err, RuleError::Provider(_)));
}

#[test]
fn repeated_runs_over_unchanged_inputs_agree() {
    let temp = tempfile::tempdir().expect("temp dir");
    let project = project_with(vec![
        artifact_on_disk(&temp, "widget", b"widget bytes"),
        LocalArtifact::without_file(Coordinates::new("org.example", "ghost", "1.0.0")),
    ]);
    let provider = StubProvider {
        response: Ok(vec![sha256_record("widget", sha256_hex(b"widget bytes"))]),
    };

    let first = rule()
        .execute(&project, &provider, &EveryArtifactResolver)
        .expect("no mismatches");
    let second = rule()
        .execute(&project, &provider, &EveryArtifactResolver)
        .expect("no mismatches");
    assert_eq!(first, second);
}
