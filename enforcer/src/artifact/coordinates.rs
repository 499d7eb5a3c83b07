//! Maven coordinates for locally resolved artifacts.
//!
//! A resolved artifact is identified by its `groupId`, `artifactId`, and
//! version. P2 update sites index bundles without a group segment, so
//! remote records match on [`artifact_id`](Coordinates::artifact_id) and
//! [`version`](Coordinates::version) only; the group is carried for
//! diagnostics.

use std::fmt;

/// The `groupId:artifactId:version` identity of a resolved artifact.
///
/// Ordering is lexicographic over the three segments, which gives
/// verification reports a stable artifact order.
///
/// # Examples
///
/// ```
/// use p2_checksum_enforcer::artifact::coordinates::Coordinates;
///
/// let coords = Coordinates::new("org.example", "widget", "1.0.0");
/// assert_eq!(coords.to_string(), "org.example:widget:1.0.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinates {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl Coordinates {
    /// Create coordinates from the three identity segments.
    #[must_use]
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// Return the group id.
    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Return the artifact id.
    #[must_use]
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Return the version string.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}
