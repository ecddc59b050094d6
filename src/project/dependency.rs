//! Dependency coordinate value types.
//!
//! A dependency starts life as a [`GroupArtifactVersion`] request, possibly
//! versionless or carrying a `$`-property placeholder. When a concrete
//! version can be established it is bound to a
//! [`ResolvedGroupArtifactVersion`] plus its transitive closure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker that starts a property-reference version, e.g. `$guavaVersion`
/// or `${guavaVersion}`. Placeholder versions are preserved literally in
/// the script and never sent to the metadata resolver.
pub const VERSION_PLACEHOLDER_MARKER: char = '$';

/// A dependency coordinate as requested by the caller.
///
/// The version is optional: a versionless request relies on some other
/// mechanism (a platform/BOM, a resolution strategy) to pick one, and a
/// `$`-prefixed version is a placeholder resolved by the build itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupArtifactVersion {
    /// Group id, e.g. `com.google.guava`.
    pub group_id: String,
    /// Artifact id, e.g. `guava`.
    pub artifact_id: String,
    /// Version string, placeholder, or `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl GroupArtifactVersion {
    /// Create a coordinate with an optional version.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: Option<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version,
        }
    }

    /// `true` when the version is a `$`-property reference rather than a
    /// concrete version string.
    pub fn has_placeholder_version(&self) -> bool {
        self.version
            .as_deref()
            .is_some_and(|v| v.starts_with(VERSION_PLACEHOLDER_MARKER))
    }

    /// `true` when a concrete, resolvable version string is present.
    pub fn has_concrete_version(&self) -> bool {
        self.version
            .as_deref()
            .is_some_and(|v| !v.is_empty() && !v.starts_with(VERSION_PLACEHOLDER_MARKER))
    }

    /// Coordinates match when group and artifact ids are equal; the
    /// version is deliberately ignored so a request can displace an
    /// earlier request for a different version of the same module.
    pub fn same_module(&self, group_id: &str, artifact_id: &str) -> bool {
        self.group_id == group_id && self.artifact_id == artifact_id
    }
}

impl fmt::Display for GroupArtifactVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{}:{}:{}", self.group_id, self.artifact_id, v),
            None => write!(f, "{}:{}", self.group_id, self.artifact_id),
        }
    }
}

/// A coordinate bound to a concrete version, never a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedGroupArtifactVersion {
    pub group_id: String,
    pub artifact_id: String,
    /// Concrete version as reported by the metadata source.
    pub version: String,
}

impl fmt::Display for ResolvedGroupArtifactVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// A dependency as declared in a configuration's requested set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedDependency {
    /// Requested coordinate, version possibly absent or a placeholder.
    pub gav: GroupArtifactVersion,
    /// Classifier, e.g. `sources` or `linux-x86_64`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    /// Artifact extension, e.g. `zip`. `None` means the default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Name of the configuration this request was declared against.
    pub for_configuration: String,
}

impl RequestedDependency {
    /// `true` when this request names the given module.
    pub fn matches_module(&self, group_id: &str, artifact_id: &str) -> bool {
        self.gav.same_module(group_id, artifact_id)
    }
}

/// A requested dependency bound to a concrete identity plus the transitive
/// closure reported by the metadata source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDependency {
    /// The concrete coordinate this request resolved to.
    pub identity: ResolvedGroupArtifactVersion,
    /// The request that produced this resolution.
    pub requested: RequestedDependency,
    /// Direct and indirect dependencies of the resolved module, in the
    /// order reported by the metadata source.
    pub transitives: Vec<ResolvedDependency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
}

impl ResolvedDependency {
    /// `true` when the resolved identity names the given module.
    pub fn matches_module(&self, group_id: &str, artifact_id: &str) -> bool {
        self.identity.group_id == group_id && self.identity.artifact_id == artifact_id
    }
}
