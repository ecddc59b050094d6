//! The resolution gateway: a thin seam to an external artifact-metadata
//! resolver.
//!
//! The mutation engine never downloads anything itself. When a request
//! carries a concrete version, the engine asks a [`MetadataResolver`] for
//! the resolved identity and transitive closure of the module; versionless
//! and `$`-placeholder requests skip the gateway entirely. Gateway failures
//! are typed ([`ResolveError`]) and recovered by the engine: the textual
//! edit is kept and a [`crate::core::Warning`] is attached instead.
//!
//! Implementations must be idempotent (the same coordinate resolves to the
//! same result) so repeated runs of an edit stay deterministic, and either
//! re-entrant or externally synchronized when scripts are edited in
//! parallel.

use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

use crate::core::Warning;
use crate::project::{GroupArtifactVersion, ResolvedDependency, ResolvedGroupArtifactVersion};

/// Typed failures from the metadata resolver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The metadata source could not be reached or did not have the module.
    #[error("failed to download metadata for {module}: {reason}")]
    DownloadFailed {
        /// Coordinate the download was attempted for.
        module: String,
        /// Transport- or repository-level failure description.
        reason: String,
    },

    /// The metadata was fetched but could not be understood.
    #[error("invalid metadata for {module}: {reason}")]
    MetadataInvalid {
        /// Coordinate whose metadata was malformed.
        module: String,
        /// What was wrong with the metadata.
        reason: String,
    },
}

impl From<ResolveError> for Warning {
    fn from(err: ResolveError) -> Self {
        Warning::new(err.to_string())
    }
}

/// Resolution result: the concrete identity a request was bound to, plus
/// the transitive closure reported by the metadata source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModule {
    /// Concrete coordinate, no placeholders.
    pub identity: ResolvedGroupArtifactVersion,
    /// Ordered transitive dependencies of the module.
    pub transitives: Vec<ResolvedDependency>,
}

/// Interface to an external artifact-metadata resolver.
///
/// The coordinate handed in always carries a concrete version string; the
/// engine filters out versionless and placeholder requests before calling.
pub trait MetadataResolver {
    /// Resolve a coordinate to its identity and transitive closure.
    fn resolve(&self, gav: &GroupArtifactVersion) -> Result<ResolvedModule, ResolveError>;
}

/// A table-backed resolver for offline use and tests.
///
/// Modules are registered up front; anything else fails with
/// [`ResolveError::DownloadFailed`], which is exactly how an unreachable
/// repository presents.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    modules: HashMap<(String, String, String), ResolvedModule>,
}

impl StaticResolver {
    /// Create an empty resolver; every lookup fails until modules are
    /// registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module with no transitive dependencies.
    #[must_use]
    pub fn with_module(self, group_id: &str, artifact_id: &str, version: &str) -> Self {
        self.with_resolved(
            group_id,
            artifact_id,
            version,
            ResolvedModule {
                identity: ResolvedGroupArtifactVersion {
                    group_id: group_id.to_string(),
                    artifact_id: artifact_id.to_string(),
                    version: version.to_string(),
                },
                transitives: Vec::new(),
            },
        )
    }

    /// Register a fully described resolution result.
    #[must_use]
    pub fn with_resolved(
        mut self,
        group_id: &str,
        artifact_id: &str,
        version: &str,
        module: ResolvedModule,
    ) -> Self {
        self.modules.insert(
            (
                group_id.to_string(),
                artifact_id.to_string(),
                version.to_string(),
            ),
            module,
        );
        self
    }
}

impl MetadataResolver for StaticResolver {
    fn resolve(&self, gav: &GroupArtifactVersion) -> Result<ResolvedModule, ResolveError> {
        let version = gav.version.as_deref().unwrap_or_default();
        let key = (
            gav.group_id.clone(),
            gav.artifact_id.clone(),
            version.to_string(),
        );
        match self.modules.get(&key) {
            Some(module) => {
                debug!(module = %gav, "resolved from static table");
                Ok(module.clone())
            }
            None => Err(ResolveError::DownloadFailed {
                module: gav.to_string(),
                reason: "module not present in static table".to_string(),
            }),
        }
    }
}
