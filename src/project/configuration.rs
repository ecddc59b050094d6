//! A named dependency configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::project::dependency::{RequestedDependency, ResolvedDependency};

/// A named bucket of dependencies in a build script, e.g. `implementation`
/// or `testRuntimeOnly`.
///
/// Configurations form a directed graph: an entry in `extends_from` means
/// this configuration inherits the dependencies of the named one.
/// Configurations are immutable value objects; the graph-update algorithm
/// produces fresh copies rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Configuration name, unique within a project.
    pub name: String,
    /// Names of configurations this one extends (inherits from).
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub extends_from: BTreeSet<String>,
    /// Whether this configuration participates in resolution. Declarable
    /// buckets like `implementation` are not themselves resolvable; their
    /// extending classpath configurations are.
    #[serde(default)]
    pub can_be_resolved: bool,
    /// Dependencies declared directly against this configuration.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requested: Vec<RequestedDependency>,
    /// Directly resolved dependencies, present only when
    /// `can_be_resolved` and a concrete version was obtainable.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resolved: Vec<ResolvedDependency>,
}

impl Configuration {
    /// Create an empty, non-resolvable configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends_from: BTreeSet::new(),
            can_be_resolved: false,
            requested: Vec::new(),
            resolved: Vec::new(),
        }
    }

    /// Add an extends-from edge.
    #[must_use]
    pub fn extending(mut self, base: impl Into<String>) -> Self {
        self.extends_from.insert(base.into());
        self
    }

    /// Mark the configuration resolvable.
    #[must_use]
    pub fn resolvable(mut self, can_be_resolved: bool) -> Self {
        self.can_be_resolved = can_be_resolved;
        self
    }

    /// Find the requested dependency for a module, if any.
    ///
    /// At most one entry per (group, artifact) pair exists, so the first
    /// match is the only match.
    pub fn find_requested(&self, group_id: &str, artifact_id: &str) -> Option<&RequestedDependency> {
        self.requested
            .iter()
            .find(|req| req.matches_module(group_id, artifact_id))
    }
}
