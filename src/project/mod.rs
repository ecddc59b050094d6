//! The dependency-configuration graph model.
//!
//! A build script owns a set of named [`Configuration`]s connected by
//! extends edges (`A → B` = "A inherits B's dependencies"). The
//! [`ProjectGraph`] holds them by name for the duration of one mutation and
//! is replaced wholesale when it changes: configurations are immutable
//! value objects and every update produces a new map.
//!
//! The graph answers two questions for the mutation engine:
//! - does a configuration already request a module
//!   ([`Configuration::find_requested`])?
//! - which configurations inherit an addition to a given configuration
//!   ([`ProjectGraph::configurations_extending_from`])?
//!
//! and applies the add-dependency update
//! ([`ProjectGraph::with_dependency_added`]): the new request lands in the
//! target configuration and every configuration transitively extending it,
//! displacing any earlier request for the same (group, artifact) module.

mod configuration;
mod dependency;
mod extends;


pub use configuration::Configuration;
pub use dependency::{
    GroupArtifactVersion, RequestedDependency, ResolvedDependency, ResolvedGroupArtifactVersion,
    VERSION_PLACEHOLDER_MARKER,
};

use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::resolve::ResolvedModule;
use extends::ExtendsGraph;

/// The full set of configurations for one build script.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectGraph {
    configurations: HashMap<String, Configuration>,
}

impl ProjectGraph {
    /// Build a graph from configurations, keyed by their names.
    ///
    /// A later configuration with a duplicate name replaces an earlier one.
    pub fn from_configurations(configurations: impl IntoIterator<Item = Configuration>) -> Self {
        Self {
            configurations: configurations
                .into_iter()
                .map(|c| (c.name.clone(), c))
                .collect(),
        }
    }

    /// Look up a configuration by name.
    pub fn configuration(&self, name: &str) -> Option<&Configuration> {
        self.configurations.get(name)
    }

    /// Iterate all configurations, in no particular order.
    pub fn configurations(&self) -> impl Iterator<Item = &Configuration> {
        self.configurations.values()
    }

    /// Configurations that extend `base`, following the extends edges in
    /// reverse; with `transitive`, through any chain of edges. Cycle-safe.
    pub fn configurations_extending_from(
        &self,
        base: &str,
        transitive: bool,
    ) -> Vec<&Configuration> {
        let graph = ExtendsGraph::build(self.configurations.values());
        let names = graph.extending_from(base, transitive);
        self.configurations
            .values()
            .filter(|c| names.contains(&c.name))
            .collect()
    }

    /// Pure replacement of the configuration map.
    #[must_use]
    pub fn with_updated_configurations(&self, configurations: HashMap<String, Configuration>) -> Self {
        Self { configurations }
    }

    /// Apply the add-dependency update.
    ///
    /// The request is added to `configuration` and every configuration
    /// transitively extending it. Within each touched configuration, any
    /// existing requested entry for the same (group, artifact) module is
    /// removed before the new one is appended; resolvable configurations
    /// additionally get a resolved entry (carrying the transitive closure)
    /// when `resolved` metadata is available.
    ///
    /// An unknown configuration name is a no-op: the caller asked to add to
    /// a configuration the project does not have, so there is nothing to do.
    #[must_use]
    pub fn with_dependency_added(
        &self,
        configuration: &str,
        gav: &GroupArtifactVersion,
        classifier: Option<&str>,
        extension: Option<&str>,
        resolved: Option<&ResolvedModule>,
    ) -> Self {
        if !self.configurations.contains_key(configuration) {
            debug!(configuration, "configuration not present, graph unchanged");
            return self.clone();
        }

        let mut to_add: HashSet<String> = self
            .configurations_extending_from(configuration, true)
            .into_iter()
            .map(|c| c.name.clone())
            .collect();
        to_add.insert(configuration.to_string());
        debug!(
            module = %gav,
            configurations = to_add.len(),
            "updating requested sets"
        );

        let mut updated = HashMap::with_capacity(self.configurations.len());
        for (name, existing) in &self.configurations {
            if !to_add.contains(name) {
                updated.insert(name.clone(), existing.clone());
                continue;
            }

            let new_requested = RequestedDependency {
                gav: gav.clone(),
                classifier: classifier.map(str::to_string),
                extension: extension.map(str::to_string),
                for_configuration: name.clone(),
            };

            let mut requested: Vec<RequestedDependency> = existing
                .requested
                .iter()
                .filter(|req| !req.matches_module(&gav.group_id, &gav.artifact_id))
                .cloned()
                .collect();
            requested.push(new_requested.clone());

            let mut next = existing.clone();
            next.requested = requested;

            if existing.can_be_resolved
                && let Some(module) = resolved
            {
                let mut resolved_deps: Vec<ResolvedDependency> = existing
                    .resolved
                    .iter()
                    .filter(|dep| {
                        !dep.matches_module(&module.identity.group_id, &module.identity.artifact_id)
                    })
                    .cloned()
                    .collect();
                resolved_deps.push(ResolvedDependency {
                    identity: module.identity.clone(),
                    requested: new_requested,
                    transitives: module.transitives.clone(),
                    classifier: classifier.map(str::to_string),
                });
                next.resolved = resolved_deps;
            }

            updated.insert(name.clone(), next);
        }

        self.with_updated_configurations(updated)
    }
}
