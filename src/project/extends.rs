//! Extends-edge traversal over the configuration graph.
//!
//! An edge `A → B` means "A extends B". Answering "which configurations
//! inherit from `B`?" walks the edges in reverse. Traversal is guarded by a
//! visited set so a cyclic script (tolerated, never created here) cannot
//! hang the walk.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet, VecDeque};

use crate::project::configuration::Configuration;

/// Directed extends-graph built from a set of configurations.
pub(crate) struct ExtendsGraph {
    graph: DiGraph<String, ()>,
    node_map: HashMap<String, NodeIndex>,
}

impl ExtendsGraph {
    /// Build the graph from the project's configurations.
    ///
    /// Edges referencing configurations absent from the map are kept:
    /// scripts can extend configurations contributed by plugins the model
    /// does not know about, and those still need to resolve by name.
    pub(crate) fn build<'a>(configurations: impl Iterator<Item = &'a Configuration>) -> Self {
        let mut this = Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        };
        for configuration in configurations {
            let from = this.ensure_node(&configuration.name);
            for base in &configuration.extends_from {
                let to = this.ensure_node(base);
                if !this.graph.contains_edge(from, to) {
                    this.graph.add_edge(from, to, ());
                }
            }
        }
        this
    }

    fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.node_map.get(name) {
            index
        } else {
            let index = self.graph.add_node(name.to_string());
            self.node_map.insert(name.to_string(), index);
            index
        }
    }

    /// Names of configurations that extend `base`, directly or (when
    /// `transitive`) through any chain of extends edges.
    ///
    /// The base itself is not included. Unknown names yield an empty set.
    pub(crate) fn extending_from(&self, base: &str, transitive: bool) -> HashSet<String> {
        let mut extending = HashSet::new();
        let Some(&base_idx) = self.node_map.get(base) else {
            return extending;
        };

        if !transitive {
            for neighbor in self.graph.neighbors_directed(base_idx, Direction::Incoming) {
                extending.insert(self.graph[neighbor].clone());
            }
            return extending;
        }

        let mut queue = VecDeque::new();
        let mut visited = HashSet::new();
        queue.push_back(base_idx);
        visited.insert(base_idx);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.graph.neighbors_directed(current, Direction::Incoming) {
                if visited.insert(neighbor) {
                    extending.insert(self.graph[neighbor].clone());
                    queue.push_back(neighbor);
                }
            }
        }

        extending
    }
}
