//! Ordering policy for the insertion comparator.
//!
//! The grouping rules are fixed (declarations for the same configuration
//! stay contiguous), but how *distinct* configuration names order against
//! each other is a project convention, not a hard requirement. The default
//! preserves existing file order and appends new groups at the end of the
//! block; projects that keep a canonical configuration order can supply a
//! precedence list, loadable from a TOML file:
//!
//! ```toml
//! precedence = ["api", "implementation", "testImplementation"]
//! alphabetize_within_group = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Failure to load a policy file.
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("failed to read policy file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid policy file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Comparator policy over configuration names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrderingPolicy {
    /// Canonical order between distinct configuration names. Names absent
    /// from the list have no rank and fall back to file order.
    pub precedence: Vec<String>,
    /// Place a new declaration alphabetically inside its configuration
    /// group rather than at the group's end.
    pub alphabetize_within_group: bool,
}

impl Default for OrderingPolicy {
    fn default() -> Self {
        Self {
            precedence: Vec::new(),
            alphabetize_within_group: true,
        }
    }
}

impl OrderingPolicy {
    /// Parse a policy from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, PolicyError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a policy from a TOML file.
    pub fn load(path: &Path) -> Result<Self, PolicyError> {
        let text = std::fs::read_to_string(path).map_err(|source| PolicyError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Rank of a configuration name in the precedence list, if listed.
    pub fn rank(&self, configuration: &str) -> Option<usize> {
        self.precedence.iter().position(|name| name == configuration)
    }
}
