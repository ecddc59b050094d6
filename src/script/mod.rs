//! Lossless build-script model: parsing, printing, and the statement tree.
//!
//! The model is deliberately narrow. It understands exactly enough
//! structure for dependency surgery (trivia-prefixed statements, recursive
//! brace blocks, and the shape of declaration calls) and keeps every other
//! byte verbatim, so reprinting an untouched region is byte-identical to
//! the input. It is the seam where a full Groovy/Kotlin
//! parser could be swapped in without touching the mutation engine.

mod declaration;
mod format;
mod parser;
mod tree;


pub use declaration::DeclarationStyle;
pub use tree::{Block, Dialect, ScriptTree, Statement, StatementKind};

pub(crate) use declaration::{classify, normalized_text};
pub(crate) use format::{auto_format, block_child_indent, indent_unit};
pub(crate) use tree::leading_identifier;

use crate::core::EditError;
use crate::project::ProjectGraph;

/// A build script: the lossless text tree plus the project's
/// dependency-configuration graph.
///
/// The graph plays the role the build tool's own model would: it knows
/// which configurations exist, how they extend each other, and what each
/// one already requests. It lives alongside the tree for the duration of a
/// mutation and is replaced wholesale when the mutation succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildScript {
    tree: ScriptTree,
    project: ProjectGraph,
}

impl BuildScript {
    /// Pair an already parsed tree with its project graph.
    pub fn new(tree: ScriptTree, project: ProjectGraph) -> Self {
        Self { tree, project }
    }

    /// Parse script text and pair it with the project graph.
    pub fn parse(dialect: Dialect, text: &str, project: ProjectGraph) -> Result<Self, EditError> {
        Ok(Self {
            tree: ScriptTree::parse(dialect, text)?,
            project,
        })
    }

    /// The script's dialect.
    pub fn dialect(&self) -> Dialect {
        self.tree.dialect()
    }

    /// The lossless statement tree.
    pub fn tree(&self) -> &ScriptTree {
        &self.tree
    }

    /// The dependency-configuration graph.
    pub fn project(&self) -> &ProjectGraph {
        &self.project
    }

    /// Reprint the script text.
    pub fn print(&self) -> String {
        self.tree.print()
    }

    pub(crate) fn into_parts(self) -> (ScriptTree, ProjectGraph) {
        (self.tree, self.project)
    }

    pub(crate) fn from_parts(tree: ScriptTree, project: ProjectGraph) -> Self {
        Self { tree, project }
    }
}
