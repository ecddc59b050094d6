//! Locating and synthesizing the `dependencies` block.

use tracing::debug;

use crate::core::EditError;
use crate::script::{Block, ScriptTree, StatementKind};

/// Template parsed when a script has no `dependencies` block. The newline
/// puts the closing brace on its own line once a child is inserted.
const EMPTY_BLOCK_TEMPLATE: &str = "dependencies {\n}";

/// Index of the first top-level `dependencies { … }` statement.
///
/// Only a bare `dependencies` call with a brace body qualifies; something
/// like `project.dependencies { … }` is left alone.
pub(crate) fn find_dependencies_block(tree: &ScriptTree) -> Option<usize> {
    tree.statements().iter().position(|statement| {
        matches!(&statement.kind, StatementKind::Block(block) if is_dependencies_block(block))
    })
}

fn is_dependencies_block(block: &Block) -> bool {
    let head = block.head.trim();
    let Some(rest) = head.strip_prefix("dependencies") else {
        return false;
    };
    rest.trim() == "{"
}

/// Append an empty `dependencies` block as the script's last top-level
/// statement and return its index.
///
/// The block is separated from prior content by a blank line; a previously
/// empty script gets it with no leading separator.
pub(crate) fn synthesize_dependencies_block(tree: &mut ScriptTree) -> Result<usize, EditError> {
    let template = ScriptTree::parse(tree.dialect(), EMPTY_BLOCK_TEMPLATE)
        .map_err(|err| EditError::MalformedTemplate {
            reason: err.to_string(),
        })?;
    let mut block = template
        .statements()
        .first()
        .cloned()
        .ok_or_else(|| EditError::MalformedTemplate {
            reason: "empty dependencies template produced no statement".to_string(),
        })?;

    block.prefix = if tree.is_empty() {
        String::new()
    } else {
        "\n\n".to_string()
    };
    debug!(empty_script = tree.is_empty(), "synthesizing dependencies block");

    tree.statements.push(block);
    Ok(tree.statements.len() - 1)
}
