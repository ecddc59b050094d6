//! Indentation inference and auto-formatting of spliced nodes.
//!
//! Freshly parsed snippets arrive with template whitespace; before
//! insertion they are normalized against their destination so the result
//! reads as hand-written. Indentation is always taken from the file,
//! existing siblings first, then the script-wide indent unit; it is never
//! invented when a neighbor is available to copy from.

use crate::script::tree::{Block, ScriptTree, Statement, StatementKind};

/// Default indent unit when the script offers no evidence.
const DEFAULT_INDENT: &str = "    ";

/// The indent unit used by the script: the leading whitespace of the first
/// block child that starts on its own line.
pub(crate) fn indent_unit(tree: &ScriptTree) -> String {
    fn first_child_indent(statements: &[Statement], parent_indent: &str) -> Option<String> {
        for statement in statements {
            if let StatementKind::Block(block) = &statement.kind {
                let block_indent = statement.indent().unwrap_or(parent_indent);
                for child in &block.statements {
                    if let Some(child_indent) = child.indent()
                        && let Some(unit) = child_indent.strip_prefix(block_indent)
                        && !unit.is_empty()
                    {
                        return Some(unit.to_string());
                    }
                }
                if let Some(unit) = first_child_indent(&block.statements, parent_indent) {
                    return Some(unit);
                }
            }
        }
        None
    }

    first_child_indent(&tree.statements, "").unwrap_or_else(|| DEFAULT_INDENT.to_string())
}

/// The indentation children of `block` should use: copied from an existing
/// own-line child, otherwise the block's indent plus one unit.
pub(crate) fn block_child_indent(block: &Block, block_indent: &str, unit: &str) -> String {
    for child in block.statements.iter().rev() {
        if let Some(indent) = child.indent() {
            return indent.to_string();
        }
    }
    format!("{block_indent}{unit}")
}

/// Normalize a freshly parsed statement for insertion: its prefix becomes
/// a single newline plus the destination indentation.
pub(crate) fn auto_format(mut statement: Statement, indent: &str) -> Statement {
    statement.prefix = format!("\n{indent}");
    statement
}
