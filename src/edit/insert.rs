//! Ordered insertion of a rendered declaration into the block.
//!
//! Placement rules:
//! - declarations for the same configuration form one contiguous group;
//!   the new entry joins its group (alphabetically within the group under
//!   the default policy);
//! - distinct configuration names keep existing file order; a new group
//!   goes to the end of the block unless the policy's precedence list
//!   ranks both names;
//! - blank-line boundaries between groups are maintained: joining a group
//!   copies a member's whitespace, starting a group adds one blank-line
//!   separator, and displacing a group head moves the boundary rather
//!   than duplicating it.
//!
//! Existing siblings are never reordered relative to one another, and a
//! prefix carrying comments is never rewritten.

use tracing::debug;

use crate::edit::policy::OrderingPolicy;
use crate::script::{Block, Statement, classify, normalized_text};

/// Splice `declaration` (already auto-formatted to `child_indent`) into
/// `block` at the position dictated by the policy.
pub(crate) fn insert_declaration(
    block: &mut Block,
    block_indent: &str,
    child_indent: &str,
    mut declaration: Statement,
    configuration: &str,
    policy: &OrderingPolicy,
) {
    let names: Vec<Option<String>> = block
        .statements
        .iter()
        .map(|statement| classify(statement).map(|view| view.configuration))
        .collect();

    let index = insertion_index(block, &names, &declaration, configuration, policy);
    debug!(configuration, index, "insertion point chosen");

    let indent_of = |statement: &Statement| {
        statement
            .indent()
            .map_or_else(|| child_indent.to_string(), str::to_string)
    };

    if index == block.statements.len() {
        if let Some(previous) = block.statements.last() {
            if names[index - 1].as_deref() == Some(configuration) {
                declaration.prefix = format!("\n{}", indent_of(previous));
            } else {
                // New group at the end of the block.
                declaration.prefix = format!("\n\n{child_indent}");
            }
        }
        block.statements.push(declaration);
    } else {
        let current_name = names[index].as_deref();
        if index == 0 {
            declaration.prefix = format!("\n{}", indent_of(&block.statements[0]));
            if current_name != Some(configuration) {
                let boundary = format!("\n\n{}", indent_of(&block.statements[0]));
                set_whitespace_prefix(&mut block.statements[0], boundary);
            }
        } else {
            let previous_name = names[index - 1].as_deref();
            if previous_name == Some(configuration) {
                // Joining the group that ends right before the boundary.
                declaration.prefix = format!("\n{}", indent_of(&block.statements[index - 1]));
            } else if current_name == Some(configuration) {
                // Displacing the head of the group: the boundary prefix
                // moves to the new entry, the old head closes up.
                let current = &mut block.statements[index];
                if has_comment(&current.prefix) {
                    // The old head keeps its comment; the new head starts
                    // the group with its own blank-line boundary.
                    declaration.prefix = format!("\n\n{}", indent_of(current));
                } else {
                    declaration.prefix = current.prefix.clone();
                    let plain = format!("\n{}", indent_of(current));
                    set_whitespace_prefix(current, plain);
                }
            } else {
                // A brand-new group spliced between two others.
                declaration.prefix = format!("\n\n{child_indent}");
                let current = &mut block.statements[index];
                if !has_blank_line(&current.prefix) {
                    let boundary = format!("\n\n{}", indent_of(current));
                    set_whitespace_prefix(current, boundary);
                }
            }
        }
        block.statements.insert(index, declaration);
    }

    // An inline `dependencies {}` gets its closing brace moved to its own
    // line once it has a child.
    if !block.end.contains('\n') {
        block.end = format!("\n{block_indent}");
    }
}

/// First sibling that must sort after the new declaration; the block
/// length when none does.
fn insertion_index(
    block: &Block,
    names: &[Option<String>],
    declaration: &Statement,
    configuration: &str,
    policy: &OrderingPolicy,
) -> usize {
    let group: Vec<usize> = names
        .iter()
        .enumerate()
        .filter_map(|(i, name)| (name.as_deref() == Some(configuration)).then_some(i))
        .collect();

    if let Some(&last) = group.last() {
        if policy.alphabetize_within_group {
            let new_text = normalized_text(declaration);
            for &member in &group {
                if normalized_text(&block.statements[member]) > new_text {
                    return member;
                }
            }
        }
        return last + 1;
    }

    if let Some(new_rank) = policy.rank(configuration) {
        for (i, name) in names.iter().enumerate() {
            let Some(name) = name.as_deref() else { continue };
            if policy.rank(name).is_some_and(|rank| rank > new_rank) {
                return i;
            }
        }
    }

    block.statements.len()
}

/// Replace a prefix only when doing so cannot lose a comment.
fn set_whitespace_prefix(statement: &mut Statement, prefix: String) {
    if !has_comment(&statement.prefix) {
        statement.prefix = prefix;
    }
}

fn has_comment(prefix: &str) -> bool {
    prefix.contains("//") || prefix.contains("/*")
}

fn has_blank_line(prefix: &str) -> bool {
    prefix.matches('\n').count() >= 2
}
