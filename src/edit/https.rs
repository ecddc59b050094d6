//! Rewrite plain-HTTP repository URLs to HTTPS.
//!
//! Targets `url`/`uri` statements of `maven` repositories inside a
//! `repositories` block, in either dialect. Only the leading literal
//! segment of the URL string is touched, so an interpolated tail
//! (`"http://repo/${channel}"`) keeps its template intact. Everything
//! else in the script reprints byte-identical.

use tracing::debug;

use crate::script::{BuildScript, Statement, StatementKind, leading_identifier};

/// The rewrite operation. Stateless; one value can be applied to any
/// number of scripts.
#[derive(Debug, Clone, Copy, Default)]
pub struct UseHttpsForRepositories;

impl UseHttpsForRepositories {
    pub fn new() -> Self {
        Self
    }

    /// Apply the rewrite, returning the (possibly unchanged) script.
    pub fn apply(&self, script: BuildScript) -> BuildScript {
        let (mut tree, project) = script.into_parts();
        let mut enclosing = Vec::new();
        for statement in &mut tree.statements {
            visit(statement, &mut enclosing);
        }
        BuildScript::from_parts(tree, project)
    }
}

/// Walk the tree carrying the names of the enclosing blocks, so an `url`
/// statement knows whether it sits inside `repositories { maven { … } }`
/// without re-deriving its ancestry.
fn visit(statement: &mut Statement, enclosing: &mut Vec<String>) {
    match &mut statement.kind {
        StatementKind::Block(block) => {
            let name = block.name().unwrap_or_default().to_string();
            enclosing.push(name);
            for child in &mut block.statements {
                visit(child, enclosing);
            }
            enclosing.pop();
        }
        StatementKind::Simple(text) => {
            if in_maven_repository(enclosing)
                && is_url_statement(text)
                && let Some(rewritten) = rewrite_first_literal(text)
            {
                debug!("rewrote repository URL to https");
                *text = rewritten;
            }
        }
    }
}

/// Inside a `maven` block that is itself (transitively) inside a
/// `repositories` block.
fn in_maven_repository(enclosing: &[String]) -> bool {
    enclosing
        .iter()
        .position(|name| name == "repositories")
        .is_some_and(|repositories| {
            enclosing[repositories + 1..]
                .iter()
                .any(|name| name == "maven")
        })
}

fn is_url_statement(text: &str) -> bool {
    matches!(leading_identifier(text), Some("url") | Some("uri"))
}

/// Replace `http://` with `https://` in the first string literal of the
/// statement, when that literal starts with it.
fn rewrite_first_literal(text: &str) -> Option<String> {
    let quote = text.find(['"', '\''])?;
    let literal = &text[quote + 1..];
    if !literal.starts_with("http://") {
        return None;
    }
    let mut rewritten = String::with_capacity(text.len() + 1);
    rewritten.push_str(&text[..=quote]);
    rewritten.push_str("https://");
    rewritten.push_str(&literal["http://".len()..]);
    Some(rewritten)
}
