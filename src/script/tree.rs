//! The lossless statement tree.
//!
//! A script is an ordered sequence of statements, each carrying its leading
//! trivia (whitespace and comments) verbatim in `prefix`. A statement whose
//! text is a call followed by a brace-delimited body is structured as a
//! [`Block`] with its own child statements; everything else is kept as a
//! single verbatim [`StatementKind::Simple`] span. Reprinting concatenates
//! the stored bytes, so regions the editor does not touch come back
//! byte-identical.

use serde::{Deserialize, Serialize};

use crate::core::EditError;
use crate::script::parser;

/// Which concrete script syntax a file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    /// `build.gradle` (Groovy DSL).
    Groovy,
    /// `build.gradle.kts` (Kotlin DSL).
    Kotlin,
}

impl Dialect {
    /// Infer the dialect from a file name, defaulting to Groovy.
    pub fn from_file_name(name: &str) -> Self {
        if name.ends_with(".kts") {
            Dialect::Kotlin
        } else {
            Dialect::Groovy
        }
    }
}

/// A parsed build script: top-level statements plus the trivia after the
/// last statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTree {
    pub(crate) dialect: Dialect,
    pub(crate) statements: Vec<Statement>,
    pub(crate) trailing: String,
}

impl ScriptTree {
    /// Parse script text into a lossless tree.
    ///
    /// Fails with [`EditError::Parse`] on unbalanced delimiters or
    /// unterminated strings/comments; a parse failure aborts the whole
    /// edit for the file.
    pub fn parse(dialect: Dialect, text: &str) -> Result<Self, EditError> {
        let (statements, trailing) = parser::split_statements(text, 1)?;
        Ok(Self {
            dialect,
            statements,
            trailing,
        })
    }

    /// The dialect this tree was parsed as.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Top-level statements in file order.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Reprint the script. Untouched statements come back byte-identical.
    pub fn print(&self) -> String {
        let mut out = String::new();
        for statement in &self.statements {
            statement.print_into(&mut out);
        }
        out.push_str(&self.trailing);
        out
    }

    /// `true` when the script holds no statements at all.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// One statement plus its leading trivia.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Whitespace and comments preceding the statement, verbatim.
    pub prefix: String,
    pub kind: StatementKind,
}

/// Statement body: verbatim text, or a structured brace block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementKind {
    /// Any statement the editor does not need to look inside.
    Simple(String),
    /// A call with a brace-delimited body, e.g. `dependencies { … }`.
    Block(Block),
}

/// A brace-delimited block statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Statement text through the opening `{`, e.g. `dependencies {`.
    pub head: String,
    /// Child statements in file order.
    pub statements: Vec<Statement>,
    /// Trivia between the last child and the closing `}`.
    pub end: String,
}

impl Statement {
    pub(crate) fn print_into(&self, out: &mut String) {
        out.push_str(&self.prefix);
        match &self.kind {
            StatementKind::Simple(text) => out.push_str(text),
            StatementKind::Block(block) => {
                out.push_str(&block.head);
                for child in &block.statements {
                    child.print_into(out);
                }
                out.push_str(&block.end);
                out.push('}');
            }
        }
    }

    /// The statement text relevant for classification: the whole span for
    /// a simple statement, the head (without the opening `{`) for a block,
    /// so a declaration with a configure closure still classifies.
    pub(crate) fn classification_text(&self) -> &str {
        match &self.kind {
            StatementKind::Simple(text) => text,
            StatementKind::Block(block) => {
                block.head.strip_suffix('{').unwrap_or(&block.head)
            }
        }
    }

    /// Indentation of this statement: the prefix content after its last
    /// newline, or `None` when the prefix has no newline (same-line
    /// statement).
    pub(crate) fn indent(&self) -> Option<&str> {
        self.prefix.rfind('\n').map(|at| &self.prefix[at + 1..])
    }
}

impl Block {
    /// The identifier the block call starts with, e.g. `dependencies`.
    pub(crate) fn name(&self) -> Option<&str> {
        leading_identifier(&self.head)
    }
}

/// Leading identifier of a statement text, skipping whitespace.
pub(crate) fn leading_identifier(text: &str) -> Option<&str> {
    let trimmed = text.trim_start();
    let end = trimmed
        .char_indices()
        .find(|(i, c)| {
            if *i == 0 {
                !(c.is_ascii_alphabetic() || *c == '_')
            } else {
                !(c.is_ascii_alphanumeric() || *c == '_')
            }
        })
        .map_or(trimmed.len(), |(i, _)| i);
    if end == 0 { None } else { Some(&trimmed[..end]) }
}
