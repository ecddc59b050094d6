//! Classification of dependency-declaration statements.
//!
//! Inside a `dependencies` block, a declaration is a call whose name is
//! the configuration (`implementation`, `testRuntimeOnly`, quoted
//! `'default'`, …). The first argument decides the notation:
//!
//! - **compact**: a single string (or string template),
//!   `implementation "g:a:v"` / `implementation("g:a:v")`
//! - **keyed**: named arguments,
//!   `implementation group: "g", name: "a"` /
//!   `implementation(group = "g", name = "a")`
//!
//! Statements with some other argument shape (`project(…)`, `platform(…)`,
//! a bare closure) still carry a configuration name for ordering purposes
//! but do not vote in the style election.

use regex::Regex;
use std::sync::LazyLock;

use crate::script::tree::Statement;

/// The two ways a single declaration can be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationStyle {
    /// Single-string GAV notation.
    Compact,
    /// Named group/name/version/classifier/ext arguments.
    Keyed,
}

/// A sibling statement recognized as a dependency declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DeclarationView {
    /// Configuration name the declaration targets.
    pub configuration: String,
    /// Notation, when the argument shape is recognizable.
    pub style: Option<DeclarationStyle>,
}

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)^\s*(?:'(?P<sq>[^']+)'|"(?P<dq>[^"]+)"|(?P<id>[A-Za-z_][A-Za-z0-9_]*))(?P<rest>.*)$"#)
        .expect("declaration name pattern")
});

static KEYED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*\s*(?::|=[^=])").expect("keyed pattern"));

/// Statement names that look like calls but are control flow, never
/// dependency declarations.
const CONTROL_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "switch", "when", "do", "try", "catch", "return", "throw",
];

/// Classify a statement as a dependency declaration, if it is one.
pub(crate) fn classify(statement: &Statement) -> Option<DeclarationView> {
    let text = statement.classification_text();
    let captures = NAME_RE.captures(text)?;
    let configuration = captures
        .name("sq")
        .or_else(|| captures.name("dq"))
        .or_else(|| captures.name("id"))?
        .as_str();
    if CONTROL_KEYWORDS.contains(&configuration) {
        return None;
    }

    let rest = captures.name("rest").map_or("", |m| m.as_str()).trim();
    if rest.is_empty() {
        return None;
    }

    let args = rest.strip_prefix('(').unwrap_or(rest).trim_start();
    let style = if args.starts_with('"') || args.starts_with('\'') {
        Some(DeclarationStyle::Compact)
    } else if KEYED_RE.is_match(args) {
        Some(DeclarationStyle::Keyed)
    } else {
        None
    };

    Some(DeclarationView {
        configuration: configuration.to_string(),
        style,
    })
}

/// Text used for in-group ordering comparisons: the declaration span with
/// collapsed whitespace, lower-cased so ordering is case-insensitive, and
/// quote characters unified so `'a'` and `"a"` compare as equals.
pub(crate) fn normalized_text(statement: &Statement) -> String {
    let mut out = String::new();
    let mut last_was_space = false;
    for c in statement.classification_text().trim().chars() {
        if c.is_whitespace() {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else if c == '\'' {
            out.push('"');
            last_was_space = false;
        } else {
            for lower in c.to_lowercase() {
                out.push(lower);
            }
            last_was_space = false;
        }
    }
    out
}
