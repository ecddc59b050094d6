//! Statement-level lossless parsing.
//!
//! The scanner splits script text into trivia-prefixed statements without
//! interpreting expressions: a statement runs to the first newline (or
//! `;`) at bracket depth zero, with strings and comments consumed
//! atomically so braces inside them never confuse the depth tracking. A
//! statement shaped like a call with a trailing brace body is then
//! structured into a [`Block`] recursively; anything else stays a verbatim
//! span.
//!
//! Not understood, by design: slashy strings, backslash line
//! continuations, and string interpolations that themselves contain quote
//! characters. Statements using them either reprint verbatim or fail the
//! parse, which is fatal for the file per the error contract.

use crate::core::EditError;
use crate::script::tree::{Block, Statement, StatementKind};

/// Split `text` into trivia-prefixed statements plus trailing trivia.
///
/// `base_line` is the 1-based line the text starts on, used for
/// diagnostics when splitting block bodies recursively.
pub(crate) fn split_statements(
    text: &str,
    base_line: usize,
) -> Result<(Vec<Statement>, String), EditError> {
    let mut scanner = Scanner::new(text, base_line);
    let mut statements = Vec::new();
    loop {
        let trivia_start = scanner.pos;
        scanner.skip_trivia()?;
        let prefix = &text[trivia_start..scanner.pos];
        if scanner.at_end() {
            return Ok((statements, prefix.to_string()));
        }
        let statement_start = scanner.pos;
        let statement_line = scanner.line;
        scanner.read_statement()?;
        let raw = &text[statement_start..scanner.pos];
        statements.push(Statement {
            prefix: prefix.to_string(),
            kind: structure(raw, statement_line)?,
        });
    }
}

/// Decide whether a raw statement is a brace block and structure it.
fn structure(raw: &str, line: usize) -> Result<StatementKind, EditError> {
    let Some(open) = find_block_open(raw, line)? else {
        return Ok(StatementKind::Simple(raw.to_string()));
    };
    let Some(close) = find_matching_close(raw, open, line)? else {
        return Ok(StatementKind::Simple(raw.to_string()));
    };
    if close != raw.len() - 1 {
        // Text after the closing brace (`} else {`, chained calls): keep
        // the whole span verbatim.
        return Ok(StatementKind::Simple(raw.to_string()));
    }

    let head = &raw[..=open];
    let inner = &raw[open + 1..close];
    let inner_line = line + head.matches('\n').count();
    let (children, end) = split_statements(inner, inner_line)?;
    Ok(StatementKind::Block(Block {
        head: head.to_string(),
        statements: children,
        end,
    }))
}

/// Position of the first `{` at paren/bracket depth zero, if any.
fn find_block_open(raw: &str, line: usize) -> Result<Option<usize>, EditError> {
    let mut scanner = Scanner::new(raw, line);
    let mut depth = 0i32;
    while let Some(c) = scanner.peek() {
        match c {
            b'"' | b'\'' => scanner.consume_string()?,
            b'/' if scanner.starts_with("//") => scanner.consume_line_comment(),
            b'/' if scanner.starts_with("/*") => scanner.consume_block_comment()?,
            b'(' | b'[' => {
                depth += 1;
                scanner.bump();
            }
            b')' | b']' => {
                depth -= 1;
                scanner.bump();
            }
            b'{' => {
                if depth == 0 {
                    return Ok(Some(scanner.pos));
                }
                scanner.bump();
            }
            _ => scanner.bump(),
        }
    }
    Ok(None)
}

/// Position of the `}` matching the `{` at `open`.
fn find_matching_close(raw: &str, open: usize, line: usize) -> Result<Option<usize>, EditError> {
    let mut scanner = Scanner::new(raw, line);
    while scanner.pos < open {
        scanner.bump();
    }
    scanner.bump(); // the opening brace
    let mut depth = 1i32;
    while let Some(c) = scanner.peek() {
        match c {
            b'"' | b'\'' => scanner.consume_string()?,
            b'/' if scanner.starts_with("//") => scanner.consume_line_comment(),
            b'/' if scanner.starts_with("/*") => scanner.consume_block_comment()?,
            b'{' => {
                depth += 1;
                scanner.bump();
            }
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(Some(scanner.pos));
                }
                scanner.bump();
            }
            _ => scanner.bump(),
        }
    }
    Ok(None)
}

/// Byte-level cursor with line tracking. Delimiters are all ASCII, so
/// multi-byte characters pass through untouched.
struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str, line: usize) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
            line,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) {
        if self.bytes.get(self.pos) == Some(&b'\n') {
            self.line += 1;
        }
        self.pos += 1;
    }

    // Byte-based: `pos` may sit inside a multi-byte character while a
    // comment or string is being scanned.
    fn starts_with(&self, pat: &str) -> bool {
        self.bytes[self.pos..].starts_with(pat.as_bytes())
    }

    /// Advance over whitespace and comments.
    fn skip_trivia(&mut self) -> Result<(), EditError> {
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() {
                self.bump();
            } else if self.starts_with("//") {
                self.consume_line_comment();
            } else if self.starts_with("/*") {
                self.consume_block_comment()?;
            } else {
                break;
            }
        }
        Ok(())
    }

    /// Advance over one statement: to the first newline or `;` at bracket
    /// depth zero. The terminating newline is left for the next prefix.
    fn read_statement(&mut self) -> Result<(), EditError> {
        let start_line = self.line;
        let mut depth = 0i32;
        while let Some(c) = self.peek() {
            match c {
                b'"' | b'\'' => self.consume_string()?,
                b'/' if self.starts_with("//") => self.consume_line_comment(),
                b'/' if self.starts_with("/*") => self.consume_block_comment()?,
                b'(' | b'[' | b'{' => {
                    depth += 1;
                    self.bump();
                }
                b')' | b']' | b'}' => {
                    depth -= 1;
                    if depth < 0 {
                        return Err(EditError::parse_at(
                            self.line,
                            format!("unexpected closing '{}'", c as char),
                        ));
                    }
                    self.bump();
                }
                b'\n' => {
                    if depth == 0 {
                        return Ok(());
                    }
                    self.bump();
                }
                b';' => {
                    self.bump();
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ => self.bump(),
            }
        }
        if depth > 0 {
            return Err(EditError::parse_at(
                start_line,
                "unbalanced delimiters at end of file",
            ));
        }
        Ok(())
    }

    /// Advance over a string literal starting at the current quote.
    /// Handles single- and triple-quoted forms with backslash escapes.
    fn consume_string(&mut self) -> Result<(), EditError> {
        let quote = self.bytes[self.pos];
        let start_line = self.line;
        let triple = {
            let q = quote as char;
            let mut pat = String::new();
            pat.push(q);
            pat.push(q);
            pat.push(q);
            self.starts_with(&pat)
        };
        if triple {
            self.bump();
            self.bump();
            self.bump();
            loop {
                if self.at_end() {
                    return Err(EditError::parse_at(start_line, "unterminated string literal"));
                }
                if self.bytes[self.pos] == quote
                    && self.bytes.get(self.pos + 1) == Some(&quote)
                    && self.bytes.get(self.pos + 2) == Some(&quote)
                {
                    self.bump();
                    self.bump();
                    self.bump();
                    return Ok(());
                }
                if self.bytes[self.pos] == b'\\' {
                    self.bump();
                }
                self.bump();
            }
        }

        self.bump();
        while let Some(c) = self.peek() {
            match c {
                b'\\' => {
                    self.bump();
                    self.bump();
                }
                b'\n' => {
                    return Err(EditError::parse_at(start_line, "unterminated string literal"));
                }
                c if c == quote => {
                    self.bump();
                    return Ok(());
                }
                _ => self.bump(),
            }
        }
        Err(EditError::parse_at(start_line, "unterminated string literal"))
    }

    fn consume_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == b'\n' {
                return;
            }
            self.bump();
        }
    }

    fn consume_block_comment(&mut self) -> Result<(), EditError> {
        let start_line = self.line;
        self.bump();
        self.bump();
        while !self.at_end() {
            if self.starts_with("*/") {
                self.bump();
                self.bump();
                return Ok(());
            }
            self.bump();
        }
        Err(EditError::parse_at(start_line, "unterminated block comment"))
    }
}
