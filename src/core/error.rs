//! Error types for build-script editing.
//!
//! Only unrecoverable failures surface as [`EditError`]. Everything the
//! engine can recover from (an unreachable metadata source, an unknown
//! configuration name) is either attached to the result as a
//! [`crate::core::Warning`] or treated as a silent no-op, so a single bad
//! dependency never rolls back an otherwise valid textual edit.

use thiserror::Error;

/// Fatal errors raised while editing a build script.
///
/// Both variants abort the whole operation for the affected file; the
/// caller receives no partially edited script.
#[derive(Error, Debug)]
pub enum EditError {
    /// The build script text could not be parsed into a lossless tree.
    #[error("failed to parse build script: {reason}")]
    Parse {
        /// What the scanner choked on, with a line number where known.
        reason: String,
    },

    /// A rendered declaration snippet did not parse back into a tree.
    ///
    /// This indicates invalid coordinate input (for example an embedded
    /// quote in an artifact id), since the templates themselves are fixed.
    #[error("generated declaration did not parse: {reason}")]
    MalformedTemplate {
        /// Parse failure reported for the rendered snippet.
        reason: String,
    },
}

impl EditError {
    pub(crate) fn parse(reason: impl Into<String>) -> Self {
        EditError::Parse {
            reason: reason.into(),
        }
    }

    pub(crate) fn parse_at(line: usize, reason: impl Into<String>) -> Self {
        EditError::Parse {
            reason: format!("line {}: {}", line, reason.into()),
        }
    }
}
