//! Non-fatal warning attachment.
//!
//! Recoverable failures travel *with* the edited script instead of
//! replacing it: the mutation entry points return [`Annotated<T>`], a value
//! plus an ordered list of [`Warning`]s. Callers that only care about the
//! result read `value`; callers that surface diagnostics iterate
//! `warnings`. The edit is never rolled back on account of a warning.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-fatal problem encountered while applying an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Human-readable description of what went wrong.
    pub message: String,
}

impl Warning {
    /// Create a warning from any displayable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A value with zero or more warnings attached.
///
/// Returned by the mutation entry points so that failure information is
/// carried alongside, but does not block, the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated<T> {
    /// The (possibly edited) value.
    pub value: T,
    /// Warnings accumulated while producing `value`, in occurrence order.
    pub warnings: Vec<Warning>,
}

impl<T> Annotated<T> {
    /// Wrap a value with no warnings.
    pub fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Wrap a value with the given warnings.
    pub fn with_warnings(value: T, warnings: Vec<Warning>) -> Self {
        Self { value, warnings }
    }

    /// `true` when no warnings were attached.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Discard the warnings and take the value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Apply `f` to the value, keeping the warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Annotated<U> {
        Annotated {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}
