//! Error types for selkit.
//!
//! Library crates use [`SelkitError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::fmt;
use std::path::PathBuf;

/// Which selector-building rule a [`SelkitError::Validation`] violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// Element, id or pseudo-element appended twice to one compound.
    DuplicateKind,
    /// Fragment appended after a fragment that must follow it.
    Ordering,
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKind => f.write_str("duplicate kind"),
            Self::Ordering => f.write_str("ordering violation"),
        }
    }
}

/// Top-level error type for all selkit operations.
#[derive(Debug, thiserror::Error)]
pub enum SelkitError {
    /// Selector fragment rejected by the uniqueness or ordering rules.
    #[error("{rule}: {message}")]
    Validation {
        rule: ValidationRule,
        message: String,
    },

    /// JSON encoding or decoding error.
    #[error("json error: {message}")]
    Json { message: String },

    /// Recipe or other structured input could not be parsed.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SelkitError>;

impl SelkitError {
    /// Create a duplicate-kind validation error.
    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Validation {
            rule: ValidationRule::DuplicateKind,
            message: msg.into(),
        }
    }

    /// Create an ordering validation error.
    pub fn ordering(msg: impl Into<String>) -> Self {
        Self::Validation {
            rule: ValidationRule::Ordering,
            message: msg.into(),
        }
    }

    /// Create a JSON error from any displayable message.
    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The violated rule, if this is a validation error.
    pub fn rule(&self) -> Option<ValidationRule> {
        match self {
            Self::Validation { rule, .. } => Some(*rule),
            _ => None,
        }
    }
}
