//! Error types for Quarry operations.
//!
//! Every validated write and every utility call reports failure through
//! [`QuarryError`]. A failed operation never mutates anything, so callers
//! can recover by simply discarding the error.

use std::fmt;
use thiserror::Error;

/// Result type for Quarry operations.
pub type Result<T> = std::result::Result<T, QuarryError>;

/// Errors that can occur during Quarry operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuarryError {
    /// A value of the wrong kind was given for a field or argument.
    #[error("{field} expects a value of kind {expected}, but {actual} was given")]
    Type {
        field: String,
        expected: String,
        actual: String,
    },

    /// A value outside the declared range or shape of a field.
    #[error("{field} must be {constraint}, but {value} was given")]
    Value {
        field: String,
        constraint: String,
        value: String,
    },

    /// A write-once field was written a second time.
    #[error("{field} is already set")]
    State { field: String },

    /// A required keyword argument is absent.
    #[error("missing required keyword argument '{0}'")]
    MissingArgument(String),

    /// Identifier generation was asked for a species it does not know.
    #[error("unknown species '{0}'")]
    UnknownSpecies(String),

    /// A key to delete is not present in any layer.
    #[error("key {0} not found in any layer")]
    KeyNotFound(String),
}

/// Discriminant of a [`QuarryError`], for callers that branch on the kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeKind,
    ValueKind,
    StateKind,
    MissingArgumentKind,
    UnknownSpeciesKind,
    KeyNotFoundKind,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::TypeKind => "type",
            ErrorKind::ValueKind => "value",
            ErrorKind::StateKind => "state",
            ErrorKind::MissingArgumentKind => "missing-argument",
            ErrorKind::UnknownSpeciesKind => "unknown-species",
            ErrorKind::KeyNotFoundKind => "key-not-found",
        };
        f.write_str(name)
    }
}

impl QuarryError {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuarryError::Type { .. } => ErrorKind::TypeKind,
            QuarryError::Value { .. } => ErrorKind::ValueKind,
            QuarryError::State { .. } => ErrorKind::StateKind,
            QuarryError::MissingArgument(_) => ErrorKind::MissingArgumentKind,
            QuarryError::UnknownSpecies(_) => ErrorKind::UnknownSpeciesKind,
            QuarryError::KeyNotFound(_) => ErrorKind::KeyNotFoundKind,
        }
    }
}

// Convenience constructors
impl QuarryError {
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        QuarryError::Type {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn value(
        field: impl Into<String>,
        constraint: impl Into<String>,
        value: impl fmt::Display,
    ) -> Self {
        QuarryError::Value {
            field: field.into(),
            constraint: constraint.into(),
            value: value.to_string(),
        }
    }

    pub fn state(field: impl Into<String>) -> Self {
        QuarryError::State {
            field: field.into(),
        }
    }

    pub fn missing_argument(name: impl Into<String>) -> Self {
        QuarryError::MissingArgument(name.into())
    }
}
