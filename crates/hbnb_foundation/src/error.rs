//! Error types for the hbnb system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::Type;

/// The main error type for hbnb operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred (a path, a command).
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates an unknown kind error.
    #[must_use]
    pub fn unknown_kind(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownKind(name.into()))
    }

    /// Creates an instance not found error.
    #[must_use]
    pub fn instance_not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self::new(ErrorKind::InstanceNotFound {
            kind: kind.into(),
            id: id.into(),
        })
    }

    /// Creates an unknown field error.
    #[must_use]
    pub fn unknown_field(kind: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownField {
            kind: kind.into(),
            field: field.into(),
        })
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(field: impl Into<String>, expected: Type) -> Self {
        Self::new(ErrorKind::InvalidValue {
            field: field.into(),
            expected,
        })
    }

    /// Creates a persistence error.
    #[must_use]
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Persistence(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates a malformed input error.
    #[must_use]
    pub fn malformed(reason: Malformed) -> Self {
        Self::new(ErrorKind::MalformedInput(reason))
    }

    /// Returns true if this error was raised by a failed backing-file write.
    #[must_use]
    pub const fn is_persistence(&self) -> bool {
        matches!(self.kind, ErrorKind::Persistence(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Kind name is not one of the registered kinds.
    #[error("unknown kind: {0}")]
    UnknownKind(String),

    /// Kind is registered but nothing is stored under that id.
    #[error("no {kind} with id {id}")]
    InstanceNotFound {
        /// The kind that was searched.
        kind: String,
        /// The id that was not found.
        id: String,
    },

    /// Update targets a field the entity does not carry, or a protected field.
    #[error("{kind} has no settable field {field}")]
    UnknownField {
        /// The kind of the entity being updated.
        kind: String,
        /// The field name that was rejected.
        field: String,
    },

    /// A value could not be coerced to its field's declared type.
    #[error("invalid value for {field}: expected {expected}")]
    InvalidValue {
        /// The field being assigned.
        field: String,
        /// The declared type of the field.
        expected: Type,
    },

    /// The backing file could not be read or written.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// A persisted record could not be decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A command was parsed but its shape or arity is invalid.
    #[error("malformed input: {0}")]
    MalformedInput(Malformed),

    /// Internal error (terminal or editor failure).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Reasons a command line is rejected before it reaches the store.
///
/// The `Display` form is the exact phrase shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    /// First positional argument absent.
    ClassNameMissing,
    /// Second positional argument absent.
    InstanceIdMissing,
    /// Third positional argument absent.
    AttributeNameMissing,
    /// Fourth positional argument absent.
    ValueMissing,
    /// More positional arguments than the command accepts.
    TooManyArguments(String),
    /// The line names no known command.
    UnknownCommand(String),
    /// Dotted form names a method outside the method table.
    InvalidMethod,
    /// Quoting or literal syntax could not be parsed.
    InvalidSyntax,
    /// `help` was asked about something that is not a command.
    NoHelp(String),
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClassNameMissing => write!(f, "class name missing"),
            Self::InstanceIdMissing => write!(f, "instance id missing"),
            Self::AttributeNameMissing => write!(f, "attribute name missing"),
            Self::ValueMissing => write!(f, "value missing"),
            Self::TooManyArguments(command) => write!(f, "too many arguments for {command}"),
            Self::UnknownCommand(line) => write!(f, "unknown syntax: {line}"),
            Self::InvalidMethod => write!(f, "invalid method"),
            Self::InvalidSyntax => write!(f, "invalid syntax"),
            Self::NoHelp(topic) => write!(f, "no help for {topic}"),
        }
    }
}
