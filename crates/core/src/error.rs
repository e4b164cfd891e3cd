//! Error types for attrmap
//!
//! Every pipeline failure is an [`Error`]: a marshal or unmarshal wrapper
//! that carries the failing element index (for collections) and exactly
//! one [`Cause`]. Causes in turn wrap the codec errors ([`DocumentError`],
//! [`AttributeError`], [`KeyError`]).
//!
//! Callers test membership with [`Error::is`] and an [`ErrorKind`] instead
//! of inspecting messages:
//!
//! ```
//! use attrmap_core::{Cause, Error, ErrorKind};
//!
//! let err = Error::marshal(Cause::invalid_input("u32", "not a registered record type"));
//! assert!(err.is(ErrorKind::FailedToMarshal));
//! assert!(err.is(ErrorKind::InvalidInput));
//! assert!(!err.is(ErrorKind::InvalidOutput));
//! ```
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::limits::LimitError;
use crate::table::KeyError;
use thiserror::Error;

/// Result type alias for attrmap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Closed set of error kinds a caller can test for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Encode input is neither a record nor a homogeneous record collection
    InvalidInput,
    /// Decode destination is not a valid write target or has the wrong shape
    InvalidOutput,
    /// Any encode failure
    FailedToMarshal,
    /// Any decode failure
    FailedToUnmarshal,
    /// Encode failed converting the record into the canonical document
    FailedToMarshalIntermediary,
    /// Decode failed converting the canonical document into the record
    FailedToUnmarshalIntermediary,
}

/// Pipeline error
///
/// Always one of the two pipeline wrappers; `index` is set when the
/// failure belongs to one element of a collection.
#[derive(Debug, Error)]
pub enum Error {
    /// Encode pipeline failure
    #[error("attrmap: failed to marshal record to attribute value{}: {cause}", at_index(.index))]
    Marshal {
        /// Index of the failing collection element
        index: Option<usize>,
        /// What went wrong
        #[source]
        cause: Cause,
    },

    /// Decode pipeline failure
    #[error("attrmap: failed to unmarshal attribute value to record{}: {cause}", at_index(.index))]
    Unmarshal {
        /// Index of the failing collection element
        index: Option<usize>,
        /// What went wrong
        #[source]
        cause: Cause,
    },
}

fn at_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {}", i),
        None => String::new(),
    }
}

impl Error {
    /// Wrap a cause as an encode failure
    pub fn marshal(cause: Cause) -> Self {
        Error::Marshal { index: None, cause }
    }

    /// Wrap a cause as a decode failure
    pub fn unmarshal(cause: Cause) -> Self {
        Error::Unmarshal { index: None, cause }
    }

    /// Attach the index of the failing collection element
    pub fn at(self, i: usize) -> Self {
        match self {
            Error::Marshal { cause, .. } => Error::Marshal {
                index: Some(i),
                cause,
            },
            Error::Unmarshal { cause, .. } => Error::Unmarshal {
                index: Some(i),
                cause,
            },
        }
    }

    /// Top-level kind: `FailedToMarshal` or `FailedToUnmarshal`
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Marshal { .. } => ErrorKind::FailedToMarshal,
            Error::Unmarshal { .. } => ErrorKind::FailedToUnmarshal,
        }
    }

    /// The wrapped cause
    pub fn cause(&self) -> &Cause {
        match self {
            Error::Marshal { cause, .. } | Error::Unmarshal { cause, .. } => cause,
        }
    }

    /// Index of the failing collection element, if any
    pub fn index(&self) -> Option<usize> {
        match self {
            Error::Marshal { index, .. } | Error::Unmarshal { index, .. } => *index,
        }
    }

    /// Whether this error belongs to `kind`, at the wrapper or cause level
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == kind || self.cause().kind() == Some(kind)
    }
}

/// Sub-cause of a pipeline failure
#[derive(Debug, Error)]
pub enum Cause {
    /// Encode input is not a record or record collection
    #[error("invalid input, must be a record or a collection of records: {type_name} ({reason})")]
    InvalidInput {
        /// Runtime type of the offending input
        type_name: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Decode destination is not a record or record collection target
    #[error("invalid output, must be a record or a collection of records: {type_name} ({reason})")]
    InvalidOutput {
        /// Runtime type of the offending destination
        type_name: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Record to canonical document failed
    #[error("failed to marshal intermediary document: {0}")]
    MarshalIntermediary(#[source] DocumentError),

    /// Canonical document to record failed
    #[error("failed to unmarshal intermediary document: {0}")]
    UnmarshalIntermediary(#[source] DocumentError),

    /// Attribute codec failed
    #[error("attribute codec: {0}")]
    Attribute(#[source] AttributeError),

    /// Primary key extraction failed
    #[error("primary key: {0}")]
    Key(#[source] KeyError),
}

impl Cause {
    /// Create an invalid input cause
    pub fn invalid_input(type_name: impl Into<String>, reason: &'static str) -> Self {
        Cause::InvalidInput {
            type_name: type_name.into(),
            reason,
        }
    }

    /// Create an invalid output cause
    pub fn invalid_output(type_name: impl Into<String>, reason: &'static str) -> Self {
        Cause::InvalidOutput {
            type_name: type_name.into(),
            reason,
        }
    }

    /// Taxonomy kind of this cause, if it has one
    ///
    /// Attribute and key causes are plain codec failures and belong only
    /// to their wrapper's kind.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Cause::InvalidInput { .. } => Some(ErrorKind::InvalidInput),
            Cause::InvalidOutput { .. } => Some(ErrorKind::InvalidOutput),
            Cause::MarshalIntermediary(_) => Some(ErrorKind::FailedToMarshalIntermediary),
            Cause::UnmarshalIntermediary(_) => Some(ErrorKind::FailedToUnmarshalIntermediary),
            Cause::Attribute(_) | Cause::Key(_) => None,
        }
    }
}

/// Canonical document codec errors
#[derive(Debug, Error)]
pub enum DocumentError {
    /// serde_json failed to serialize or deserialize the record
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The record's canonical form is not an object
    #[error("document must be an object, got {0}")]
    NotAnObject(&'static str),

    /// Failure reported by a custom document codec
    #[error("{0}")]
    Custom(String),
}

/// Attribute codec errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    /// Number attribute text is not a finite decimal number, or does not
    /// survive conversion to a document number without losing digits
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// An item was expected but the value is not a map
    #[error("expected a map attribute, got {0}")]
    NotAMap(&'static str),

    /// Item violates a size limit
    #[error("{0}")]
    Limit(#[from] LimitError),

    /// Failure reported by a custom attribute codec
    #[error("{0}")]
    Custom(String),
}
