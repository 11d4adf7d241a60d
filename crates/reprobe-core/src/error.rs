//! Error types for reprobe-core

use crate::exit_code;
use crate::types::Engine;
use std::fmt;

/// Result type alias for probe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for probe operations
///
/// Every variant is terminal for the invocation. There is no timeout
/// variant: a match that runs too long is observed by the supervisor as a
/// process that never exits.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad invocation (missing or unusable argument)
    #[error("Usage error: {0}")]
    Usage(String),

    /// The request source is not a well-formed JSON document
    #[error("Parse error: {message}. Got {document}")]
    Parse {
        /// Parser message, including line and column
        message: String,
        /// The offending source, lossily decoded
        document: String,
    },

    /// The request is missing required keys or has mistyped ones
    #[error("Validation error: {0}")]
    Validation(ValidationError),

    /// The pattern failed to compile
    #[error("Compile error: pattern /{pattern}/ rejected by {engine} engine: {message}")]
    Compile {
        /// Pattern source as given in the request
        pattern: String,
        /// Engine that rejected it
        engine: Engine,
        /// Engine diagnostic
        message: String,
    },

    /// Reading the request or writing the result failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The engine gave up on a match it had started
    #[error("Execution error: pattern /{pattern}/ on input of length {input_length}: {message}")]
    Execution {
        /// Pattern source as given in the request
        pattern: String,
        /// Length of the input being matched
        input_length: usize,
        /// Engine diagnostic
        message: String,
    },
}

/// Details of a rejected request.
///
/// `missing` and `mistyped` are listed in required-key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Required keys absent from the document
    pub missing: Vec<&'static str>,
    /// Required keys present with a non-string value
    pub mistyped: Vec<&'static str>,
    /// The offending document, re-serialized
    pub document: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid query. Need string keys {}",
            json_key_list(&crate::request::REQUIRED_KEYS)
        )?;
        if !self.missing.is_empty() {
            write!(f, "; missing {}", json_key_list(&self.missing))?;
        }
        if !self.mistyped.is_empty() {
            write!(f, "; not strings {}", json_key_list(&self.mistyped))?;
        }
        write!(f, ". Got {}", self.document)
    }
}

fn json_key_list(keys: &[&str]) -> String {
    let quoted: Vec<String> = keys.iter().map(|k| format!("\"{}\"", k)).collect();
    format!("[{}]", quoted.join(","))
}

/// Fieldless error category for zero-cost pattern matching.
///
/// Single byte representation (`#[repr(u8)]`), `Copy`, no allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorKind {
    /// Bad invocation
    Usage,
    /// Malformed request document
    Parse,
    /// Missing or mistyped required fields
    Validation,
    /// Invalid pattern
    Compile,
    /// I/O operation error
    Io,
    /// Engine failure during a match
    Execution,
}

impl ErrorKind {
    /// Process exit status reported for this kind of failure.
    #[inline]
    pub const fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Usage => exit_code::USAGE,
            ErrorKind::Validation => exit_code::VALIDATION,
            ErrorKind::Parse => exit_code::PARSE,
            ErrorKind::Compile => exit_code::COMPILE,
            ErrorKind::Io => exit_code::IO,
            ErrorKind::Execution => exit_code::EXECUTION,
        }
    }
}

impl Error {
    /// Get the error kind; zero allocation, returns a Copy enum.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Usage(_) => ErrorKind::Usage,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::Validation(_) => ErrorKind::Validation,
            Error::Compile { .. } => ErrorKind::Compile,
            Error::Io(_) => ErrorKind::Io,
            Error::Execution { .. } => ErrorKind::Execution,
        }
    }

    /// Process exit status for this error.
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }

    /// Borrow the bare diagnostic, without the echoed document or pattern.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Error::Usage(message)
            | Error::Parse { message, .. }
            | Error::Compile { message, .. }
            | Error::Execution { message, .. } => message,
            Error::Validation(_) => "invalid query",
            Error::Io(_) => "I/O error",
        }
    }

    /// Attach the offending source to a parse error; other kinds pass through
    pub fn with_document(self, source: &[u8]) -> Self {
        match self {
            Error::Parse { message, .. } => Error::Parse {
                message,
                document: String::from_utf8_lossy(source).into_owned(),
            },
            other => other,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse {
            message: err.to_string(),
            document: String::new(),
        }
    }
}
