//! Query loading from a JSON document
//!
//! A query is one JSON object carrying a string `pattern`, a string `input`
//! and any number of pass-through fields:
//!
//! ```json
//! {"pattern": "(a+)+$", "input": "aaaaaaaaaaaaaaaaaaaaaaaa!", "id": "case-17"}
//! ```

use crate::error::{Error, Result, ValidationError};
use crate::types::ProbeRequest;
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Keys every query must carry as JSON strings, in reporting order.
pub const REQUIRED_KEYS: [&str; 2] = ["pattern", "input"];

/// Path that selects standard input instead of a file
pub const STDIN_PATH: &str = "-";

/// Loads and validates one probe request
pub struct QueryLoader;

impl QueryLoader {
    /// Load a query from a file, or from stdin when `path` is `-`.
    pub fn load_path(path: &Path) -> Result<ProbeRequest> {
        if path.as_os_str() == STDIN_PATH {
            return Self::load_reader(std::io::stdin().lock());
        }

        let bytes = std::fs::read(path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("failed to read query file '{}': {}", path.display(), e),
            ))
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read query file");
        Self::load_slice(&bytes)
    }

    /// Load a query from any reader; the reader is drained to EOF.
    pub fn load_reader<R: Read>(mut reader: R) -> Result<ProbeRequest> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::load_slice(&bytes)
    }

    /// Load a query from a string
    pub fn load_str(source: &str) -> Result<ProbeRequest> {
        Self::load_slice(source.as_bytes())
    }

    /// Parse and validate raw bytes.
    ///
    /// Malformed JSON (including invalid UTF-8) is a parse error; a
    /// well-formed document without the required string keys is a
    /// validation error.
    pub fn load_slice(bytes: &[u8]) -> Result<ProbeRequest> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| Error::from(e).with_document(bytes))?;
        Self::from_value(value)
    }

    /// Validate an already parsed document.
    ///
    /// No coercion: `pattern` and `input` must be JSON strings. A non-object
    /// document is reported with every required key missing.
    pub fn from_value(value: Value) -> Result<ProbeRequest> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(Error::Validation(ValidationError {
                    missing: REQUIRED_KEYS.to_vec(),
                    mistyped: Vec::new(),
                    document: other.to_string(),
                }))
            }
        };

        let mut missing = Vec::new();
        let mut mistyped = Vec::new();
        for key in REQUIRED_KEYS {
            match map.get(key) {
                None => missing.push(key),
                Some(Value::String(_)) => {}
                Some(_) => mistyped.push(key),
            }
        }
        if !missing.is_empty() || !mistyped.is_empty() {
            return Err(Error::Validation(ValidationError {
                missing,
                mistyped,
                document: Value::Object(map).to_string(),
            }));
        }

        Ok(split_required(map))
    }
}

/// Move the required keys out of a validated document, keeping the
/// remaining fields in order.
fn split_required(map: Map<String, Value>) -> ProbeRequest {
    let mut pattern = String::new();
    let mut input = String::new();
    let mut extra = Map::with_capacity(map.len().saturating_sub(REQUIRED_KEYS.len()));

    for (key, value) in map {
        match (key.as_str(), value) {
            ("pattern", Value::String(s)) => pattern = s,
            ("input", Value::String(s)) => input = s,
            (_, value) => {
                extra.insert(key, value);
            }
        }
    }

    ProbeRequest {
        pattern,
        input,
        extra,
    }
}
