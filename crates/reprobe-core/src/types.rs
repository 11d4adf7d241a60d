//! Core type definitions: probe configuration, request and result

use crate::error::Error;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Regex engine used to compile and run the pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Engine {
    /// `regex` crate: finite-automata based, linear in the input
    #[default]
    Linear,
    /// `regress` crate: classical backtracking with ECMAScript syntax.
    ///
    /// Every pattern runs on the backtracking interpreter, so nested
    /// quantifiers such as `(a+)+$` take exponential time on a failing input.
    Backtracking,
    /// `fancy-regex` crate: backtracking VM only for look-around and
    /// backreferences.
    ///
    /// Patterns without those features are handed whole to the `regex`
    /// crate and run in linear time.
    Hybrid,
}

impl Engine {
    /// Get string representation
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Backtracking => "backtracking",
            Self::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" | "Linear" | "regex" => Ok(Self::Linear),
            "backtracking" | "Backtracking" | "regress" | "ecmascript" => Ok(Self::Backtracking),
            "hybrid" | "Hybrid" | "fancy" | "fancy-regex" => Ok(Self::Hybrid),
            other => Err(Error::Usage(format!(
                "unknown engine '{}', expected 'linear', 'backtracking' or 'hybrid'",
                other
            ))),
        }
    }
}

/// Probe configuration
///
/// Nothing here is caller-supplied through the request document; it is
/// fixed per process by the command line or environment.
#[derive(Debug, Clone, Default)]
pub struct ProbeConfig {
    /// Engine used for compile and match
    pub engine: Engine,
}

/// One validated probe request.
///
/// `pattern` and `input` are guaranteed strings. Every other field of the
/// request document is carried in `extra`, in document order, and echoed
/// back unchanged in the result.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeRequest {
    pub(crate) pattern: String,
    pub(crate) input: String,
    pub(crate) extra: Map<String, Value>,
}

impl ProbeRequest {
    /// Create a request with no pass-through fields
    pub fn new(pattern: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            input: input.into(),
            extra: Map::new(),
        }
    }

    /// Attach a pass-through field.
    ///
    /// `pattern` and `input` can only be set through [`ProbeRequest::new`];
    /// those keys are ignored here.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if !crate::request::REQUIRED_KEYS.contains(&key.as_str()) {
            self.extra.insert(key, value);
        }
        self
    }

    /// Pattern source
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Text to match against
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Pass-through fields in document order
    #[inline]
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Length of `input` as reported in the result, in UTF-16 code units
    /// (the JavaScript `String.length` of the same text).
    #[inline]
    pub fn input_length(&self) -> usize {
        self.input.encode_utf16().count()
    }
}

/// Keys the oracle computes; never taken from the caller.
pub const COMPUTED_KEYS: [&str; 2] = ["inputLength", "matched"];

/// Outcome of one match attempt.
///
/// Serializes as the request fields followed by `inputLength` and `matched`,
/// with `matched` encoded as the integer `0` or `1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeResult {
    pattern: String,
    input: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
    #[serde(rename = "inputLength")]
    input_length: usize,
    #[serde(serialize_with = "serialize_flag")]
    matched: bool,
}

impl ProbeResult {
    /// Build the result for `request`.
    ///
    /// `inputLength` is measured here from the input that was matched; a
    /// caller-supplied `inputLength` or `matched` is dropped.
    pub(crate) fn from_request(request: ProbeRequest, matched: bool) -> Self {
        let input_length = request.input_length();
        let ProbeRequest {
            pattern,
            input,
            mut extra,
        } = request;
        extra.retain(|key, _| !COMPUTED_KEYS.contains(&key.as_str()));

        Self {
            pattern,
            input,
            extra,
            input_length,
            matched,
        }
    }

    /// Pattern source
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Text that was matched against
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Pass-through fields in document order
    #[inline]
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Measured length of `input`
    #[inline]
    pub fn input_length(&self) -> usize {
        self.input_length
    }

    /// Whether the pattern matched anywhere in the input
    #[inline]
    pub fn matched(&self) -> bool {
        self.matched
    }
}

fn serialize_flag<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*flag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_engine_roundtrip_str() {
        for engine in [Engine::Linear, Engine::Backtracking, Engine::Hybrid] {
            assert_eq!(engine.as_str().parse::<Engine>().unwrap(), engine);
        }
    }

    #[test]
    fn test_engine_rejects_unknown() {
        let err = "pcre".parse::<Engine>().unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Usage);
        assert!(err.to_string().contains("pcre"));
    }

    #[test]
    fn test_default_engine_is_linear() {
        assert_eq!(ProbeConfig::default().engine, Engine::Linear);
    }

    #[test]
    fn test_with_field_ignores_required_keys() {
        let req = ProbeRequest::new("a", "b")
            .with_field("pattern", json!("zzz"))
            .with_field("id", json!(7));
        assert_eq!(req.pattern(), "a");
        assert_eq!(req.extra().len(), 1);
        assert_eq!(req.extra()["id"], json!(7));
    }

    #[test]
    fn test_engine_aliases() {
        assert_eq!("regress".parse::<Engine>().unwrap(), Engine::Backtracking);
        assert_eq!("fancy-regex".parse::<Engine>().unwrap(), Engine::Hybrid);
        assert_eq!("regex".parse::<Engine>().unwrap(), Engine::Linear);
    }

    #[test]
    fn test_input_length_counts_utf16_units() {
        assert_eq!(ProbeRequest::new("x", "héllo").input_length(), 5);
        assert_eq!(ProbeRequest::new("x", "").input_length(), 0);
        // Astral-plane characters take a surrogate pair
        assert_eq!(ProbeRequest::new("x", "a🦀").input_length(), 3);
    }

    #[test]
    fn test_result_overrides_caller_supplied_computed_fields() {
        let req = ProbeRequest::new("a", "aaa")
            .with_field("inputLength", json!(99))
            .with_field("matched", json!(true))
            .with_field("id", json!("c1"));
        let result = ProbeResult::from_request(req, false);
        assert_eq!(result.input_length(), 3);
        assert!(!result.matched());
        assert_eq!(result.extra().len(), 1);

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["inputLength"], json!(3));
        assert_eq!(value["matched"], json!(0));
        assert_eq!(value["id"], json!("c1"));
    }

    #[test]
    fn test_result_serializes_in_wire_order() {
        let req = ProbeRequest::new("a+b", "aaab").with_field("id", json!(1));
        let result = ProbeResult::from_request(req, true);
        let text = serde_json::to_string(&result).unwrap();
        assert_eq!(
            text,
            r#"{"pattern":"a+b","input":"aaab","id":1,"inputLength":4,"matched":1}"#
        );
    }
}
