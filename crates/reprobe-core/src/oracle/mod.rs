//! Match oracle: one compile, one match, one result
//!
//! The match call cannot be interrupted from inside the process, so there is
//! no timeout or cancellation check here. The oracle runs as its own process
//! and the supervisor that launched it kills it on overrun.

pub mod engine;

pub use engine::CompiledPattern;

use crate::error::{Error, Result};
use crate::types::{ProbeConfig, ProbeRequest, ProbeResult};
use tracing::{debug, info};

/// Answers "does this pattern match this input" for a single request
pub struct MatchOracle<'a> {
    config: &'a ProbeConfig,
}

impl<'a> MatchOracle<'a> {
    /// Create an oracle bound to a configuration
    pub fn new(config: &'a ProbeConfig) -> Self {
        Self { config }
    }

    /// Compile the request's pattern and match it once against its input.
    ///
    /// A non-match is a successful result with `matched == false`. Only an
    /// invalid pattern, or an engine that aborts mid-match, is an error.
    /// May block indefinitely on a pathological pattern.
    pub fn execute(&self, request: ProbeRequest) -> Result<ProbeResult> {
        let input_length = request.input_length();
        info!(
            "matching: pattern /{}/ inputStr: len {}",
            request.pattern(),
            input_length
        );

        let compiled = CompiledPattern::compile(request.pattern(), self.config.engine)?;
        debug!(engine = %compiled.engine(), "pattern compiled");

        Self::answer(&compiled, request)
    }

    /// Match an already compiled pattern against the request's input.
    ///
    /// An engine runtime failure becomes [`Error::Execution`], never a
    /// non-match.
    pub(crate) fn answer(compiled: &CompiledPattern, request: ProbeRequest) -> Result<ProbeResult> {
        let input_length = request.input_length();
        let matched = compiled
            .is_match(request.input())
            .map_err(|message| Error::Execution {
                pattern: request.pattern().to_string(),
                input_length,
                message,
            })?;
        debug!(matched, "match finished");

        Ok(ProbeResult::from_request(request, matched))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Engine;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn run(pattern: &str, input: &str, engine: Engine) -> Result<ProbeResult> {
        let config = ProbeConfig { engine };
        MatchOracle::new(&config).execute(ProbeRequest::new(pattern, input))
    }

    #[test]
    fn test_match_found() {
        let result = run("a+b", "aaab", Engine::Linear).unwrap();
        assert!(result.matched());
        assert_eq!(result.input_length(), 4);
    }

    #[test]
    fn test_no_match_is_not_an_error() {
        let result = run("^x$", "y", Engine::Linear).unwrap();
        assert!(!result.matched());
        assert_eq!(result.input_length(), 1);
    }

    #[test]
    fn test_empty_input() {
        let result = run("", "", Engine::Linear).unwrap();
        assert!(result.matched());
        assert_eq!(result.input_length(), 0);
    }

    #[test]
    fn test_invalid_pattern_is_compile_error_not_no_match() {
        let err = run("(a", "a", Engine::Linear).unwrap_err();
        assert_matches!(err, Error::Compile { .. });
    }

    #[test]
    fn test_engine_failure_is_execution_error_not_no_match() {
        let compiled = CompiledPattern::hybrid_with_limit(r"(\w)\1", 1);
        let request = ProbeRequest::new(r"(\w)\1", "abcdefghijklmnopqrstuvwxyz");
        let err = MatchOracle::answer(&compiled, request).unwrap_err();
        assert_matches!(
            err,
            Error::Execution { ref pattern, input_length: 26, .. } if pattern == r"(\w)\1"
        );
        assert_eq!(err.exit_code(), crate::exit_code::EXECUTION);
    }

    #[test]
    fn test_engines_agree_on_plain_patterns() {
        let cases = [
            ("a+b", "aaab"),
            ("^x$", "y"),
            ("[0-9]{3}", "ab12c"),
            ("colou?r", "my color"),
            (r"\bfoo\b", "a foo b"),
        ];
        for (pattern, input) in cases {
            let linear = run(pattern, input, Engine::Linear).unwrap();
            for engine in [Engine::Backtracking, Engine::Hybrid] {
                let other = run(pattern, input, engine).unwrap();
                assert_eq!(
                    linear.matched(),
                    other.matched(),
                    "{} engine disagrees on /{}/ against {:?}",
                    engine,
                    pattern,
                    input
                );
            }
        }
    }

    #[test]
    fn test_pass_through_fields_survive() {
        let config = ProbeConfig::default();
        let request = ProbeRequest::new("b", "abc")
            .with_field("id", json!("case-1"))
            .with_field("meta", json!({"round": 2}));
        let result = MatchOracle::new(&config).execute(request).unwrap();
        assert_eq!(result.extra()["id"], json!("case-1"));
        assert_eq!(result.extra()["meta"], json!({"round": 2}));
    }

    #[test]
    fn test_linear_engine_handles_nested_quantifiers() {
        let input = format!("{}!", "a".repeat(4096));
        let result = run("(a+)+$", &input, Engine::Linear).unwrap();
        assert!(!result.matched());
        assert_eq!(result.input_length(), 4097);
    }
}
