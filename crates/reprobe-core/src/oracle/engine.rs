//! Compiled pattern over one of the supported engines

use crate::error::{Error, Result};
use crate::types::Engine;

/// A pattern compiled by the configured engine.
///
/// Compiled with default semantics: no flags, unanchored search.
#[derive(Debug)]
pub enum CompiledPattern {
    /// Linear-time regex (no backtracking)
    Linear(regex::Regex),
    /// Classical backtracking regex with ECMAScript syntax
    Backtracking {
        /// Compiled program
        regex: regress::Regex,
        /// Pattern source; `regress` does not keep it
        source: String,
    },
    /// Backtracking only where look-around or backreferences require it
    Hybrid(fancy_regex::Regex),
}

impl CompiledPattern {
    /// Compile `pattern` with `engine`.
    ///
    /// The hybrid engine's own backtrack limit is lifted, so a pathological
    /// match runs until it finishes or the process is killed. The
    /// backtracking engine has no limit to lift.
    pub fn compile(pattern: &str, engine: Engine) -> Result<Self> {
        let compiled = match engine {
            Engine::Linear => regex::Regex::new(pattern)
                .map(Self::Linear)
                .map_err(|e| e.to_string()),
            Engine::Backtracking => regress::Regex::new(pattern)
                .map(|regex| Self::Backtracking {
                    regex,
                    source: pattern.to_string(),
                })
                .map_err(|e| e.to_string()),
            Engine::Hybrid => Self::hybrid(pattern, usize::MAX),
        };

        compiled.map_err(|message| Error::Compile {
            pattern: pattern.to_string(),
            engine,
            message,
        })
    }

    fn hybrid(pattern: &str, backtrack_limit: usize) -> std::result::Result<Self, String> {
        fancy_regex::RegexBuilder::new(pattern)
            .backtrack_limit(backtrack_limit)
            .build()
            .map(Self::Hybrid)
            .map_err(|e| e.to_string())
    }

    /// Hybrid pattern that gives up after `backtrack_limit` backtracking steps
    #[cfg(test)]
    pub(crate) fn hybrid_with_limit(pattern: &str, backtrack_limit: usize) -> Self {
        Self::hybrid(pattern, backtrack_limit).unwrap()
    }

    /// Engine this pattern was compiled with
    #[inline]
    pub const fn engine(&self) -> Engine {
        match self {
            Self::Linear(_) => Engine::Linear,
            Self::Backtracking { .. } => Engine::Backtracking,
            Self::Hybrid(_) => Engine::Hybrid,
        }
    }

    /// Pattern source
    pub fn as_str(&self) -> &str {
        match self {
            Self::Linear(re) => re.as_str(),
            Self::Backtracking { source, .. } => source,
            Self::Hybrid(re) => re.as_str(),
        }
    }

    /// Does the pattern match anywhere in `text`?
    ///
    /// Blocks until the engine answers. The error string is the engine's
    /// runtime diagnostic; only the hybrid engine produces one, and only when
    /// its backtrack limit is reached.
    pub fn is_match(&self, text: &str) -> std::result::Result<bool, String> {
        match self {
            Self::Linear(re) => Ok(re.is_match(text)),
            Self::Backtracking { regex, .. } => Ok(regex.find(text).is_some()),
            Self::Hybrid(re) => re.is_match(text).map_err(|e| e.to_string()),
        }
    }
}
