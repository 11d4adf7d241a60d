//! # reprobe core
//!
//! Single-shot regular expression match probe for ReDoS testing harnesses.
//!
//! A probe loads one query (`pattern`, `input`, pass-through fields),
//! compiles the pattern once, matches it once and produces one result:
//! the query fields plus `inputLength` and `matched` (`0`/`1`).
//!
//! The match itself is not interruptible and this crate does not try to
//! bound it. Each probe is meant to run as its own process; the harness that
//! spawned it owns the deadline and kills the process on overrun. Nothing is
//! written to stdout before the final result, so a kill leaves no partial
//! output behind.
//!
//! ## Example
//!
//! ```
//! use reprobe_core::{run_probe, ProbeConfig};
//!
//! let config = ProbeConfig::default();
//! let result = run_probe(br#"{"pattern": "a+b", "input": "aaab"}"#, &config).unwrap();
//! assert!(result.matched());
//! assert_eq!(result.input_length(), 4);
//! ```

#![warn(missing_docs, rust_2018_idioms)]

pub mod error;
pub mod exit_code;
pub mod oracle;
pub mod output;
pub mod request;
pub mod types;

pub use error::{Error, ErrorKind, Result, ValidationError};
pub use oracle::{CompiledPattern, MatchOracle};
pub use output::{encode_result, ResultWriter};
pub use request::QueryLoader;
pub use types::{Engine, ProbeConfig, ProbeRequest, ProbeResult};

/// Load a query from raw bytes and run it through the oracle.
///
/// Equivalent to [`QueryLoader::load_slice`] followed by
/// [`MatchOracle::execute`].
pub fn run_probe(source: &[u8], config: &ProbeConfig) -> Result<ProbeResult> {
    let request = QueryLoader::load_slice(source)?;
    MatchOracle::new(config).execute(request)
}
