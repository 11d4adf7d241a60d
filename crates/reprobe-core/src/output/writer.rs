//! Single-write result emitter

use crate::error::Result;
use crate::output::json_format::encode_result;
use crate::types::ProbeResult;
use std::io::Write;

/// Writes the one result document of an invocation.
///
/// The document is fully rendered before the first byte reaches the
/// writer, so a process killed mid-match leaves its stdout empty.
pub struct ResultWriter;

impl ResultWriter {
    /// Encode `result` and write it with a single `write_all`, then flush.
    pub fn emit<W: Write>(writer: &mut W, result: &ProbeResult) -> Result<()> {
        let buf = encode_result(result)?;
        writer.write_all(&buf)?;
        writer.flush()?;
        Ok(())
    }

    /// Emit to the process's standard output
    pub fn emit_stdout(result: &ProbeResult) -> Result<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        Self::emit(&mut lock, result)
    }
}
