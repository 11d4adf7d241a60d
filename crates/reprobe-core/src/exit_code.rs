//! Process exit statuses reported by the `reprobe` binary.
//!
//! No status is reserved for a match that takes too long. The supervisor
//! observes that case as a process that never exits before it is killed.

/// Result document written to stdout.
pub const SUCCESS: i32 = 0;

/// Missing or unusable command-line argument (matches clap's own usage status).
pub const USAGE: i32 = 2;

/// Request lacks `pattern`/`input`, or they are not strings.
pub const VALIDATION: i32 = 3;

/// Request source is not well-formed JSON.
pub const PARSE: i32 = 4;

/// Pattern does not compile.
pub const COMPILE: i32 = 5;

/// Request could not be read or result could not be written.
pub const IO: i32 = 6;

/// Engine aborted a match it had started.
pub const EXECUTION: i32 = 7;
