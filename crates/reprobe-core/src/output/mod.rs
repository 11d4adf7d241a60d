//! Result encoding and emission

pub mod json_format;
pub mod writer;

pub use json_format::encode_result;
pub use writer::ResultWriter;
