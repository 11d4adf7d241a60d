#![no_main]

use libfuzzer_sys::fuzz_target;
use reprobe_core::{ErrorKind, QueryLoader};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must load or fail as parse/validation, never panic
    match QueryLoader::load_slice(data) {
        Ok(req) => {
            assert_eq!(req.input_length(), req.input().encode_utf16().count());
        }
        Err(e) => {
            assert!(matches!(e.kind(), ErrorKind::Parse | ErrorKind::Validation));
        }
    }
});
