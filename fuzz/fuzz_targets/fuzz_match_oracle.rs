#![no_main]

use libfuzzer_sys::fuzz_target;
use reprobe_core::{Engine, MatchOracle, ProbeConfig, ProbeRequest};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // First line is the pattern, the rest is the input
        let (pattern, input) = s.split_once('\n').unwrap_or((s, ""));

        // Linear engine only: the backtracking engine hangs on exactly the
        // nested-quantifier inputs a fuzzer tends to produce.
        let config = ProbeConfig {
            engine: Engine::Linear,
        };
        if let Ok(result) = MatchOracle::new(&config).execute(ProbeRequest::new(pattern, input)) {
            assert_eq!(result.input_length(), input.encode_utf16().count());
        }
    }
});
