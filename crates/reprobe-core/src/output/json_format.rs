//! JSON wire format for probe results

use crate::error::Result;
use crate::types::ProbeResult;

/// Encode a result as one compact JSON line, newline included.
///
/// Field order is `pattern`, `input`, pass-through fields in request order,
/// `inputLength`, `matched`. The same result always encodes to the same bytes.
pub fn encode_result(result: &ProbeResult) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(result.pattern().len() + result.input().len() + 64);
    serde_json::to_writer(&mut buf, result).map_err(std::io::Error::from)?;
    buf.push(b'\n');
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::QueryLoader;
    use crate::{MatchOracle, ProbeConfig};

    fn encode(query: &str) -> String {
        let config = ProbeConfig::default();
        let request = QueryLoader::load_str(query).unwrap();
        let result = MatchOracle::new(&config).execute(request).unwrap();
        String::from_utf8(encode_result(&result).unwrap()).unwrap()
    }

    #[test]
    fn test_encode_match() {
        assert_eq!(
            encode(r#"{"pattern": "a+b", "input": "aaab"}"#),
            "{\"pattern\":\"a+b\",\"input\":\"aaab\",\"inputLength\":4,\"matched\":1}\n"
        );
    }

    #[test]
    fn test_encode_no_match() {
        assert_eq!(
            encode(r#"{"pattern": "^x$", "input": "y"}"#),
            "{\"pattern\":\"^x$\",\"input\":\"y\",\"inputLength\":1,\"matched\":0}\n"
        );
    }

    #[test]
    fn test_encode_escapes_control_characters() {
        let line = encode(r#"{"pattern": "\\n", "input": "a\nb\u0001"}"#);
        assert!(line.contains(r#""input":"a\nb\u0001""#), "{}", line);
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let query = r#"{"id": 9, "pattern": "(x|y)*z", "input": "xyxyz", "tags": ["a"]}"#;
        assert_eq!(encode(query), encode(query));
    }
}
