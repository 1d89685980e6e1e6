// src/core/transforms/url.rs

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::core::error::TransformError;

/// Characters escaped when encoding a single URI component. Everything except
/// the unreserved marks `- _ . ! ~ * ' ( )` and ASCII alphanumerics.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes `text` as a URI component.
pub fn encode(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Reverses [`encode`].
///
/// Unlike `percent_decode_str`, a `%` that does not start a two-digit escape
/// is an error, as is an escape sequence that does not decode to UTF-8.
pub fn decode(input: &str) -> Result<String, TransformError> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = bytes
                .get(i + 1..i + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
            if !well_formed {
                return Err(TransformError::MalformedPercentEncoding);
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    percent_decode_str(input)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| TransformError::MalformedPercentEncoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_space_and_reserved_characters() {
        assert_eq!(encode("a b"), "a%20b");
        assert_eq!(encode("a+b=c&d/e?f#g"), "a%2Bb%3Dc%26d%2Fe%3Ff%23g");
    }

    #[test]
    fn leaves_unreserved_marks_alone() {
        assert_eq!(encode("A-z_0.9!~*'()"), "A-z_0.9!~*'()");
    }

    #[test]
    fn encodes_utf8_bytes() {
        assert_eq!(encode("é"), "%C3%A9");
        assert_eq!(decode("%C3%A9").unwrap(), "é");
    }

    #[test]
    fn decode_does_not_treat_plus_as_space() {
        assert_eq!(decode("a+b%20c").unwrap(), "a+b c");
    }

    #[test]
    fn malformed_sequences_are_errors() {
        assert_eq!(decode("%"), Err(TransformError::MalformedPercentEncoding));
        assert_eq!(decode("100%"), Err(TransformError::MalformedPercentEncoding));
        assert_eq!(decode("%zz"), Err(TransformError::MalformedPercentEncoding));
        assert_eq!(decode("%E0%A4%A"), Err(TransformError::MalformedPercentEncoding));
        // Well-formed escapes that are not UTF-8.
        assert_eq!(decode("%FF"), Err(TransformError::MalformedPercentEncoding));
    }
}
