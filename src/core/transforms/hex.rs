// src/core/transforms/hex.rs
//
// Character-level hex: one byte per character. Only characters up to U+00FF
// fit in two digits, so text outside Latin-1 is rejected by `encode` rather
// than emitted in a form `decode` would misread.

use crate::core::error::TransformError;

/// Encodes every character of `text` as two lowercase hex digits.
pub fn encode(text: &str) -> Result<String, TransformError> {
    let bytes = text
        .chars()
        .map(|ch| u8::try_from(u32::from(ch)).map_err(|_| TransformError::HexUnrepresentable(ch, u32::from(ch))))
        .collect::<Result<Vec<u8>, _>>()?;
    Ok(hex::encode(bytes))
}

/// Decodes pairs of hex digits into characters U+0000..U+00FF.
///
/// Everything that is not a hex digit is dropped first, so `"41 42"` and
/// `"41:42"` both decode to `"AB"`.
pub fn decode(input: &str) -> Result<String, TransformError> {
    let clean: String = input.chars().filter(char::is_ascii_hexdigit).collect();
    if clean.len() % 2 != 0 {
        return Err(TransformError::OddHexLength);
    }
    let bytes = hex::decode(&clean).map_err(|_| TransformError::OddHexLength)?;
    Ok(bytes.into_iter().map(char::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_single_letter() {
        assert_eq!(encode("A").unwrap(), "41");
        assert_eq!(encode("Hi!\n").unwrap(), "4869210a");
    }

    #[test]
    fn encodes_latin1_as_one_byte() {
        assert_eq!(encode("é").unwrap(), "e9");
        assert_eq!(decode("e9").unwrap(), "é");
    }

    #[test]
    fn rejects_characters_wider_than_a_byte() {
        assert_eq!(
            encode("aĀ"),
            Err(TransformError::HexUnrepresentable('Ā', 0x100))
        );
        assert!(matches!(
            encode("🚀"),
            Err(TransformError::HexUnrepresentable('🚀', 0x1F680))
        ));
    }

    #[test]
    fn decode_strips_separators() {
        assert_eq!(decode("48 65-6c:6c 6F").unwrap(), "Hello");
    }

    #[test]
    fn odd_length_is_an_error_not_a_partial_decode() {
        assert_eq!(decode("abc"), Err(TransformError::OddHexLength));
        assert_eq!(
            TransformError::OddHexLength.to_string(),
            "Error: Invalid hex string (odd length)"
        );
    }
}
