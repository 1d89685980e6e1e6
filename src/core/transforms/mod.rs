// src/core/transforms/mod.rs

//! Deterministic text transforms: codecs, ROT13 and digests.
//!
//! Every function here is pure. Decoders return a `Result`; the tool panel
//! turns that into one display string with [`display_text`], so a failed
//! decode shows up as an error message in the output slot instead of
//! propagating.

pub mod base64;
pub mod hash;
pub mod hex;
pub mod rot13;
pub mod url;

use crate::core::error::TransformError;
use crate::core::models::TransformMode;

/// Collapses a transform result into the single text slot of a panel.
pub fn display_text(result: Result<String, TransformError>) -> String {
    result.unwrap_or_else(|e| e.to_string())
}

/// Runs one of the reversible codecs in the requested direction.
pub fn apply_codec(codec: Codec, mode: TransformMode, input: &str) -> Result<String, TransformError> {
    match (codec, mode) {
        (Codec::Base64, TransformMode::Encode) => Ok(self::base64::encode(input)),
        (Codec::Base64, TransformMode::Decode) => self::base64::decode(input),
        (Codec::Hex, TransformMode::Encode) => self::hex::encode(input),
        (Codec::Hex, TransformMode::Decode) => self::hex::decode(input),
        (Codec::Url, TransformMode::Encode) => Ok(self::url::encode(input)),
        (Codec::Url, TransformMode::Decode) => self::url::decode(input),
    }
}

/// The encode/decode pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Base64,
    Hex,
    Url,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_land_in_the_display_slot() {
        let shown = display_text(apply_codec(Codec::Hex, TransformMode::Decode, "abc"));
        assert_eq!(shown, "Error: Invalid hex string (odd length)");
        let shown = display_text(apply_codec(Codec::Base64, TransformMode::Decode, "@@@"));
        assert_eq!(shown, "Error: Invalid input for decoding");
    }

    #[test]
    fn successful_results_pass_through() {
        let shown = display_text(apply_codec(Codec::Url, TransformMode::Encode, "a b"));
        assert_eq!(shown, "a%20b");
    }
}
