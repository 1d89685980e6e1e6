// src/core/transforms/base64.rs

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use tracing::debug;

use crate::core::error::TransformError;

/// Decoder that tolerates missing padding and non-zero trailing bits, the
/// way browsers' `atob` does.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Encodes the UTF-8 bytes of `text` with the standard, padded alphabet.
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decodes Base64 back into UTF-8 text.
///
/// ASCII whitespace anywhere in the input is ignored. The decoded bytes must
/// form valid UTF-8, otherwise the whole input is rejected.
pub fn decode(input: &str) -> Result<String, TransformError> {
    let compact: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = LENIENT.decode(compact.as_bytes()).map_err(|e| {
        debug!(error = %e, "Base64 decode rejected input.");
        TransformError::InvalidBase64
    })?;
    String::from_utf8(bytes).map_err(|_| {
        debug!("Base64 payload is not valid UTF-8.");
        TransformError::InvalidBase64
    })
}
