// src/core/error.rs

use thiserror::Error;

/// Failure of a decode-style transform.
///
/// The `Display` text of each variant is exactly what the tool panel shows in
/// its output slot, so a transform always yields one piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("Error: Invalid input for decoding")]
    InvalidBase64,
    #[error("Error: Invalid hex string (odd length)")]
    OddHexLength,
    #[error("Error: Character {0:?} (U+{1:04X}) does not fit in a single hex byte")]
    HexUnrepresentable(char, u32),
    #[error("Error: Invalid input for URL decoding")]
    MalformedPercentEncoding,
    #[error("Error: Unable to obfuscate code")]
    Obfuscation,
}

/// Errors a single tool invocation can end with. None of them is fatal to
/// the application; they are scoped to the panel that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// Missing or malformed input, reported inline before any work starts.
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Transform(#[from] TransformError),
    /// The subdomain lookup could not be completed.
    #[error("{0}")]
    Network(String),
}

impl ToolError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
