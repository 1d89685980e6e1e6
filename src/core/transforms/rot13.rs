// src/core/transforms/rot13.rs

/// Rotates ASCII letters by 13 places within their case. Anything else,
/// including non-ASCII letters, passes through untouched.
pub fn rot13(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'a'..='z' => rotate(c, b'a'),
            'A'..='Z' => rotate(c, b'A'),
            _ => c,
        })
        .collect()
}

fn rotate(c: char, base: u8) -> char {
    // Callers only pass ASCII letters, so the cast is lossless.
    let offset = (c as u8 - base + 13) % 26;
    char::from(base + offset)
}
