// src/clipboard.rs

use std::io::{self, Write};

use base64::{Engine, engine::general_purpose::STANDARD};

/// Asks the terminal to put `text` on the system clipboard using the OSC 52
/// escape sequence. Terminals without OSC 52 support ignore it silently.
pub fn copy_osc52<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "\x1b]52;c;{}\x07", STANDARD.encode(text))?;
    out.flush()
}
