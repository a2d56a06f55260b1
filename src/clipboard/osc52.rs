//! OSC 52 clipboard backend
//!
//! Terminal escape sequence clipboard, for sessions over SSH or tmux.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::ClipboardError;

pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let mut stdout = io::stdout();
    stdout
        .write_all(encode_osc52(text).as_bytes())
        .map_err(|_| ClipboardError::WriteError)?;
    stdout.flush().map_err(|_| ClipboardError::WriteError)
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn encode_osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_osc52_simple() {
        // "hello" in base64 is "aGVsbG8="
        assert_eq!(encode_osc52("hello"), "\x1b]52;c;aGVsbG8=\x07");
    }

    #[test]
    fn test_encode_osc52_empty() {
        assert_eq!(encode_osc52(""), "\x1b]52;c;\x07");
    }

    #[test]
    fn test_encode_osc52_multiline_report() {
        let report = "Scryfall Search Stats\nTotal Cards Found: 3";
        let encoded = encode_osc52(report);

        let payload = &encoded[7..encoded.len() - 1];
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), report);
    }
}
