//! Latin-1 encoding utilities for thermal printers
//!
//! Receipt and kitchen printers default to a single-byte Western code page.
//! Text is converted from UTF-8 to Windows-1252 while preserving ESC/POS commands.

use encoding_rs::WINDOWS_1252;
use tracing::instrument;

/// Substitute for characters the code page cannot represent
const REPLACEMENT: u8 = b'?';

/// Convert mixed UTF-8 content (with ESC/POS commands) to Windows-1252
///
/// ASCII bytes (0x00-0x7F) are copied exactly as is, which protects ESC/POS
/// commands and their numeric arguments from being corrupted.
/// Only bytes >= 0x80 are treated as UTF-8 sequences and re-encoded.
#[instrument(skip(bytes), fields(len = bytes.len()))]
pub fn convert_to_latin1(bytes: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(bytes.len());
    let mut buffer = Vec::new();

    for &b in bytes {
        if b < 0x80 {
            flush_buffer(&mut buffer, &mut result);
            result.push(b);
        } else {
            buffer.push(b);
        }
    }

    flush_buffer(&mut buffer, &mut result);
    result
}

/// Flush the non-ASCII buffer, converting UTF-8 to Windows-1252
fn flush_buffer(buffer: &mut Vec<u8>, result: &mut Vec<u8>) {
    if buffer.is_empty() {
        return;
    }

    let s = String::from_utf8_lossy(buffer);
    let mut tmp = [0u8; 4];
    for c in s.chars() {
        let (encoded, _, had_errors) = WINDOWS_1252.encode(c.encode_utf8(&mut tmp));
        if had_errors || encoded.len() != 1 {
            result.push(REPLACEMENT);
        } else {
            result.extend_from_slice(&encoded);
        }
    }
    buffer.clear();
}
