//! Windows-1252 encoding for Western thermal printers
//!
//! Epson TM-series printers ship with a Western code page table.
//! Text is sent as WPC1252 after selecting page 16 with `ESC t 16`.
//! ESC/POS control bytes are ASCII and pass through unchanged.

/// ESC t code page number for WPC1252
pub const CODE_PAGE_WPC1252: u8 = 16;

/// Encode UTF-8 text to Windows-1252 bytes
///
/// Characters outside the code page are printed as `?`.
pub fn encode_text(s: &str) -> Vec<u8> {
    let mut result = Vec::with_capacity(s.len());
    let mut utf8 = [0u8; 4];

    for c in s.chars() {
        if c.is_ascii() {
            result.push(c as u8);
            continue;
        }

        let (cow, _, had_errors) = encoding_rs::WINDOWS_1252.encode(c.encode_utf8(&mut utf8));
        if had_errors {
            result.push(b'?');
        } else {
            result.extend_from_slice(&cow);
        }
    }
    result
}
