//! Backslash-escape decoding for the bad-character argument.
//!
//! Bad characters are typically non-printable (null bytes, newlines), so
//! the CLI accepts them as escape sequences: `\x00`, `\n`, octal `\012`,
//! and the rest of the C escapes. Unknown escapes pass through literally.

use crate::error::{Error, Result};

/// Decode a string with backslash escapes into raw bytes.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }

        match bytes.get(i + 1) {
            None => return Err(Error::InvalidEscape("trailing \\".into())),
            Some(b'x') => {
                let digits = bytes
                    .get(i + 2..i + 4)
                    .and_then(|pair| std::str::from_utf8(pair).ok())
                    .ok_or_else(|| Error::InvalidEscape(input[i..].to_string()))?;
                let byte = u8::from_str_radix(digits, 16)
                    .map_err(|_| Error::InvalidEscape(format!("\\x{}", digits)))?;
                out.push(byte);
                i += 4;
            }
            Some(b'n') => {
                out.push(b'\n');
                i += 2;
            }
            Some(b'r') => {
                out.push(b'\r');
                i += 2;
            }
            Some(b't') => {
                out.push(b'\t');
                i += 2;
            }
            Some(b'a') => {
                out.push(0x07);
                i += 2;
            }
            Some(b'b') => {
                out.push(0x08);
                i += 2;
            }
            Some(b'f') => {
                out.push(0x0c);
                i += 2;
            }
            Some(b'v') => {
                out.push(0x0b);
                i += 2;
            }
            Some(b'\\') => {
                out.push(b'\\');
                i += 2;
            }
            Some(b'\'') => {
                out.push(b'\'');
                i += 2;
            }
            Some(b'"') => {
                out.push(b'"');
                i += 2;
            }
            Some(&c @ b'0'..=b'7') => {
                // Up to three octal digits
                let mut value = (c - b'0') as u32;
                let mut consumed = 1;
                while consumed < 3 {
                    match bytes.get(i + 1 + consumed) {
                        Some(&d @ b'0'..=b'7') => {
                            value = value * 8 + (d - b'0') as u32;
                            consumed += 1;
                        }
                        _ => break,
                    }
                }
                if value > 0xff {
                    return Err(Error::InvalidEscape(
                        String::from_utf8_lossy(&bytes[i..i + 1 + consumed]).into_owned(),
                    ));
                }
                out.push(value as u8);
                i += 1 + consumed;
            }
            Some(&other) => {
                // Unknown escape: keep the backslash and the character
                out.push(b'\\');
                out.push(other);
                i += 2;
            }
        }
    }

    Ok(out)
}
