//! Offset lookup for observed register or memory values.
//!
//! Decodes a hex-encoded value the way it was read back from a crash
//! (byte-reversed on little-endian targets), regenerates a pattern large
//! enough to contain it, and reports where the value first occurs.

use crate::error::{Error, Result};
use crate::pattern;

/// Safety margin added to the query length when sizing the search
/// pattern, so the window covers any practical exploit offset.
const SEARCH_MARGIN: usize = 200_000;

/// Byte order under which a hex query is reinterpreted as the in-memory
/// character sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    /// Reverse the decoded bytes before searching (x86-family register
    /// values read back from a crash dump).
    #[default]
    Little,
    /// Search the decoded bytes in the order given.
    Big,
}

/// Decode a hex query string into the raw byte sequence to search for.
///
/// The string is split into 2-digit pairs, each parsed as one byte.
/// Under [`Endianness::Little`] the byte sequence is reversed.
pub fn decode_query(query_hex: &str, endianness: Endianness) -> Result<Vec<u8>> {
    if query_hex.len() % 2 != 0 {
        return Err(Error::OddHexLength(query_hex.len()));
    }

    let mut bytes = Vec::with_capacity(query_hex.len() / 2);
    for pair in query_hex.as_bytes().chunks_exact(2) {
        let digits = std::str::from_utf8(pair)
            .map_err(|_| Error::InvalidHexByte(String::from_utf8_lossy(pair).into_owned()))?;
        let byte = u8::from_str_radix(digits, 16)
            .map_err(|_| Error::InvalidHexByte(digits.to_string()))?;
        bytes.push(byte);
    }

    if endianness == Endianness::Little {
        bytes.reverse();
    }
    Ok(bytes)
}

/// Find the offset of a hex-encoded value within a freshly generated
/// pattern.
///
/// Returns `Ok(None)` when the decoded bytes do not occur in the search
/// window; that is an expected outcome, not an error. Validation errors
/// from decoding or from pattern generation propagate as `Err`.
pub fn find_offset(
    query_hex: &str,
    bad_chars: &[u8],
    endianness: Endianness,
) -> Result<Option<usize>> {
    let needle = decode_query(query_hex, endianness)?;
    let window = pattern::generate(needle.len() + SEARCH_MARGIN, bad_chars)?;
    Ok(find_subsequence(window.as_bytes(), &needle))
}

/// Find the first occurrence of `needle` in `haystack`.
fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
