//! Cyclic pattern generation for buffer overflow offset detection.
//!
//! Generates a cyclic pattern from (uppercase, lowercase, digit) triples
//! so that every 3-character-aligned triple is unique. Supports excluding
//! "bad" characters that the probed target would mangle (null bytes,
//! newlines, etc.).

use crate::error::{Error, Result};

/// Canonical character sets before bad-character filtering.
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";

/// The three pattern alphabets with bad characters removed.
///
/// Relative character order is preserved so that patterns stay
/// deterministic for a given bad-character set.
#[derive(Debug, Clone)]
pub struct Alphabet {
    upper: Vec<u8>,
    lower: Vec<u8>,
    digits: Vec<u8>,
}

impl Alphabet {
    /// Build the filtered alphabets, rejecting a bad-character set that
    /// empties any of the three.
    pub fn filtered(bad_chars: &[u8]) -> Result<Self> {
        let strip = |set: &[u8]| -> Vec<u8> {
            set.iter()
                .copied()
                .filter(|c| !bad_chars.contains(c))
                .collect()
        };

        let upper = strip(UPPER);
        if upper.is_empty() {
            return Err(Error::EmptyAlphabet("uppercase"));
        }
        let lower = strip(LOWER);
        if lower.is_empty() {
            return Err(Error::EmptyAlphabet("lowercase"));
        }
        let digits = strip(DIGITS);
        if digits.is_empty() {
            return Err(Error::EmptyAlphabet("digit"));
        }

        Ok(Self {
            upper,
            lower,
            digits,
        })
    }

    /// Longest pattern generatable before the uppercase cursor wraps:
    /// the number of distinct triples times three characters each.
    pub fn max_len(&self) -> usize {
        self.upper.len() * self.lower.len() * self.digits.len() * 3
    }
}

/// Generate a cyclic pattern of up to `length` characters.
///
/// Walks (upper, lower, digit) triples with three nested cursors: the
/// digit cursor advances every triple, carrying into the lowercase and
/// then the uppercase cursor on wraparound. When the uppercase cursor
/// wraps, the unique triple space is exhausted and generation stops
/// early, returning fewer than `length` characters. The short return is
/// deliberate; it matches the behavior offset lookups were built against.
pub fn generate(length: usize, bad_chars: &[u8]) -> Result<String> {
    let alpha = Alphabet::filtered(bad_chars)?;

    let mut pattern = String::with_capacity(length.min(alpha.max_len()) + 2);
    let (mut u, mut l, mut d) = (0, 0, 0);

    while pattern.len() < length {
        pattern.push(alpha.upper[u] as char);
        pattern.push(alpha.lower[l] as char);
        pattern.push(alpha.digits[d] as char);

        d += 1;
        if d == alpha.digits.len() {
            d = 0;
            l += 1;
            if l == alpha.lower.len() {
                l = 0;
                u += 1;
                if u == alpha.upper.len() {
                    // Cannot generate more unique triples
                    break;
                }
            }
        }
    }

    pattern.truncate(length);
    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_starts_correctly() {
        let pattern = generate(10, &[]).unwrap();
        assert_eq!(pattern, "Aa0Aa1Aa2A");
    }

    #[test]
    fn pattern_length_exact() {
        let pattern = generate(100, &[]).unwrap();
        assert_eq!(pattern.len(), 100);
    }

    #[test]
    fn pattern_zero_length() {
        let pattern = generate(0, &[]).unwrap();
        assert!(pattern.is_empty());
    }

    #[test]
    fn pattern_deterministic() {
        let a = generate(5000, b"Xy3").unwrap();
        let b = generate(5000, b"Xy3").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn pattern_stops_at_triple_space_exhaustion() {
        let max = 26 * 26 * 10 * 3;
        let pattern = generate(max + 1000, &[]).unwrap();
        assert_eq!(pattern.len(), max);
    }

    #[test]
    fn pattern_max_length_reachable() {
        let max = 26 * 26 * 10 * 3;
        let pattern = generate(max, &[]).unwrap();
        assert_eq!(pattern.len(), max);
        assert!(pattern.ends_with("Zz9"));
    }

    #[test]
    fn bad_chars_never_appear() {
        let pattern = generate(2000, b"Aa0Mn5").unwrap();
        for bad in [b'A', b'a', b'0', b'M', b'n', b'5'] {
            assert!(
                !pattern.as_bytes().contains(&bad),
                "excluded character {:?} found in pattern",
                bad as char
            );
        }
        assert_eq!(&pattern[..3], "Bb1");
    }

    #[test]
    fn empty_alphabet_is_error() {
        assert!(generate(10, b"0123456789").is_err());
        assert!(generate(10, b"ABCDEFGHIJKLMNOPQRSTUVWXYZ").is_err());
        assert!(generate(10, b"abcdefghijklmnopqrstuvwxyz").is_err());
    }

    #[test]
    fn single_survivor_per_alphabet_is_enough() {
        // Leave only 'Z', 'z', '9' standing
        let mut bad: Vec<u8> = Vec::new();
        bad.extend(b"ABCDEFGHIJKLMNOPQRSTUVWXY");
        bad.extend(b"abcdefghijklmnopqrstuvwxy");
        bad.extend(b"012345678");
        let pattern = generate(9, &bad).unwrap();
        // One unique triple exists, so generation stops after it
        assert_eq!(pattern, "Zz9");
    }

    #[test]
    fn aligned_triples_unique() {
        let max = 26 * 26 * 10 * 3;
        let pattern = generate(max, &[]).unwrap();
        let mut seen = std::collections::HashSet::new();
        for chunk in pattern.as_bytes().chunks_exact(3) {
            assert!(
                seen.insert(chunk.to_vec()),
                "duplicate aligned triple found: {:?}",
                chunk
            );
        }
    }
}
