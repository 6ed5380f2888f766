//! rcyclic — cyclic pattern generation and buffer overflow offset lookup.
//!
//! A small exploit-development helper in the spirit of Metasploit's
//! `pattern_create` / `pattern_offset`: generate a cyclic pattern whose
//! aligned (upper, lower, digit) triples are unique, feed it to a target,
//! then look up the crashed register value to recover the overflow offset.
//! Supports excluding bad characters the target would mangle.
//!
//! # Module overview
//!
//! - [`error`] — Error types used throughout the crate.
//! - [`pattern`] — Cyclic pattern generation with bad-character filtering.
//! - [`offset`] — Hex query decoding and offset lookup within a pattern.
//! - [`escape`] — Backslash-escape decoding for bad-character input.

pub mod error;
pub mod escape;
pub mod offset;
pub mod pattern;
