// crates/normpipe-core/src/unicode.rs
//
// Adapter over the unicode-normalization crate: canonical decomposition
// (NFD), nonspacing-mark removal, and locale-independent lowercasing, plus
// the chained forms the dispatcher's decision table needs.
//
// Every call runs inside a fault boundary: a panic raised anywhere in the
// char pipeline becomes NormError::Transform instead of unwinding through
// the caller, and no partial output is returned. Input that is not valid
// UTF-8 cannot enter the char pipeline and reports the same fault.

use std::panic::{catch_unwind, AssertUnwindSafe};

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::{NormError, Result};

/// Canonical decomposition (NFD).
pub fn nfd(input: Vec<u8>) -> Result<Vec<u8>> {
    transform(input, |s| s.nfd().collect())
}

/// Locale-independent lowercase fold.
pub fn lowercase(input: Vec<u8>) -> Result<Vec<u8>> {
    transform(input, |s| s.to_lowercase())
}

/// Decompose, then lowercase, as one chained pipeline.
pub fn nfd_lowercase(input: Vec<u8>) -> Result<Vec<u8>> {
    transform(input, |s| s.nfd().collect::<String>().to_lowercase())
}

/// Decompose and drop nonspacing marks: accent removal.
pub fn strip_accents(input: Vec<u8>) -> Result<Vec<u8>> {
    transform(input, |s| {
        s.nfd().filter(|&c| !is_combining_mark(c)).collect()
    })
}

/// Decompose, drop nonspacing marks, then lowercase.
pub fn strip_accents_lowercase(input: Vec<u8>) -> Result<Vec<u8>> {
    transform(input, |s| {
        s.nfd()
            .filter(|&c| !is_combining_mark(c))
            .collect::<String>()
            .to_lowercase()
    })
}

fn transform<F>(input: Vec<u8>, f: F) -> Result<Vec<u8>>
where
    F: FnOnce(&str) -> String,
{
    let s = std::str::from_utf8(&input).map_err(|_| NormError::Transform)?;
    let out = catch_unwind(AssertUnwindSafe(|| f(s))).map_err(|_| NormError::Transform)?;
    Ok(out.into_bytes())
}
