// crates/normpipe-core/src/compact.rs
//
// Single-pass, in-place byte compaction transforms.
//
// Shared pattern: a read index scans the buffer left to right, a write index
// `on` (always <= read index) receives kept/transformed bytes in the same
// buffer, and the buffer is truncated to `on` at the end. None of these can
// fail; they are pure arithmetic over byte values.
//
// The curly-quote folds operate on the fixed 3-byte UTF-8 encodings
// E2 80 98 / 99 / 9C / 9D. Folding triggers on the third byte: if the two
// most recently *written* bytes are E2 80, the write index retracts by 2 and
// a single ASCII quote goes out instead. Anything else, including a bare
// 0x98/0x99/0x9C/0x9D, is copied verbatim; input is not validated as UTF-8.

/// Collapse runs of 2+ ASCII spaces into a single space.
pub fn collapse(buf: &mut Vec<u8>) {
    let mut on = 0usize;
    let mut last = 0u8;
    for i in 0..buf.len() {
        let b = buf[i];
        if b == b' ' && last == b' ' {
            continue;
        }
        buf[on] = b;
        on += 1;
        last = b;
    }
    buf.truncate(on);
}

/// Fold curly UTF-8 quotes and apostrophes into ASCII `'` and `"`.
pub fn quotemarks(buf: &mut Vec<u8>) {
    let mut on = 0usize;
    for i in 0..buf.len() {
        let b = buf[i];
        if fold_quote(buf, &mut on, b) {
            continue;
        }
        buf[on] = b;
        on += 1;
    }
    buf.truncate(on);
}

/// Canonicalize CRLF to LF. A `\r` not followed by `\n` passes through.
pub fn unix_lines(buf: &mut Vec<u8>) {
    let mut on = 0usize;
    for i in 0..buf.len() {
        let b = buf[i];
        if b == b'\r' && i + 1 < buf.len() && buf[i + 1] == b'\n' {
            continue;
        }
        buf[on] = b;
        on += 1;
    }
    buf.truncate(on);
}

/// Fused collapse + quote-mark fold in one pass.
///
/// Observably equivalent to `collapse` followed by `quotemarks`: the fold
/// guard inspects written bytes, which at the point of the check are exactly
/// the collapsed prefix, and the E2 80 guard bytes are never spaces.
pub fn collapse_quotemarks(buf: &mut Vec<u8>) {
    let mut on = 0usize;
    let mut last = 0u8;
    for i in 0..buf.len() {
        let b = buf[i];
        if b == b' ' {
            if last != b' ' {
                buf[on] = b' ';
                on += 1;
                last = b' ';
            }
            continue;
        }
        last = b;
        if fold_quote(buf, &mut on, b) {
            continue;
        }
        buf[on] = b;
        on += 1;
    }
    buf.truncate(on);
}

/// Fused collapse + quote-mark fold + CRLF canonicalization in one pass.
///
/// Equivalent to sequential collapse, then quotemarks, then unix_lines:
/// collapse never makes a `\r` adjacent to a `\n` that was not already, and
/// the CRLF rewrite retracts over a `\r` that was unconditionally written.
pub fn collapse_quotemarks_unix_lines(buf: &mut Vec<u8>) {
    let mut on = 0usize;
    let mut last = 0u8;
    for i in 0..buf.len() {
        let b = buf[i];
        if b == b' ' {
            if last != b' ' {
                buf[on] = b' ';
                on += 1;
                last = b' ';
            }
            continue;
        }
        if b == b'\n' && last == b'\r' {
            // `\r` was emitted at on-1; overwrite it instead of advancing.
            buf[on - 1] = b'\n';
            last = b'\n';
            continue;
        }
        last = b;
        if fold_quote(buf, &mut on, b) {
            continue;
        }
        buf[on] = b;
        on += 1;
    }
    buf.truncate(on);
}

/// Drop leading and trailing bytes <= 32 (ASCII space and C0 controls).
///
/// A buffer of nothing but such bytes trims to empty.
pub fn trim(buf: &mut Vec<u8>) {
    let Some(start) = buf.iter().position(|&b| b > 32) else {
        buf.clear();
        return;
    };
    // start exists, so a last byte > 32 exists too.
    let end = buf.iter().rposition(|&b| b > 32).map_or(0, |i| i + 1);
    buf.truncate(end);
    buf.drain(..start);
}

/// Prepend a single ASCII space unless the buffer is empty or already
/// starts with one.
pub fn add_leading_space(buf: &mut Vec<u8>) {
    if buf.first().map_or(true, |&b| b == b' ') {
        return;
    }
    buf.insert(0, b' ');
}

/// Fused trim + leading-space: trim both ends, then prepend one space.
///
/// An all-whitespace buffer becomes empty, not a lone space. When the trim
/// removed leading bytes, the byte slot just before the kept range is reused
/// as the space instead of shifting the whole tail twice.
pub fn trim_add_leading_space(buf: &mut Vec<u8>) {
    let Some(start) = buf.iter().position(|&b| b > 32) else {
        buf.clear();
        return;
    };
    let end = buf.iter().rposition(|&b| b > 32).map_or(0, |i| i + 1);
    buf.truncate(end);
    if start == 0 {
        buf.insert(0, b' ');
    } else {
        buf[start - 1] = b' ';
        buf.drain(..start - 1);
    }
}

/// Retract-and-replace for the curly-quote third byte. Returns true when the
/// fold happened; the caller copies the byte verbatim otherwise.
fn fold_quote(buf: &mut [u8], on: &mut usize, b: u8) -> bool {
    let ascii = match b {
        0x98 | 0x99 => b'\'',
        0x9C | 0x9D => b'"',
        _ => return false,
    };
    // Boundary guard: never look behind the start of the buffer.
    if *on >= 2 && buf[*on - 1] == 0x80 && buf[*on - 2] == 0xE2 {
        buf[*on - 2] = ascii;
        *on -= 1;
        return true;
    }
    false
}
