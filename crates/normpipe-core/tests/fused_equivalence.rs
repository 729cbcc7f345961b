// crates/normpipe-core/tests/fused_equivalence.rs
//
// The fused passes must be observably equivalent to sequential unfused
// application. Exhaustively checked over every byte string up to length 5
// drawn from an adversarial alphabet: spaces, CR, LF, a plain letter, and
// the curly-quote sequence bytes, so the tricky interleavings (a space
// after a bare CR that precedes LF, guard bytes split by collapsible
// spaces, retraction next to CRLF rewrites) are all covered.

use normpipe_core::compact;

const ALPHABET: [u8; 8] = [b' ', b'\r', b'\n', b'a', 0xE2, 0x80, 0x99, 0x9C];
const MAX_LEN: usize = 5;

fn for_each_input(mut check: impl FnMut(&[u8])) {
    check(&[]);
    let mut buf = vec![0u8; MAX_LEN];
    for len in 1..=MAX_LEN {
        let mut idx = vec![0usize; len];
        loop {
            for (slot, &i) in buf[..len].iter_mut().zip(idx.iter()) {
                *slot = ALPHABET[i];
            }
            check(&buf[..len]);

            // odometer increment
            let mut pos = 0;
            loop {
                idx[pos] += 1;
                if idx[pos] < ALPHABET.len() {
                    break;
                }
                idx[pos] = 0;
                pos += 1;
                if pos == len {
                    break;
                }
            }
            if pos == len {
                break;
            }
        }
    }
}

fn apply(f: fn(&mut Vec<u8>), input: &[u8]) -> Vec<u8> {
    let mut buf = input.to_vec();
    f(&mut buf);
    buf
}

#[test]
fn fused_collapse_quotemarks_matches_sequential() {
    for_each_input(|input| {
        let mut sequential = input.to_vec();
        compact::collapse(&mut sequential);
        compact::quotemarks(&mut sequential);

        let fused = apply(compact::collapse_quotemarks, input);
        assert_eq!(fused, sequential, "input={:02x?}", input);
    });
}

#[test]
fn fused_collapse_quotemarks_unix_lines_matches_sequential() {
    for_each_input(|input| {
        let mut sequential = input.to_vec();
        compact::collapse(&mut sequential);
        compact::quotemarks(&mut sequential);
        compact::unix_lines(&mut sequential);

        let fused = apply(compact::collapse_quotemarks_unix_lines, input);
        assert_eq!(fused, sequential, "input={:02x?}", input);
    });
}

#[test]
fn collapse_and_quotemarks_stay_idempotent_under_fusion_inputs() {
    for_each_input(|input| {
        let once = apply(compact::collapse, input);
        assert_eq!(apply(compact::collapse, &once), once, "input={:02x?}", input);

        let once = apply(compact::quotemarks, input);
        assert_eq!(
            apply(compact::quotemarks, &once),
            once,
            "input={:02x?}",
            input
        );
    });
}

#[test]
fn fused_trim_leading_space_matches_sequential() {
    const WS_ALPHABET: [u8; 5] = [0x00, b' ', b'\t', b'a', b'z'];
    let mut buf = [0u8; 5];
    for len in 0..=5usize {
        let mut counter = 0usize;
        let total = WS_ALPHABET.len().pow(len as u32);
        while counter < total {
            let mut c = counter;
            for slot in buf[..len].iter_mut() {
                *slot = WS_ALPHABET[c % WS_ALPHABET.len()];
                c /= WS_ALPHABET.len();
            }
            let input = &buf[..len];

            let mut sequential = input.to_vec();
            compact::trim(&mut sequential);
            compact::add_leading_space(&mut sequential);

            let fused = apply(compact::trim_add_leading_space, input);
            assert_eq!(fused, sequential, "input={:02x?}", input);

            counter += 1;
        }
    }
}
