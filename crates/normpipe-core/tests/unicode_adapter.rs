// crates/normpipe-core/tests/unicode_adapter.rs

use normpipe_core::unicode;
use unicode_normalization::char::is_combining_mark;

#[test]
fn nfd_splits_precomposed_codepoints() {
    let out = unicode::nfd("caf\u{E9}".as_bytes().to_vec()).expect("nfd");
    assert_eq!(out, "cafe\u{301}".as_bytes());
}

#[test]
fn lowercase_is_locale_independent() {
    let out = unicode::lowercase(b"HELLO World".to_vec()).expect("lowercase");
    assert_eq!(out, b"hello world");

    // Turkish dotless-i casing must NOT apply: I lowers to plain i.
    let out = unicode::lowercase(b"I".to_vec()).expect("lowercase");
    assert_eq!(out, b"i");
}

#[test]
fn strip_accents_equals_mark_filtered_nfd() {
    let samples = ["caf\u{E9}", "\u{17B}\u{F3}\u{142}\u{107}", "na\u{EF}ve", "plain ascii"];
    for s in samples {
        let accents = unicode::strip_accents(s.as_bytes().to_vec()).expect("accents");

        let decomposed = unicode::nfd(s.as_bytes().to_vec()).expect("nfd");
        let filtered: String = String::from_utf8(decomposed)
            .expect("utf8")
            .chars()
            .filter(|&c| !is_combining_mark(c))
            .collect();

        assert_eq!(accents, filtered.into_bytes(), "sample={}", s);
    }
}

#[test]
fn strip_accents_removes_diacritics() {
    let out = unicode::strip_accents("caf\u{E9}".as_bytes().to_vec()).expect("accents");
    assert_eq!(out, b"cafe");
}

#[test]
fn strip_accents_lowercase_chains_all_three() {
    let out =
        unicode::strip_accents_lowercase("CAF\u{C9}".as_bytes().to_vec()).expect("chained");
    assert_eq!(out, b"cafe");
}

#[test]
fn nfd_lowercase_decomposes_then_folds() {
    let out = unicode::nfd_lowercase("CAF\u{C9}".as_bytes().to_vec()).expect("chained");
    assert_eq!(out, "cafe\u{301}".as_bytes());
}

#[test]
fn malformed_utf8_reports_a_transform_fault() {
    for f in [
        unicode::nfd,
        unicode::lowercase,
        unicode::nfd_lowercase,
        unicode::strip_accents,
        unicode::strip_accents_lowercase,
    ] {
        let err = f(vec![0xC3, 0x28]).unwrap_err();
        assert_eq!(err, normpipe_core::NormError::Transform);
    }
}
