// crates/normpipe-core/src/options.rs
//
// Option set for the normalization pipeline.
//
// Options are independent boolean flags packed into a u8. The set is built
// once by `Options::parse` and never mutated afterwards. Parsing is
// case-insensitive and accepts the synonym spellings listed per flag below.

use std::fmt;

use crate::error::{NormError, Result};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    bits: u8,
}

impl Options {
    pub const NFD: u8 = 1 << 0;
    pub const LOWERCASE: u8 = 1 << 1;
    pub const ACCENTS: u8 = 1 << 2;
    pub const QUOTEMARKS: u8 = 1 << 3;
    pub const COLLAPSE: u8 = 1 << 4;
    pub const TRIM: u8 = 1 << 5;
    pub const LEADING_SPACE: u8 = 1 << 6;
    pub const LINES: u8 = 1 << 7;

    /// Parse a whitespace-separated, case-insensitive option string.
    ///
    /// Unrecognized tokens are reported via `NormError::UnknownOption`
    /// naming the token; the rest of the string is still scanned, and the
    /// last offending token is the one reported.
    pub fn parse(spec: &str) -> Result<Options> {
        let mut bits = 0u8;
        let mut err: Option<NormError> = None;

        for token in spec.to_lowercase().split_whitespace() {
            match token {
                "nfd" => bits |= Self::NFD,
                "lowercase" | "case" => bits |= Self::LOWERCASE,
                "accents" | "accent" => bits |= Self::ACCENTS,
                "quotemarks" | "quotemark" | "apostrophes" => bits |= Self::QUOTEMARKS,
                "collapse" | "spaces" | "space" | "doublespace" | "doublespaces" => {
                    bits |= Self::COLLAPSE
                }
                "trim" | "trimspace" | "trim-space" => bits |= Self::TRIM,
                "leadingspace" | "leading-space" | "addleadingspace" => {
                    bits |= Self::LEADING_SPACE
                }
                "unixlines" | "unix-lines" | "newlines" | "lines" => bits |= Self::LINES,
                other => err = Some(NormError::UnknownOption(other.to_string())),
            }
        }

        match err {
            Some(e) => Err(e),
            None => Ok(Options { bits }),
        }
    }

    pub const fn empty() -> Options {
        Options { bits: 0 }
    }

    /// Rebuild from a raw bit pattern, e.g. one produced by `bits()`.
    pub const fn from_bits(bits: u8) -> Options {
        Options { bits }
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn bits(&self) -> u8 {
        self.bits
    }

    pub fn nfd(&self) -> bool {
        self.bits & Self::NFD != 0
    }

    pub fn lowercase(&self) -> bool {
        self.bits & Self::LOWERCASE != 0
    }

    pub fn accents(&self) -> bool {
        self.bits & Self::ACCENTS != 0
    }

    pub fn quotemarks(&self) -> bool {
        self.bits & Self::QUOTEMARKS != 0
    }

    pub fn collapse(&self) -> bool {
        self.bits & Self::COLLAPSE != 0
    }

    pub fn trim(&self) -> bool {
        self.bits & Self::TRIM != 0
    }

    pub fn leading_space(&self) -> bool {
        self.bits & Self::LEADING_SPACE != 0
    }

    pub fn lines(&self) -> bool {
        self.bits & Self::LINES != 0
    }
}

impl fmt::Display for Options {
    /// Canonical token list, one canonical name per set flag, bit order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(u8, &str); 8] = [
            (Options::NFD, "nfd"),
            (Options::LOWERCASE, "lowercase"),
            (Options::ACCENTS, "accents"),
            (Options::QUOTEMARKS, "quotemarks"),
            (Options::COLLAPSE, "collapse"),
            (Options::TRIM, "trim"),
            (Options::LEADING_SPACE, "leading-space"),
            (Options::LINES, "lines"),
        ];

        let mut first = true;
        for (bit, name) in NAMES {
            if self.bits & bit != 0 {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
