// crates/normpipe-core/src/pipeline.rs
//
// Option set -> stage plan -> execution.
//
// Stages run in a fixed total order: line canonicalization, then
// collapse/quotemarks, then trim/leading-space, then the unicode stage.
// Adjacent byte-scan stages that are jointly requested fuse into a single
// pass; the unicode stage is always one adapter call, with chaining inside
// the adapter. Accent removal already decomposes, so a standalone NFD stage
// is dropped whenever accents are requested too.

use std::fmt;

use crate::compact;
use crate::error::Result;
use crate::options::Options;
use crate::unicode;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    UnixLines,
    CollapseQuotemarksUnixLines,
    CollapseQuotemarks,
    Collapse,
    Quotemarks,
    TrimAddLeadingSpace,
    Trim,
    AddLeadingSpace,
    StripAccentsLowercase,
    StripAccents,
    NfdLowercase,
    Lowercase,
    Nfd,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::UnixLines => "unix-lines",
            Stage::CollapseQuotemarksUnixLines => "collapse+quotemarks+unix-lines",
            Stage::CollapseQuotemarks => "collapse+quotemarks",
            Stage::Collapse => "collapse",
            Stage::Quotemarks => "quotemarks",
            Stage::TrimAddLeadingSpace => "trim+leading-space",
            Stage::Trim => "trim",
            Stage::AddLeadingSpace => "leading-space",
            Stage::StripAccentsLowercase => "nfd+strip-marks+lowercase",
            Stage::StripAccents => "nfd+strip-marks",
            Stage::NfdLowercase => "nfd+lowercase",
            Stage::Lowercase => "lowercase",
            Stage::Nfd => "nfd",
        };
        f.write_str(name)
    }
}

/// Derive the ordered stage list for an option set.
pub fn plan(opts: &Options) -> Vec<Stage> {
    let mut stages = Vec::new();

    if opts.lines() && opts.collapse() && opts.quotemarks() {
        stages.push(Stage::CollapseQuotemarksUnixLines);
    } else {
        if opts.lines() {
            stages.push(Stage::UnixLines);
        }
        match (opts.collapse(), opts.quotemarks()) {
            (true, true) => stages.push(Stage::CollapseQuotemarks),
            (true, false) => stages.push(Stage::Collapse),
            (false, true) => stages.push(Stage::Quotemarks),
            (false, false) => {}
        }
    }

    match (opts.trim(), opts.leading_space()) {
        (true, true) => stages.push(Stage::TrimAddLeadingSpace),
        (true, false) => stages.push(Stage::Trim),
        (false, true) => stages.push(Stage::AddLeadingSpace),
        (false, false) => {}
    }

    // Decision table for the unicode stage; accents subsumes nfd.
    match (opts.accents(), opts.lowercase(), opts.nfd()) {
        (true, true, _) => stages.push(Stage::StripAccentsLowercase),
        (true, false, _) => stages.push(Stage::StripAccents),
        (false, true, true) => stages.push(Stage::NfdLowercase),
        (false, true, false) => stages.push(Stage::Lowercase),
        (false, false, true) => stages.push(Stage::Nfd),
        (false, false, false) => {}
    }

    stages
}

/// Run the plan for `opts` over `buf`.
///
/// Byte-compaction stages mutate in place; unicode stages replace the
/// buffer. On a unicode fault nothing is returned, including output already
/// produced by earlier stages.
pub fn normalize(opts: &Options, mut buf: Vec<u8>) -> Result<Vec<u8>> {
    for stage in plan(opts) {
        buf = run_stage(stage, buf)?;
    }
    Ok(buf)
}

fn run_stage(stage: Stage, mut buf: Vec<u8>) -> Result<Vec<u8>> {
    match stage {
        Stage::UnixLines => compact::unix_lines(&mut buf),
        Stage::CollapseQuotemarksUnixLines => compact::collapse_quotemarks_unix_lines(&mut buf),
        Stage::CollapseQuotemarks => compact::collapse_quotemarks(&mut buf),
        Stage::Collapse => compact::collapse(&mut buf),
        Stage::Quotemarks => compact::quotemarks(&mut buf),
        Stage::TrimAddLeadingSpace => compact::trim_add_leading_space(&mut buf),
        Stage::Trim => compact::trim(&mut buf),
        Stage::AddLeadingSpace => compact::add_leading_space(&mut buf),
        Stage::StripAccentsLowercase => return unicode::strip_accents_lowercase(buf),
        Stage::StripAccents => return unicode::strip_accents(buf),
        Stage::NfdLowercase => return unicode::nfd_lowercase(buf),
        Stage::Lowercase => return unicode::lowercase(buf),
        Stage::Nfd => return unicode::nfd(buf),
    }
    Ok(buf)
}

/// Parse-once, apply-many wrapper around an option set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Normalizer {
    opts: Options,
}

impl Normalizer {
    pub fn new(spec: &str) -> Result<Normalizer> {
        Ok(Normalizer {
            opts: Options::parse(spec)?,
        })
    }

    pub fn from_options(opts: Options) -> Normalizer {
        Normalizer { opts }
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    pub fn normalize(&self, buf: Vec<u8>) -> Result<Vec<u8>> {
        normalize(&self.opts, buf)
    }
}
