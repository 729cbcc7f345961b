// crates/normpipe-cli/src/cmd/run.rs

use std::io::{Read, Write};

use anyhow::Context;
use clap::Args;

use normpipe_core::Normalizer;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Options string, e.g. "trim collapse quotemarks"
    #[arg(long)]
    pub options: String,

    /// Input file path. Reads stdin when omitted.
    #[arg(long)]
    pub r#in: Option<String>,

    /// Output file path. Writes stdout when omitted.
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let normalizer =
        Normalizer::new(&args.options).with_context(|| format!("options: {}", args.options))?;

    let input = match &args.r#in {
        Some(path) => std::fs::read(path).with_context(|| format!("read: {}", path))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("read stdin")?;
            buf
        }
    };

    let output = normalizer.normalize(input).context("normalize")?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, &output).with_context(|| format!("write: {}", path))?
        }
        None => std::io::stdout().write_all(&output).context("write stdout")?,
    }

    Ok(())
}
