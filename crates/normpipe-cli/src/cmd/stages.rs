// crates/normpipe-cli/src/cmd/stages.rs

use anyhow::Context;
use clap::Args;

use normpipe_core::{plan, Options};

#[derive(Args, Debug)]
pub struct StagesArgs {
    /// Options string to plan, e.g. "lines collapse quotemarks trim"
    #[arg(long)]
    pub options: String,
}

pub fn run(args: StagesArgs) -> anyhow::Result<()> {
    let opts =
        Options::parse(&args.options).with_context(|| format!("options: {}", args.options))?;
    let stages = plan(&opts);

    println!("options = {}", opts);
    if stages.is_empty() {
        println!("stages  = (none)");
        return Ok(());
    }
    for (i, stage) in stages.iter().enumerate() {
        println!("stage {} = {}", i + 1, stage);
    }

    Ok(())
}
