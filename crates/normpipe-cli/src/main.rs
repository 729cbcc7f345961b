// crates/normpipe-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "normpipe")]
#[command(about = "Configurable text-normalization pipeline", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize a file (or stdin) with an options string
    Run(cmd::run::RunArgs),

    /// Show the stage sequence planned for an options string
    Stages(cmd::stages::StagesArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Run(args) => cmd::run::run(args),
        Commands::Stages(args) => cmd::stages::run(args),
    }
}
