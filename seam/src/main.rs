mod cli;
mod pipeline;

use cli::{Cli, SubCommands};
use pipeline::{run_global, run_local};

use clap::Parser;

fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        SubCommands::Global(args) => {
            run_global(&args)?;
        }
        SubCommands::Local(args) => {
            run_local(&args)?;
        }
    }
    Ok(())
}
