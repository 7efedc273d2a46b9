use std::process::ExitCode;

use clap::Parser;

mod commands;
mod printer;

use commands::Command;
use folio_runtime::logging;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Browse a directory the way a file picker does")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::Ls(args) => commands::ls::run(args),
        Command::Search(args) => commands::search::run(args),
        Command::Preview(args) => commands::preview::run(args),
    }
}
