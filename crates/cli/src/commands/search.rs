use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Args;
use folio_engine::BrowseSession;
use log::error;

use crate::commands::{CommandResult, OutputOptions, ScanOptions, directory_or_default};
use crate::printer::{ListingContext, ListingPrinter, ListingRow};

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for in entry names (case-insensitive)
    pub query: String,

    /// Directory to search (defaults to the documents folder)
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub scan: ScanOptions,

    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: SearchArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            error!("[error] {e}");
            eprintln!("[search] {e}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: SearchArgs) -> CommandResult<ExitCode> {
    let directory = directory_or_default(args.path.clone());
    let mut session = BrowseSession::open(&directory, args.scan.scanner(), args.scan.collator());

    let mut printer = args.output.make_printer();
    print_matches(&mut session, &args.query, printer.as_mut())
        .context("failed to write search results")?;

    // Nothing found is still a successful search.
    Ok(ExitCode::from(0))
}

pub(crate) fn print_matches(
    session: &mut BrowseSession,
    query: &str,
    printer: &mut dyn ListingPrinter,
) -> std::io::Result<()> {
    session.search(query);
    let hits = session.search_results().unwrap_or_default();

    let ctx = ListingContext {
        kind: "search",
        directory: session.directory(),
        query: Some(query),
        total: hits.len(),
    };

    printer.begin(&ctx)?;
    for file in hits {
        printer.print_row(&ListingRow { section: None, file }, &ctx)?;
    }
    printer.finish(&ctx)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
