use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Args;
use folio_engine::BrowseSession;
use log::{debug, error};

use crate::commands::{CommandResult, OutputOptions, ScanOptions, directory_or_default};
use crate::printer::{ListingContext, ListingPrinter, ListingRow};

#[derive(Debug, Args)]
pub struct LsArgs {
    /// Directory to list (defaults to the documents folder)
    pub path: Option<PathBuf>,

    /// Print one sorted list instead of alphabetic sections
    #[arg(long)]
    pub flat: bool,

    #[command(flatten)]
    pub scan: ScanOptions,

    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: LsArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            error!("[error] {e}");
            eprintln!("[ls] {e}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: LsArgs) -> CommandResult<ExitCode> {
    let directory = directory_or_default(args.path.clone());
    debug!("ls {} (flat: {})", directory.display(), args.flat);
    let session = BrowseSession::open(&directory, args.scan.scanner(), args.scan.collator());

    let mut printer = args.output.make_printer();
    print_session(&session, args.flat, printer.as_mut()).context("failed to write listing")?;

    Ok(ExitCode::from(0))
}

pub(crate) fn print_session(
    session: &BrowseSession,
    flat: bool,
    printer: &mut dyn ListingPrinter,
) -> std::io::Result<()> {
    let ctx = ListingContext {
        kind: "ls",
        directory: session.directory(),
        query: None,
        total: session.files().len(),
    };

    printer.begin(&ctx)?;

    if flat {
        for file in session.files() {
            printer.print_row(&ListingRow { section: None, file }, &ctx)?;
        }
    } else {
        for (title, files) in session.sections().non_empty() {
            printer.section(title, &ctx)?;
            for file in files {
                let row = ListingRow {
                    section: Some(title),
                    file,
                };
                printer.print_row(&row, &ctx)?;
            }
        }
    }

    printer.finish(&ctx)
}

#[cfg(test)]
#[path = "ls_tests.rs"]
mod tests;
