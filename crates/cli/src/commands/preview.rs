use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, anyhow};
use clap::Args;
use folio_fs::{FileCategory, FileDescriptor, LogSink, PreviewKind, Scanner, render_text};
use log::error;

use crate::commands::CommandResult;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// File to preview
    pub file: PathBuf,
}

pub fn run(args: PreviewArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            error!("[error] {e}");
            eprintln!("[preview] {e}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: PreviewArgs) -> CommandResult<ExitCode> {
    let descriptor = Scanner::new().describe(&args.file);
    if descriptor.is_dir() {
        return Err(anyhow!("{} is a directory, use `folio ls`", args.file.display()).into());
    }

    let mut out = io::stdout().lock();
    write_preview(&descriptor, &mut out).context("failed to write preview")?;

    Ok(ExitCode::from(0))
}

/// Text previews for JSON, PLIST and plain text; a one-line note otherwise.
pub(crate) fn write_preview<W: Write>(descriptor: &FileDescriptor, out: &mut W) -> io::Result<()> {
    let kind = PreviewKind::for_descriptor(descriptor);

    // Generic files are often plain text; try before giving up on them.
    let wants_text = kind == PreviewKind::FormattedText
        || descriptor.category() == FileCategory::Generic;

    if wants_text && let Some(text) = render_text(descriptor, &LogSink) {
        out.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            writeln!(out)?;
        }
        return Ok(());
    }

    writeln!(
        out,
        "{}: no text preview ({}), open with the system previewer",
        descriptor.display_name(),
        descriptor.category().as_str()
    )
}

#[cfg(test)]
#[path = "preview_tests.rs"]
mod tests;
