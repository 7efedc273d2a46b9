pub mod ls;
pub mod preview;
pub mod search;

use std::{path::PathBuf, sync::Arc};

use clap::{Args, Subcommand};
use folio_engine::{AsciiCollator, Collator, UnicodeCollator};
use folio_fs::{ExclusionConfig, Scanner};
use folio_runtime::{default_browse_root, env_excluded_extensions, env_excluded_paths};

pub use ls::LsArgs;
pub use preview::PreviewArgs;
pub use search::SearchArgs;

use crate::printer::{
    ColorChoice, HumanPrinter, JsonPrinter, ListingPrinter, OutputFormat, PrinterConfig,
};

/// Common error type for command handlers
pub type CommandResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List a directory in alphabetic sections.
    ///
    /// Example:
    ///   folio ls ~/Documents
    ///   folio ls --exclude-ext log --flat .
    Ls(LsArgs),

    /// List the entries of a directory whose name contains a query.
    ///
    /// Example:
    ///   folio search report ~/Documents
    Search(SearchArgs),

    /// Print a file the way the previewer would show it.
    ///
    /// Example:
    ///   folio preview settings.json
    Preview(PreviewArgs),
}

/// Which entries to list and how to group them.
#[derive(Debug, Args)]
pub struct ScanOptions {
    /// Hide files with this extension (repeatable, case-insensitive)
    #[arg(long = "exclude-ext", value_name = "EXT")]
    pub exclude_ext: Vec<String>,

    /// Hide this exact path (repeatable)
    #[arg(long = "exclude-path", value_name = "PATH")]
    pub exclude_path: Vec<PathBuf>,

    /// Ignore FOLIO_EXCLUDE_EXTENSIONS and FOLIO_EXCLUDE_PATHS
    #[arg(long)]
    pub no_env: bool,

    /// Use plain A-Z sections without locale or diacritic handling
    #[arg(long)]
    pub ascii: bool,
}

impl ScanOptions {
    /// Exclusions from the environment merged with the command line.
    pub fn exclusions(&self) -> ExclusionConfig {
        let mut cfg = ExclusionConfig::new()
            .with_extensions(&self.exclude_ext)
            .with_paths(self.exclude_path.iter().cloned());

        if !self.no_env {
            let from_env = ExclusionConfig::new()
                .with_extensions(env_excluded_extensions().unwrap_or_default())
                .with_paths(env_excluded_paths().unwrap_or_default());
            cfg.merge(from_env);
        }

        cfg
    }

    pub fn scanner(&self) -> Scanner {
        Scanner::new().with_exclusions(self.exclusions())
    }

    pub fn collator(&self) -> Arc<dyn Collator> {
        if self.ascii {
            Arc::new(AsciiCollator::default())
        } else {
            Arc::new(UnicodeCollator::current())
        }
    }
}

/// Directory argument, falling back to the documents folder.
pub fn directory_or_default(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(default_browse_root)
}

#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Output entries as NDJSON (one JSON object per line)
    #[arg(long)]
    pub json: bool,

    /// When to use colors: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,

    /// Suppress the summary line
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl OutputOptions {
    pub fn config(&self) -> PrinterConfig {
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        };

        let color = match self.color.as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        };

        PrinterConfig {
            format,
            color,
            show_summary: !self.quiet,
        }
    }

    /// Create a printer based on the output options.
    pub fn make_printer(&self) -> Box<dyn ListingPrinter> {
        let cfg = self.config();
        match cfg.format {
            OutputFormat::Human => Box::new(HumanPrinter::stdout(cfg)),
            OutputFormat::Json => Box::new(JsonPrinter::stdout(cfg)),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
