use std::{
    io::{self, Write},
    path::Path,
};

use folio_fs::{FileCategory, FileDescriptor};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output with optional colors.
    #[default]
    Human,
    /// NDJSON (newline-delimited JSON) for machine consumption.
    Json,
}

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Automatically detect TTY and enable colors if appropriate.
    #[default]
    Auto,
    Always,
    Never,
}

/// Configuration for printing listings.
#[derive(Debug, Clone)]
pub struct PrinterConfig {
    pub format: OutputFormat,
    pub color: ColorChoice,
    /// Whether to print the entry count after the listing.
    pub show_summary: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: ColorChoice::Auto,
            show_summary: true,
        }
    }
}

/// Static context about a print run.
#[derive(Debug)]
pub struct ListingContext<'a> {
    /// Command label, e.g. "ls" or "search"
    pub kind: &'a str,
    /// Directory that was listed.
    pub directory: &'a Path,
    /// Search query, if this is a search.
    pub query: Option<&'a str>,
    /// Number of entries printed.
    pub total: usize,
}

/// One entry in the listing stream.
#[derive(Debug)]
pub struct ListingRow<'a> {
    /// Section title when printing sections.
    pub section: Option<&'a str>,
    pub file: &'a FileDescriptor,
}

/// Receives a listing as a stream of section headers and rows.
pub trait ListingPrinter {
    /// Called once before anything else.
    fn begin(&mut self, ctx: &ListingContext) -> io::Result<()>;

    /// Called before the rows of each non-empty section.
    fn section(&mut self, title: &str, ctx: &ListingContext) -> io::Result<()>;

    fn print_row(&mut self, row: &ListingRow<'_>, ctx: &ListingContext) -> io::Result<()>;

    /// Called once after all rows; prints the summary.
    fn finish(&mut self, ctx: &ListingContext) -> io::Result<()>;
}

/// Human-readable printer with optional color support.
pub struct HumanPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
    use_color: bool,
    sections_seen: usize,
}

impl<W: Write, E: Write> HumanPrinter<W, E> {
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        // Generic writers cannot be probed for a TTY; Auto means no color.
        let use_color = cfg.color == ColorChoice::Always;

        Self {
            out,
            err,
            cfg,
            use_color,
            sections_seen: 0,
        }
    }

    #[inline]
    fn format_name(&self, file: &FileDescriptor) -> String {
        let name = if file.is_dir() {
            format!("{}/", file.display_name())
        } else {
            file.display_name().to_owned()
        };

        if !self.use_color {
            return name;
        }

        match file.category() {
            FileCategory::Directory => format!("\x1b[1;34m{name}\x1b[0m"),
            FileCategory::Image => format!("\x1b[35m{name}\x1b[0m"),
            FileCategory::Json | FileCategory::Plist => format!("\x1b[33m{name}\x1b[0m"),
            _ => name,
        }
    }
}

impl HumanPrinter<io::Stdout, io::Stderr> {
    /// Create a printer that writes to stdout and stderr with TTY detection.
    pub fn stdout(cfg: PrinterConfig) -> Self {
        use std::io::IsTerminal;

        let mut printer = Self::new(io::stdout(), io::stderr(), cfg);
        printer.use_color = match printer.cfg.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };
        printer
    }
}

impl<W: Write, E: Write> ListingPrinter for HumanPrinter<W, E> {
    fn begin(&mut self, _ctx: &ListingContext) -> io::Result<()> {
        self.sections_seen = 0;
        Ok(())
    }

    fn section(&mut self, title: &str, _ctx: &ListingContext) -> io::Result<()> {
        if self.sections_seen > 0 {
            writeln!(self.out)?;
        }
        self.sections_seen += 1;
        writeln!(self.out, "{title}")
    }

    fn print_row(&mut self, row: &ListingRow<'_>, _ctx: &ListingContext) -> io::Result<()> {
        let indent = if row.section.is_some() { "  " } else { "" };
        let name = self.format_name(row.file);
        writeln!(
            self.out,
            "{indent}{:<6} {}",
            row.file.category().icon_key(),
            name
        )
    }

    fn finish(&mut self, ctx: &ListingContext) -> io::Result<()> {
        if !self.cfg.show_summary {
            return Ok(());
        }

        let noun = if ctx.total == 1 { "entry" } else { "entries" };
        match ctx.query {
            Some(q) => writeln!(
                self.err,
                "\n[{}] {} {noun} matching {:?} in {}",
                ctx.kind,
                ctx.total,
                q,
                ctx.directory.display()
            ),
            None => writeln!(
                self.err,
                "\n[{}] {} {noun} in {}",
                ctx.kind,
                ctx.total,
                ctx.directory.display()
            ),
        }
    }
}

pub struct JsonPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
}

impl<W: Write, E: Write> JsonPrinter<W, E> {
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        Self { out, err, cfg }
    }
}

impl JsonPrinter<io::Stdout, io::Stderr> {
    /// Create a printer that writes to stdout and stderr.
    pub fn stdout(cfg: PrinterConfig) -> Self {
        Self::new(io::stdout(), io::stderr(), cfg)
    }
}

impl<W: Write, E: Write> ListingPrinter for JsonPrinter<W, E> {
    fn begin(&mut self, _ctx: &ListingContext) -> io::Result<()> {
        Ok(())
    }

    fn section(&mut self, _title: &str, _ctx: &ListingContext) -> io::Result<()> {
        // Each row carries its section; no separate header record.
        Ok(())
    }

    fn print_row(&mut self, row: &ListingRow<'_>, ctx: &ListingContext) -> io::Result<()> {
        // Non-UTF-8 paths fail to serialize; surface that as a write error.
        let file = serde_json::to_value(row.file).map_err(io::Error::other)?;
        let obj = serde_json::json!({
            "kind": ctx.kind,
            "query": ctx.query,
            "section": row.section,
            "icon": row.file.category().icon_key(),
            "file": file,
        });
        writeln!(self.out, "{}", obj)
    }

    fn finish(&mut self, ctx: &ListingContext) -> io::Result<()> {
        if self.cfg.show_summary {
            let obj = serde_json::json!({
                "type": "summary",
                "kind": ctx.kind,
                "query": ctx.query,
                "directory": ctx.directory.display().to_string(),
                "total": ctx.total,
            });
            writeln!(self.err, "{}", obj)?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
