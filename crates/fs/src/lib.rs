mod category;
mod config;
mod diagnostics;
mod excludes;
mod preview;
mod record;
mod scanner;

pub use category::{FileCategory, classify};
pub use config::{HIDDEN_PREFIX, MAX_PREVIEW_BYTES};
pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink, Probe, RecordingSink};
pub use excludes::ExclusionConfig;
pub use preview::{PreviewKind, render_text};
pub use record::{FileAttributes, FileDescriptor};
pub use scanner::{Scanner, compare_display_names, scan, sort_by_display_name};
