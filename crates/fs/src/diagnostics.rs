use std::{
    fmt, io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use log::warn;

/// Which metadata lookup failed for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    IsDirectory,
    Attributes,
}

/// A failure the core absorbed instead of returning.
///
/// None of these abort a listing; they only explain why a result is smaller
/// or less detailed than expected.
#[derive(Debug)]
pub enum Diagnostic {
    /// The directory could not be listed at all; the listing is empty.
    EnumerationFailure { path: PathBuf, error: io::Error },
    /// One entry of an otherwise readable directory could not be read; it is skipped.
    EntryReadFailure { directory: PathBuf, error: io::Error },
    /// A per-entry probe failed; the entry is kept with that field degraded.
    MetadataProbeFailure {
        path: PathBuf,
        probe: Probe,
        error: io::Error,
    },
    /// Configuration was missing or unusable; defaults apply.
    ConfigurationFailure { reason: String },
    /// A text preview could not be produced as requested.
    PreviewFailure { path: PathBuf, reason: String },
}

impl Diagnostic {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Diagnostic::EnumerationFailure { path, .. }
            | Diagnostic::MetadataProbeFailure { path, .. }
            | Diagnostic::PreviewFailure { path, .. } => Some(path),
            Diagnostic::EntryReadFailure { directory, .. } => Some(directory),
            Diagnostic::ConfigurationFailure { .. } => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::EnumerationFailure { path, error } => {
                write!(f, "cannot list {}: {error}", path.display())
            }
            Diagnostic::EntryReadFailure { directory, error } => {
                write!(f, "cannot read entry in {}: {error}", directory.display())
            }
            Diagnostic::MetadataProbeFailure { path, probe, error } => {
                let what = match probe {
                    Probe::IsDirectory => "directory flag",
                    Probe::Attributes => "attributes",
                };
                write!(f, "cannot read {what} of {}: {error}", path.display())
            }
            Diagnostic::ConfigurationFailure { reason } => {
                write!(f, "configuration: {reason}")
            }
            Diagnostic::PreviewFailure { path, reason } => {
                write!(f, "cannot preview {}: {reason}", path.display())
            }
        }
    }
}

/// Receiver for [`Diagnostic`]s. Reporting must never fail or panic.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Arc<T> {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic)
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic)
    }
}

/// Forwards every diagnostic to the `log` facade at `warn`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
    }
}

/// Keeps diagnostics in memory so callers can inspect degraded results.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything recorded so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        // A panic elsewhere while holding the lock leaves a usable Vec.
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.lock().push(diagnostic);
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
