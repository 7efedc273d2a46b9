use std::{
    cmp::Ordering,
    fmt,
    fs::{self, DirEntry, read_dir},
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use unicode_normalization::UnicodeNormalization;

use crate::{
    config::HIDDEN_PREFIX,
    diagnostics::{Diagnostic, DiagnosticSink, LogSink, Probe},
    excludes::{ExclusionConfig, normalize_path, resolve_dir},
    record::{FileAttributes, FileDescriptor},
};

/// Lists one directory at a time.
///
/// Holds the exclusion rules and the sink that receives anything the scan
/// had to degrade. Scanning never fails: unreadable directories list as
/// empty and unreadable metadata is left out of the descriptor.
#[derive(Clone)]
pub struct Scanner {
    exclusions: Option<ExclusionConfig>,
    sink: Arc<dyn DiagnosticSink>,
}

impl fmt::Debug for Scanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("exclusions", &self.exclusions)
            .finish_non_exhaustive()
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    /// A scanner with no exclusions that logs diagnostics.
    pub fn new() -> Self {
        Self {
            exclusions: Some(ExclusionConfig::default()),
            sink: Arc::new(LogSink),
        }
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionConfig) -> Self {
        self.exclusions = Some(exclusions);
        self
    }

    /// Accept a configuration that may not have been provided.
    ///
    /// With `None` every scan reports a configuration failure once and then
    /// lists without exclusions.
    pub fn with_optional_exclusions(mut self, exclusions: Option<ExclusionConfig>) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn exclusions(&self) -> Option<&ExclusionConfig> {
        self.exclusions.as_ref()
    }

    /// Describe a single path the way a listing of its parent would.
    ///
    /// Hidden names and exclusions are not applied; the caller asked for
    /// this path explicitly.
    pub fn describe(&self, path: &Path) -> FileDescriptor {
        let path = normalize_path(path);
        let is_symlink = fs::symlink_metadata(&path)
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false);
        probe(path, is_symlink, &*self.sink)
    }

    /// List the visible children of `directory`, sorted by display name.
    pub fn scan(&self, directory: &Path) -> Vec<FileDescriptor> {
        match &self.exclusions {
            Some(exclusions) => scan_with(directory, exclusions, &*self.sink),
            None => {
                self.sink.report(Diagnostic::ConfigurationFailure {
                    reason: "no exclusion configuration set, listing everything".into(),
                });
                scan_with(directory, &ExclusionConfig::default(), &*self.sink)
            }
        }
    }
}

/// List `directory` with `exclusions`, logging any diagnostics.
pub fn scan(directory: &Path, exclusions: &ExclusionConfig) -> Vec<FileDescriptor> {
    scan_with(directory, exclusions, &LogSink)
}

fn scan_with(
    directory: &Path,
    exclusions: &ExclusionConfig,
    sink: &dyn DiagnosticSink,
) -> Vec<FileDescriptor> {
    let directory = resolve_dir(directory);

    let rd = match read_dir(&directory) {
        Ok(rd) => rd,
        Err(error) => {
            sink.report(Diagnostic::EnumerationFailure {
                path: directory,
                error,
            });
            return Vec::new();
        }
    };

    let mut files = Vec::new();

    for entry_res in rd {
        let entry = match entry_res {
            Ok(e) => e,
            Err(error) => {
                sink.report(Diagnostic::EntryReadFailure {
                    directory: directory.clone(),
                    error,
                });
                continue;
            }
        };

        let Some(descriptor) = inspect_entry(&entry, sink) else {
            continue;
        };

        if exclusions.excludes(&descriptor) {
            debug!("[scan] excluded {:?}", descriptor.path());
            continue;
        }

        if descriptor.display_name().is_empty() {
            continue;
        }

        files.push(descriptor);
    }

    sort_by_display_name(&mut files);
    debug!("[scan] {:?}: {} entries", directory, files.len());

    files
}

/// Build a descriptor for one entry, or `None` if the entry is hidden.
fn inspect_entry(entry: &DirEntry, sink: &dyn DiagnosticSink) -> Option<FileDescriptor> {
    let name = entry.file_name();
    if name.to_string_lossy().starts_with(HIDDEN_PREFIX) {
        return None;
    }

    // file_type comes from the directory entry itself on most platforms.
    let is_symlink = entry.file_type().map(|t| t.is_symlink()).unwrap_or(false);

    Some(probe(entry.path(), is_symlink, sink))
}

fn probe(path: PathBuf, is_symlink: bool, sink: &dyn DiagnosticSink) -> FileDescriptor {
    // Follow links so a link to a directory browses like a directory. One
    // metadata call serves both the directory flag and the attributes.
    match fs::metadata(&path) {
        Ok(metadata) if metadata.is_dir() => FileDescriptor::directory(path),
        Ok(metadata) => {
            let attributes = FileAttributes::from_metadata(&metadata, is_symlink);
            FileDescriptor::file(path, Some(attributes))
        }
        Err(error) => {
            sink.report(Diagnostic::MetadataProbeFailure {
                path: path.clone(),
                probe: Probe::IsDirectory,
                error,
            });

            // A dangling link still has attributes of its own.
            let attributes = match fs::symlink_metadata(&path) {
                Ok(metadata) => Some(FileAttributes::from_metadata(
                    &metadata,
                    metadata.file_type().is_symlink(),
                )),
                Err(error) => {
                    sink.report(Diagnostic::MetadataProbeFailure {
                        path: path.clone(),
                        probe: Probe::Attributes,
                        error,
                    });
                    None
                }
            };

            FileDescriptor::file(path, attributes)
        }
    }
}

/// Listing order for display names.
///
/// Names compare by their canonical decomposition first, so `é` typed as
/// one code point or as `e` plus a combining accent sorts the same, then by
/// the raw string to keep the order total. Case matters: `Zeta` sorts
/// before `alpha`.
pub fn compare_display_names(a: &str, b: &str) -> Ordering {
    a.nfd().cmp(b.nfd()).then_with(|| a.cmp(b))
}

/// Stable sort of a listing by [`compare_display_names`].
pub fn sort_by_display_name(files: &mut [FileDescriptor]) {
    files.sort_by(|a, b| compare_display_names(a.display_name(), b.display_name()));
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
