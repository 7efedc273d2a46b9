use std::path::{Path, PathBuf};

use hashbrown::HashSet;

use crate::record::FileDescriptor;

/// Extensions and paths to leave out of a listing.
///
/// Extensions are stored lowercased and without a leading dot, so matching is
/// case-insensitive. Paths are matched exactly after normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionConfig {
    extensions: HashSet<String>,
    paths: HashSet<PathBuf>,
}

impl ExclusionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for ext in extensions {
            self.add_extension(ext.as_ref());
        }
        self
    }

    pub fn with_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        for path in paths {
            self.add_path(path.into());
        }
        self
    }

    /// Blank entries such as `.` or whitespace are ignored; they would
    /// otherwise hide every extensionless file.
    pub fn add_extension(&mut self, ext: &str) {
        let ext = ext.trim().trim_start_matches('.').to_lowercase();
        if !ext.is_empty() {
            self.extensions.insert(ext);
        }
    }

    pub fn add_path(&mut self, path: PathBuf) {
        self.paths.insert(normalize_path(&path));
    }

    /// Fold another configuration into this one.
    pub fn merge(&mut self, other: ExclusionConfig) {
        self.extensions.extend(other.extensions);
        self.paths.extend(other.paths);
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty() && self.paths.is_empty()
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    #[inline]
    pub fn excludes_extension(&self, ext: &str) -> bool {
        if self.extensions.is_empty() {
            return false;
        }
        self.extensions.contains(ext.to_lowercase().as_str())
    }

    /// `path` is expected in scanner form: a resolved directory joined with
    /// an entry name.
    #[inline]
    pub fn excludes_path(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    /// Whether a scanned entry should be dropped from the listing.
    pub fn excludes(&self, descriptor: &FileDescriptor) -> bool {
        if let Some(ext) = descriptor.extension()
            && self.excludes_extension(ext)
        {
            return true;
        }
        self.excludes_path(descriptor.path())
    }
}

/// Resolve the directory part of `path` and re-attach the last component.
///
/// The final component is left alone so an excluded symlink is matched as
/// the link itself, not as its target. Canonicalizing the parent keeps the
/// result comparable with scanner paths on systems where e.g. `/tmp` points
/// to `/private/tmp`.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) => resolve_dir(parent).join(name),
        _ => resolve_dir(&absolute),
    }
}

/// Canonical form of a directory, or its absolute form when it cannot be
/// resolved (e.g. it does not exist).
pub(crate) fn resolve_dir(dir: &Path) -> PathBuf {
    match dir.canonicalize() {
        Ok(p) => p,
        Err(_) => std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf()),
    }
}

#[cfg(test)]
#[path = "excludes_tests.rs"]
mod tests;
