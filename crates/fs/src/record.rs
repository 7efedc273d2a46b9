use std::{
    fs::Metadata,
    io,
    path::{Path, PathBuf},
    time::SystemTime,
};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::category::{FileCategory, classify};

/// Raw metadata captured for a file at scan time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileAttributes {
    /// File size in bytes
    pub size: u64,
    pub modified: Option<DateTime<Utc>>,
    /// Creation time is not reported by every filesystem
    pub created: Option<DateTime<Utc>>,
    pub accessed: Option<DateTime<Utc>>,
    pub readonly: bool,
    /// The entry itself is a symbolic link
    pub is_symlink: bool,
}

impl FileAttributes {
    pub(crate) fn from_metadata(metadata: &Metadata, is_symlink: bool) -> Self {
        Self {
            size: metadata.len(),
            modified: to_utc(metadata.modified()),
            created: to_utc(metadata.created()),
            accessed: to_utc(metadata.accessed()),
            readonly: metadata.permissions().readonly(),
            is_symlink,
        }
    }
}

fn to_utc(t: io::Result<SystemTime>) -> Option<DateTime<Utc>> {
    t.ok().map(DateTime::<Utc>::from)
}

/// One entry of a directory listing.
///
/// Built once per scan and never modified afterwards. A descriptor is a
/// directory exactly when its category is [`FileCategory::Directory`], and
/// only directories lack an extension; a file without one carries `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDescriptor {
    display_name: String,
    path: PathBuf,
    is_dir: bool,
    extension: Option<String>,
    category: FileCategory,
    attributes: Option<FileAttributes>,
}

impl FileDescriptor {
    pub fn directory(path: PathBuf) -> Self {
        Self {
            display_name: display_name_of(&path),
            path,
            is_dir: true,
            extension: None,
            category: FileCategory::Directory,
            attributes: None,
        }
    }

    pub fn file(path: PathBuf, attributes: Option<FileAttributes>) -> Self {
        let extension = path
            .extension()
            .map(|os| os.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let category = classify(Some(&extension), false);

        Self {
            display_name: display_name_of(&path),
            path,
            is_dir: false,
            extension: Some(extension),
            category,
            attributes,
        }
    }

    /// Last path component.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Lowercase extension without the dot. `None` for directories.
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn category(&self) -> FileCategory {
        self.category
    }

    pub fn attributes(&self) -> Option<&FileAttributes> {
        self.attributes.as_ref()
    }
}

fn display_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
