use std::sync::OnceLock;

use hashbrown::HashMap;
use serde::Serialize;

/// Semantic kind of a listing entry, used to pick an icon and a previewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Directory,
    Image,
    Pdf,
    Zip,
    Json,
    Plist,
    Generic,
}

/// Lowercase extension to category. Anything missing here is `Generic`.
const EXTENSION_TABLE: &[(&str, FileCategory)] = &[
    ("gif", FileCategory::Image),
    ("jpg", FileCategory::Image),
    ("png", FileCategory::Image),
    ("pdf", FileCategory::Pdf),
    ("zip", FileCategory::Zip),
    ("json", FileCategory::Json),
    ("plist", FileCategory::Plist),
];

fn extension_table() -> &'static HashMap<&'static str, FileCategory> {
    static TABLE: OnceLock<HashMap<&'static str, FileCategory>> = OnceLock::new();
    TABLE.get_or_init(|| EXTENSION_TABLE.iter().copied().collect())
}

/// Classify an entry from its extension.
///
/// Directories are always [`FileCategory::Directory`], whatever their name
/// looks like. Extensions match case-insensitively and exactly: `jpeg` is not
/// `jpg`.
pub fn classify(extension: Option<&str>, is_dir: bool) -> FileCategory {
    if is_dir {
        return FileCategory::Directory;
    }

    let Some(ext) = extension else {
        return FileCategory::Generic;
    };

    extension_table()
        .get(ext.to_lowercase().as_str())
        .copied()
        .unwrap_or(FileCategory::Generic)
}

impl FileCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            FileCategory::Directory => "directory",
            FileCategory::Image => "image",
            FileCategory::Pdf => "pdf",
            FileCategory::Zip => "zip",
            FileCategory::Json => "json",
            FileCategory::Plist => "plist",
            FileCategory::Generic => "file",
        }
    }

    /// Asset key a host uses to draw the entry's icon.
    ///
    /// JSON and PLIST have no dedicated artwork and share the generic file icon.
    pub fn icon_key(self) -> &'static str {
        match self {
            FileCategory::Directory => "folder",
            FileCategory::Image => "image",
            FileCategory::Pdf => "pdf",
            FileCategory::Zip => "zip",
            FileCategory::Json | FileCategory::Plist | FileCategory::Generic => "file",
        }
    }
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
