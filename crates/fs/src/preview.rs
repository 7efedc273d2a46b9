use std::{
    fs::File,
    io::{self, Cursor, Read},
};

use serde::Serialize;

use crate::{
    category::FileCategory,
    config::MAX_PREVIEW_BYTES,
    diagnostics::{Diagnostic, DiagnosticSink},
    record::FileDescriptor,
};

/// How a host should preview a selected file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewKind {
    /// Show the text from [`render_text`].
    FormattedText,
    /// Hand the file to the platform previewer.
    Native,
}

impl PreviewKind {
    pub fn for_category(category: FileCategory) -> Self {
        match category {
            FileCategory::Json | FileCategory::Plist => PreviewKind::FormattedText,
            _ => PreviewKind::Native,
        }
    }

    pub fn for_descriptor(descriptor: &FileDescriptor) -> Self {
        Self::for_category(descriptor.category())
    }
}

/// Text to show for a file.
///
/// JSON is re-indented, keeping key order. Property lists, XML or binary,
/// are decoded and printed in the same indented JSON layout. If either does
/// not parse, the raw text is shown instead. Other files are shown as-is when
/// they are UTF-8. Directories, unreadable, oversized or binary files yield
/// `None`.
pub fn render_text(descriptor: &FileDescriptor, sink: &dyn DiagnosticSink) -> Option<String> {
    if descriptor.is_dir() {
        return None;
    }

    let report = |reason: String| {
        sink.report(Diagnostic::PreviewFailure {
            path: descriptor.path().to_path_buf(),
            reason,
        })
    };

    let bytes = match read_limited(descriptor) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            report(format!("larger than {MAX_PREVIEW_BYTES} bytes"));
            return None;
        }
        Err(e) => {
            report(e.to_string());
            return None;
        }
    };

    match descriptor.category() {
        FileCategory::Json => match pretty_json(&bytes) {
            Ok(text) => return Some(text),
            Err(e) => report(format!("invalid JSON, showing raw text: {e}")),
        },
        FileCategory::Plist => match pretty_plist(&bytes) {
            Ok(text) => return Some(text),
            Err(e) => report(format!("invalid property list, showing raw text: {e}")),
        },
        _ => {}
    }

    match String::from_utf8(bytes) {
        Ok(text) => Some(text),
        Err(_) => {
            report("not valid UTF-8 text".into());
            None
        }
    }
}

/// Read the whole file, or `None` if it exceeds the preview limit.
fn read_limited(descriptor: &FileDescriptor) -> io::Result<Option<Vec<u8>>> {
    let file = File::open(descriptor.path())?;
    let mut bytes = Vec::new();
    file.take(MAX_PREVIEW_BYTES + 1).read_to_end(&mut bytes)?;

    if bytes.len() as u64 > MAX_PREVIEW_BYTES {
        return Ok(None);
    }
    Ok(Some(bytes))
}

fn pretty_json(bytes: &[u8]) -> serde_json::Result<String> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    serde_json::to_string_pretty(&value)
}

/// Decode an XML or binary property list.
fn pretty_plist(bytes: &[u8]) -> io::Result<String> {
    let value = plist::Value::from_reader(Cursor::new(bytes)).map_err(io::Error::other)?;
    serde_json::to_string_pretty(&value).map_err(io::Error::other)
}

#[cfg(test)]
#[path = "preview_tests.rs"]
mod tests;
