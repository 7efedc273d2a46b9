use super::*;
use std::time::{Duration, UNIX_EPOCH};

#[test]
fn to_utc_handles_errors_and_times() {
    let cases: Vec<(io::Result<SystemTime>, Option<i64>)> = vec![
        (Err(io::Error::other("unsupported")), None),
        (Ok(UNIX_EPOCH), Some(0)),
        (Ok(UNIX_EPOCH + Duration::from_secs(42)), Some(42)),
    ];

    for (input, expected) in cases {
        let shown = format!("{input:?}");
        let got = to_utc(input).map(|t| t.timestamp());
        assert_eq!(got, expected, "to_utc({shown}) should be {:?}", expected);
    }
}

#[test]
fn file_descriptor_lowercases_extension_and_classifies() {
    let f = FileDescriptor::file(PathBuf::from("/docs/A.JPG"), None);

    assert_eq!(f.display_name(), "A.JPG");
    assert_eq!(f.path(), Path::new("/docs/A.JPG"));
    assert_eq!(f.extension(), Some("jpg"));
    assert_eq!(f.category(), FileCategory::Image);
    assert!(!f.is_dir());
    assert!(f.attributes().is_none());
}

#[test]
fn file_without_extension_has_empty_extension() {
    let cases: &[(&str, &str)] = &[
        ("/docs/Makefile", ""),
        ("/docs/archive.tar.gz", "gz"),
        ("/docs/notes.", ""),
    ];

    for (path, expected) in cases {
        let f = FileDescriptor::file(PathBuf::from(path), None);
        assert_eq!(f.extension(), Some(*expected), "extension of {path}");
        assert_eq!(f.category(), FileCategory::Generic);
    }
}

#[test]
fn directory_descriptor_has_no_extension_or_attributes() {
    let d = FileDescriptor::directory(PathBuf::from("/docs/photos.zip"));

    assert_eq!(d.display_name(), "photos.zip");
    assert!(d.is_dir());
    assert_eq!(d.extension(), None);
    assert_eq!(d.category(), FileCategory::Directory);
    assert!(d.attributes().is_none());
}

#[test]
fn root_path_has_empty_display_name() {
    let d = FileDescriptor::directory(PathBuf::from("/"));
    assert_eq!(d.display_name(), "");
}

#[test]
fn attributes_from_metadata_reads_size() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let path = tmp.path().join("data.bin");
    std::fs::write(&path, b"hello world").expect("write file");

    let metadata = std::fs::metadata(&path).expect("metadata");
    let attrs = FileAttributes::from_metadata(&metadata, false);

    assert_eq!(attrs.size, 11);
    assert!(attrs.modified.is_some());
    assert!(!attrs.readonly);
    assert!(!attrs.is_symlink);
}

#[test]
fn descriptor_serializes_category_and_name() {
    let f = FileDescriptor::file(PathBuf::from("/docs/config.plist"), None);
    let value = serde_json::to_value(&f).expect("serialize");

    assert_eq!(value["display_name"], "config.plist");
    assert_eq!(value["category"], "plist");
    assert_eq!(value["extension"], "plist");
    assert_eq!(value["is_dir"], false);
}
