use super::*;

#[test]
fn classify_table_cases() {
    let cases: &[(Option<&str>, bool, FileCategory)] = &[
        (Some("JPG"), false, FileCategory::Image),
        (Some("jpg"), false, FileCategory::Image),
        (Some("Png"), false, FileCategory::Image),
        (Some("gif"), false, FileCategory::Image),
        (Some("pdf"), false, FileCategory::Pdf),
        (Some("ZIP"), false, FileCategory::Zip),
        (Some("json"), false, FileCategory::Json),
        (Some("PList"), false, FileCategory::Plist),
        (Some("unknownext"), false, FileCategory::Generic),
        (Some("jpeg"), false, FileCategory::Generic),
        (Some(""), false, FileCategory::Generic),
        (None, false, FileCategory::Generic),
        (None, true, FileCategory::Directory),
        (Some("png"), true, FileCategory::Directory),
    ];

    for (ext, is_dir, expected) in cases {
        let got = classify(*ext, *is_dir);
        assert_eq!(
            got, *expected,
            "classify({:?}, {}) should be {:?}, got {:?}",
            ext, is_dir, expected, got
        );
    }
}

#[test]
fn icon_keys_group_text_formats_with_generic() {
    assert_eq!(FileCategory::Directory.icon_key(), "folder");
    assert_eq!(FileCategory::Image.icon_key(), "image");
    assert_eq!(FileCategory::Json.icon_key(), "file");
    assert_eq!(FileCategory::Plist.icon_key(), "file");
    assert_eq!(FileCategory::Generic.icon_key(), "file");
}

#[test]
fn serializes_as_lowercase_name() {
    let json = serde_json::to_string(&FileCategory::Plist).expect("serialize");
    assert_eq!(json, "\"plist\"");
}
