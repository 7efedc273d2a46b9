use super::*;

use crate::printer::{ColorChoice, HumanPrinter, PrinterConfig};
use folio_engine::AsciiCollator;
use folio_fs::{ExclusionConfig, Scanner};
use std::{
    fs::{create_dir, write},
    io,
    sync::Arc,
};

fn sample_tree() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    write(root.join("b.txt"), b"b").expect("write b.txt");
    write(root.join("A.JPG"), b"jpeg").expect("write A.JPG");
    write(root.join(".hidden"), b"h").expect("write .hidden");
    create_dir(root.join("sub")).expect("create sub");

    tmp
}

fn render(session: &BrowseSession, flat: bool) -> String {
    let cfg = PrinterConfig {
        color: ColorChoice::Never,
        show_summary: false,
        ..PrinterConfig::default()
    };
    let mut out = Vec::new();
    {
        let mut printer = HumanPrinter::new(&mut out, io::sink(), cfg);
        print_session(session, flat, &mut printer).expect("print session");
    }
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn sections_list_only_non_empty_headers() {
    let tmp = sample_tree();
    let session = BrowseSession::open(
        tmp.path(),
        Scanner::new(),
        Arc::new(AsciiCollator::default()),
    );

    assert_eq!(
        render(&session, false),
        "A\n  image  A.JPG\n\nB\n  file   b.txt\n\nS\n  folder sub/\n"
    );
}

#[test]
fn flat_listing_skips_headers_and_honors_exclusions() {
    let tmp = sample_tree();
    let scanner = Scanner::new().with_exclusions(ExclusionConfig::new().with_extensions(["txt"]));
    let session = BrowseSession::open(tmp.path(), scanner, Arc::new(AsciiCollator::default()));

    assert_eq!(render(&session, true), "image  A.JPG\nfolder sub/\n");
}
