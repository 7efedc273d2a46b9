use super::*;
use serial_test::serial;

fn title_of(c: &dyn Collator, name: &str) -> String {
    c.section_titles()[c.section_for(name)].clone()
}

#[test]
fn latin_has_27_sections_ending_with_other() {
    let c = UnicodeCollator::latin();
    let titles = c.section_titles();

    assert_eq!(titles.len(), 27);
    assert_eq!(titles.first().map(String::as_str), Some("A"));
    assert_eq!(titles[25], "Z");
    assert_eq!(titles.last().map(String::as_str), Some(OTHER_SECTION_TITLE));
}

#[test]
fn unicode_collator_sections() {
    let c = UnicodeCollator::latin();

    let cases: &[(&str, &str)] = &[
        ("apple", "A"),
        ("Apple", "A"),
        ("zebra.png", "Z"),
        ("Écoles", "E"),
        ("e\u{301}cole", "E"),
        ("über", "U"),
        ("Ångström", "A"),
        ("ßtraße", "S"),
        ("Æsir", "A"),
        ("øl", "O"),
        ("Łódź", "L"),
        ("_private", "P"),
        ("  spaced", "S"),
        ("(draft) notes", "D"),
        ("2024 report", "#"),
        ("Ωmega", "#"),
        ("документ", "#"),
        ("한글", "#"),
        ("!!!", "#"),
        ("", "#"),
    ];

    for (name, expected) in cases {
        let got = title_of(&c, name);
        assert_eq!(got, *expected, "section of {:?}", name);
    }
}

#[test]
fn swedish_keeps_its_extra_letters() {
    let c = UnicodeCollator::for_language("sv");
    let titles = c.section_titles();

    assert_eq!(titles.len(), 30);
    assert_eq!(&titles[26..], &["Å", "Ä", "Ö", "#"]);

    let cases: &[(&str, &str)] = &[
        ("ärlig", "Ä"),
        ("Örebro", "Ö"),
        ("ål", "Å"),
        ("école", "E"),
        ("Zorn", "Z"),
    ];
    for (name, expected) in cases {
        assert_eq!(title_of(&c, name), *expected, "sv section of {:?}", name);
    }
}

#[test]
fn danish_and_spanish_alphabets() {
    let da = UnicodeCollator::for_language("da");
    assert_eq!(title_of(&da, "Ærø"), "Æ");
    assert_eq!(title_of(&da, "øl"), "Ø");
    assert_eq!(title_of(&da, "Åbenrå"), "Å");

    let es = UnicodeCollator::for_language("ES");
    let titles = es.section_titles();
    let n = titles.iter().position(|t| t == "N").expect("N section");
    assert_eq!(titles[n + 1], "Ñ");
    assert_eq!(titles[n + 2], "O");
    assert_eq!(title_of(&es, "ñandú"), "Ñ");
    assert_eq!(title_of(&es, "nube"), "N");
}

#[test]
fn decomposed_names_use_the_composed_letter() {
    let sv = UnicodeCollator::for_language("sv");
    let es = UnicodeCollator::for_language("es");
    let latin = UnicodeCollator::latin();

    let cases: &[(&UnicodeCollator, &str, &str)] = &[
        (&sv, "A\u{308}rlig", "Ä"),
        (&sv, "  a\u{30a}l", "Å"),
        (&es, "N\u{303}andu\u{301}", "Ñ"),
        (&latin, "E\u{301}cole", "E"),
    ];
    for (collator, name, expected) in cases {
        assert_eq!(title_of(*collator, name), *expected, "section of {:?}", name);
    }

    // Both forms of a name share a section.
    assert_eq!(sv.section_for("A\u{308}rlig"), sv.section_for("\u{c4}rlig"));
}

#[test]
fn unknown_language_falls_back_to_latin() {
    let c = UnicodeCollator::for_language("xx");
    assert_eq!(c.letters(), UnicodeCollator::latin().letters());
}

#[test]
fn with_letters_uppercases_and_dedups() {
    let c = UnicodeCollator::with_letters(['a', 'B', 'A', 'c']);
    assert_eq!(c.letters(), &['A', 'B', 'C']);
    assert_eq!(c.section_titles(), &["A", "B", "C", "#"]);
    assert_eq!(title_of(&c, "delta"), "#");
}

#[test]
#[serial]
fn current_reads_collation_env() {
    for var in folio_runtime::COLLATION_ENV_VARS {
        unsafe { std::env::remove_var(var) };
    }
    unsafe { std::env::set_var("FOLIO_COLLATION", "sv_SE.UTF-8") };

    assert_eq!(UnicodeCollator::current().section_titles().len(), 30);

    unsafe { std::env::remove_var("FOLIO_COLLATION") };
    assert_eq!(UnicodeCollator::current().section_titles().len(), 27);
}

#[test]
fn ascii_collator_uses_first_character_only() {
    let c = AsciiCollator::default();

    let cases: &[(&str, &str)] = &[
        ("apple", "A"),
        ("Zulu", "Z"),
        ("école", "#"),
        ("_private", "#"),
        ("9lives", "#"),
        ("", "#"),
    ];

    for (name, expected) in cases {
        assert_eq!(title_of(&c, name), *expected, "ascii section of {:?}", name);
    }
    assert_eq!(c.section_titles().len(), 27);
}

#[test]
fn every_section_index_is_in_range() {
    let collators: Vec<Box<dyn Collator>> = vec![
        Box::new(AsciiCollator::default()),
        Box::new(UnicodeCollator::latin()),
        Box::new(UnicodeCollator::for_language("sv")),
        Box::new(UnicodeCollator::with_letters([])),
    ];
    let names = ["", "a", "Ä", "ß", "1", "😀 party", "中文", "ǅemal"];

    for c in &collators {
        for name in names {
            assert!(
                c.section_for(name) < c.section_titles().len(),
                "{name:?} out of range"
            );
        }
    }
}
