use unicode_normalization::UnicodeNormalization;

/// Title of the catch-all section for names that start with no alphabet letter.
pub const OTHER_SECTION_TITLE: &str = "#";

/// Decides which alphabetic section a name belongs to.
///
/// Implementations must return an index below `section_titles().len()` for
/// every input, and must be cheap to call once per listing entry.
pub trait Collator: Send + Sync {
    /// Every section title, in display order.
    fn section_titles(&self) -> &[String];

    /// Index into [`Collator::section_titles`] for `name`.
    fn section_for(&self, name: &str) -> usize;
}

const LATIN: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

fn titles_for(letters: &[char]) -> Vec<String> {
    letters
        .iter()
        .map(|c| c.to_string())
        .chain(std::iter::once(OTHER_SECTION_TITLE.to_string()))
        .collect()
}

/// A–Z plus `#`, decided by the first character only.
///
/// For hosts without any locale data. `é` or `_a` land in `#`.
#[derive(Debug, Clone)]
pub struct AsciiCollator {
    titles: Vec<String>,
}

impl Default for AsciiCollator {
    fn default() -> Self {
        Self {
            titles: titles_for(LATIN),
        }
    }
}

impl Collator for AsciiCollator {
    fn section_titles(&self) -> &[String] {
        &self.titles
    }

    fn section_for(&self, name: &str) -> usize {
        match name.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => (c.to_ascii_uppercase() as u8 - b'A') as usize,
            _ => LATIN.len(),
        }
    }
}

/// Letters that do not decompose to a base letter but read as one.
const FOLDED_LETTERS: &[(char, char)] = &[
    ('ß', 'S'),
    ('Æ', 'A'),
    ('æ', 'A'),
    ('Œ', 'O'),
    ('œ', 'O'),
    ('Ø', 'O'),
    ('ø', 'O'),
    ('Ł', 'L'),
    ('ł', 'L'),
    ('Đ', 'D'),
    ('đ', 'D'),
    ('Þ', 'T'),
    ('þ', 'T'),
];

/// Alphabet sections with diacritic folding, the default collator.
///
/// Policy for a name:
/// 1. Compose the name (NFC) and skip leading characters that are neither
///    letters nor digits. A name made only of such characters goes to `#`.
/// 2. Upper-case the first remaining character and look it up in the
///    alphabet, so letters the language treats as distinct (Swedish `Ä`)
///    get their own section.
/// 3. Otherwise strip diacritics (`É` to `E`) or fold a ligature (`Æ` to
///    `A`) and look up again.
/// 4. Anything else (digits, other scripts) goes to `#`, the last section.
///
/// The alphabet depends on the language; see [`UnicodeCollator::for_language`].
#[derive(Debug, Clone)]
pub struct UnicodeCollator {
    letters: Vec<char>,
    titles: Vec<String>,
}

impl Default for UnicodeCollator {
    fn default() -> Self {
        Self::latin()
    }
}

impl UnicodeCollator {
    /// Plain A–Z alphabet.
    pub fn latin() -> Self {
        Self::with_letters(LATIN.iter().copied())
    }

    /// Custom alphabet, in section order. Letters are stored upper-cased.
    pub fn with_letters(letters: impl IntoIterator<Item = char>) -> Self {
        let mut out: Vec<char> = Vec::new();
        for c in letters.into_iter().map(upper) {
            if !out.contains(&c) {
                out.push(c);
            }
        }
        let titles = titles_for(&out);
        Self {
            letters: out,
            titles,
        }
    }

    /// Alphabet for a language subtag such as `sv` or `es`.
    ///
    /// | language           | alphabet             |
    /// |--------------------|----------------------|
    /// | `sv`, `fi`         | A–Z, Å, Ä, Ö         |
    /// | `da`, `nb`, `nn`, `no` | A–Z, Æ, Ø, Å     |
    /// | `es`               | A–N, Ñ, O–Z          |
    /// | anything else      | A–Z                  |
    pub fn for_language(language: &str) -> Self {
        match language.to_ascii_lowercase().as_str() {
            "sv" | "fi" => Self::with_letters(LATIN.iter().copied().chain(['Å', 'Ä', 'Ö'])),
            "da" | "nb" | "nn" | "no" => {
                Self::with_letters(LATIN.iter().copied().chain(['Æ', 'Ø', 'Å']))
            }
            "es" => {
                let n = LATIN.iter().position(|&c| c == 'N').map_or(LATIN.len(), |i| i + 1);
                Self::with_letters(
                    LATIN[..n]
                        .iter()
                        .copied()
                        .chain(['Ñ'])
                        .chain(LATIN[n..].iter().copied()),
                )
            }
            _ => Self::latin(),
        }
    }

    /// Alphabet for the language named by the environment
    /// (`FOLIO_COLLATION`, `LC_ALL`, `LC_COLLATE`, `LANG`).
    pub fn current() -> Self {
        match folio_runtime::collation_language() {
            Some(lang) => Self::for_language(&lang),
            None => Self::latin(),
        }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    fn position(&self, c: char) -> Option<usize> {
        self.letters.iter().position(|&l| l == c)
    }
}

impl Collator for UnicodeCollator {
    fn section_titles(&self) -> &[String] {
        &self.titles
    }

    fn section_for(&self, name: &str) -> usize {
        let other = self.letters.len();

        // Compose first so a base letter plus combining mark is read as one letter.
        let Some(first) = name.nfc().find(|c| c.is_alphanumeric()) else {
            return other;
        };

        if let Some(i) = self.position(upper(first)) {
            return i;
        }

        fold(first)
            .and_then(|base| self.position(base))
            .unwrap_or(other)
    }
}

/// Single-character upper case; characters whose upper case is longer (ß) stay as is.
fn upper(c: char) -> char {
    let mut it = c.to_uppercase();
    match (it.next(), it.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Base letter of `c` with diacritics removed, upper-cased.
fn fold(c: char) -> Option<char> {
    if let Some(&(_, base)) = FOLDED_LETTERS.iter().find(|(from, _)| *from == c) {
        return Some(base);
    }

    let base = std::iter::once(c).nfd().next()?;
    (base != c).then(|| upper(base))
}

#[cfg(test)]
#[path = "collation_tests.rs"]
mod tests;
