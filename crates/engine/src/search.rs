use folio_fs::FileDescriptor;
use unicode_normalization::UnicodeNormalization;

/// Files whose display name contains `query`, ignoring case.
///
/// The result keeps input order. An empty query returns every file. Both
/// sides are composed (NFC), so `café` typed on a keyboard finds a name
/// stored with a combining accent. Case folding is per-character
/// lower-casing: ASCII names compare byte-wise, other names go through
/// `str::to_lowercase`, so `STRASSE` does not match `straße`.
pub fn filter(files: &[FileDescriptor], query: &str) -> Vec<FileDescriptor> {
    if query.is_empty() {
        return files.to_vec();
    }

    let needle: String = query.nfc().collect::<String>().to_lowercase();

    files
        .iter()
        .filter(|f| contains_lowercase(f.display_name(), &needle))
        .cloned()
        .collect()
}

/// Case-insensitive substring match optimized for ASCII haystacks.
///
/// `needle_lower` must already be lowercased and NFC-composed.
#[inline]
pub fn contains_lowercase(haystack: &str, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }

    if haystack.is_ascii() {
        let h = haystack.as_bytes();
        let n = needle_lower.as_bytes();

        if n.len() > h.len() {
            return false;
        }

        h.windows(n.len())
            .any(|w| w.iter().zip(n).all(|(hb, nb)| hb.to_ascii_lowercase() == *nb))
    } else {
        haystack
            .nfc()
            .collect::<String>()
            .to_lowercase()
            .contains(needle_lower)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
