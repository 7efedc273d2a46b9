use std::{env, path::PathBuf};

pub const PROGRAM_NAME: &str = "folio";
pub const PROGRAM_LOG_LEVEL: &str = "FOLIO_LOG_LEVEL";

/// Comma separated list of extensions hidden from every listing.
pub const EXCLUDE_EXTENSIONS_ENV: &str = "FOLIO_EXCLUDE_EXTENSIONS";
/// Platform path list (`:` on unix, `;` on windows) of paths hidden from every listing.
pub const EXCLUDE_PATHS_ENV: &str = "FOLIO_EXCLUDE_PATHS";

/// Variables consulted, in order, to pick the section alphabet.
pub const COLLATION_ENV_VARS: &[&str] = &["FOLIO_COLLATION", "LC_ALL", "LC_COLLATE", "LANG"];

/// Default directory to browse when none is given.
///
/// Mirrors a document picker: the user's documents folder, then home, then
/// the current directory.
pub fn default_browse_root() -> PathBuf {
    dirs::document_dir()
        .filter(|p| p.is_dir())
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Extensions listed in `FOLIO_EXCLUDE_EXTENSIONS`, lowercased, leading dots stripped.
///
/// `None` when the variable is unset. An empty variable yields an empty list.
pub fn env_excluded_extensions() -> Option<Vec<String>> {
    let raw = env::var(EXCLUDE_EXTENSIONS_ENV).ok()?;
    Some(parse_extension_list(&raw))
}

/// Paths listed in `FOLIO_EXCLUDE_PATHS`. `None` when the variable is unset.
pub fn env_excluded_paths() -> Option<Vec<PathBuf>> {
    let raw = env::var_os(EXCLUDE_PATHS_ENV)?;
    Some(
        env::split_paths(&raw)
            .filter(|p| !p.as_os_str().is_empty())
            .collect(),
    )
}

pub(crate) fn parse_extension_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_start_matches('.'))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}

/// Language code used to choose a collation alphabet, e.g. `sv` for `sv_SE.UTF-8`.
///
/// Returns `None` when no variable is set or the value carries no language
/// (`C`, `POSIX`).
pub fn collation_language() -> Option<String> {
    COLLATION_ENV_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|v| !v.is_empty())
        .and_then(|v| language_from_locale(&v))
}

/// Extract the language subtag from a POSIX locale or BCP 47 tag.
pub(crate) fn language_from_locale(locale: &str) -> Option<String> {
    let lang = locale
        .split(['_', '-', '.', '@'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    match lang.as_str() {
        "" | "c" | "posix" => None,
        _ => Some(lang),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
