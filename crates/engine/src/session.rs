use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use folio_fs::{FileDescriptor, PreviewKind, Scanner};
use log::debug;

use crate::{
    collation::Collator,
    search::filter,
    sections::{SectionTable, index},
};

/// What selecting a row leads to.
#[derive(Debug)]
pub enum Selection {
    /// A directory was picked; browsing continues in a fresh session.
    Directory(BrowseSession),
    /// A file was picked, with the previewer it should go to.
    File {
        descriptor: FileDescriptor,
        preview: PreviewKind,
    },
}

#[derive(Debug, Clone)]
struct SearchState {
    query: String,
    results: Vec<FileDescriptor>,
}

/// One open directory.
///
/// Holds the flat listing and its section table. Rows are addressed by
/// `(section, row)`; while a search is active there is a single section
/// holding the matches instead of the alphabetic sections.
pub struct BrowseSession {
    directory: PathBuf,
    title: String,
    files: Vec<FileDescriptor>,
    sections: SectionTable,
    search: Option<SearchState>,
    scanner: Scanner,
    collator: Arc<dyn Collator>,
}

impl std::fmt::Debug for BrowseSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowseSession")
            .field("directory", &self.directory)
            .field("files", &self.files.len())
            .field("searching", &self.search.is_some())
            .finish_non_exhaustive()
    }
}

impl BrowseSession {
    pub fn open(
        directory: impl Into<PathBuf>,
        scanner: Scanner,
        collator: Arc<dyn Collator>,
    ) -> Self {
        let directory = directory.into();
        let files = scanner.scan(&directory);
        let sections = index(&files, collator.as_ref());
        debug!(
            "[session] opened {:?}: {} files, {} sections",
            directory,
            files.len(),
            sections.section_count()
        );

        Self {
            title: title_for(&directory),
            directory,
            files,
            sections,
            search: None,
            scanner,
            collator,
        }
    }

    /// Rescan the directory. An active search is re-run on the new listing.
    pub fn reload(&mut self) {
        self.files = self.scanner.scan(&self.directory);
        self.sections = index(&self.files, self.collator.as_ref());
        if let Some(state) = self.search.take() {
            self.search(&state.query);
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Last component of the directory, for a navigation bar.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The full sorted listing.
    pub fn files(&self) -> &[FileDescriptor] {
        &self.files
    }

    pub fn sections(&self) -> &SectionTable {
        &self.sections
    }

    /// Enter search mode (or update the query) and return the matches.
    pub fn search(&mut self, query: &str) -> &[FileDescriptor] {
        let results = filter(&self.files, query);
        let state = self.search.insert(SearchState {
            query: query.to_string(),
            results,
        });
        &state.results
    }

    pub fn clear_search(&mut self) {
        self.search = None;
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }

    pub fn query(&self) -> Option<&str> {
        self.search.as_ref().map(|s| s.query.as_str())
    }

    pub fn search_results(&self) -> Option<&[FileDescriptor]> {
        self.search.as_ref().map(|s| s.results.as_slice())
    }

    pub fn number_of_sections(&self) -> usize {
        match &self.search {
            Some(_) => 1,
            None => self.sections.section_count(),
        }
    }

    pub fn rows_in_section(&self, section: usize) -> usize {
        match &self.search {
            Some(state) if section == 0 => state.results.len(),
            Some(_) => 0,
            None => self.sections.rows_in_section(section),
        }
    }

    /// Section header; none in search mode or for empty sections.
    pub fn header_title(&self, section: usize) -> Option<&str> {
        match self.search {
            Some(_) => None,
            None => self.sections.header_title(section),
        }
    }

    /// Titles for a section scrubber; none in search mode.
    pub fn section_index_titles(&self) -> Option<&[String]> {
        match self.search {
            Some(_) => None,
            None => Some(self.sections.titles()),
        }
    }

    pub fn file_at(&self, section: usize, row: usize) -> Option<&FileDescriptor> {
        match &self.search {
            Some(state) if section == 0 => state.results.get(row),
            Some(_) => None,
            None => self.sections.file_at(section, row),
        }
    }

    /// Act on a row: descend into a directory or route a file to a previewer.
    ///
    /// Selecting ends search mode. Returns `None` when no row is there.
    pub fn select(&mut self, section: usize, row: usize) -> Option<Selection> {
        let picked = self.file_at(section, row)?.clone();
        self.search = None;

        if picked.is_dir() {
            let child = BrowseSession::open(
                picked.path(),
                self.scanner.clone(),
                Arc::clone(&self.collator),
            );
            return Some(Selection::Directory(child));
        }

        let preview = PreviewKind::for_descriptor(&picked);
        Some(Selection::File {
            descriptor: picked,
            preview,
        })
    }
}

fn title_for(directory: &Path) -> String {
    directory
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| directory.display().to_string())
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
