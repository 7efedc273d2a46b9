use folio_fs::FileDescriptor;

use crate::collation::{Collator, OTHER_SECTION_TITLE};

/// A listing split into alphabetic sections.
///
/// There is one section per collator title, empty ones included, so section
/// numbers line up with the collator's index titles. Within a section files
/// keep the order they were given in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTable {
    titles: Vec<String>,
    sections: Vec<Vec<FileDescriptor>>,
}

/// Partition `files` into the collator's sections.
///
/// Every file lands in exactly one section. A misbehaving collator that
/// returns an out-of-range index sends the file to the last section.
pub fn index<C: Collator + ?Sized>(files: &[FileDescriptor], collator: &C) -> SectionTable {
    let mut titles = collator.section_titles().to_vec();
    if titles.is_empty() {
        titles.push(OTHER_SECTION_TITLE.to_string());
    }

    let last = titles.len() - 1;
    let mut sections = vec![Vec::new(); titles.len()];

    for file in files {
        let section = collator.section_for(file.display_name()).min(last);
        sections[section].push(file.clone());
    }

    SectionTable { titles, sections }
}

impl SectionTable {
    /// Every section title, including those of empty sections.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of files across all sections.
    pub fn file_count(&self) -> usize {
        self.sections.iter().map(Vec::len).sum()
    }

    pub fn section(&self, section: usize) -> Option<&[FileDescriptor]> {
        self.sections.get(section).map(Vec::as_slice)
    }

    pub fn rows_in_section(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, Vec::len)
    }

    /// Header to display above a section; empty sections get none.
    pub fn header_title(&self, section: usize) -> Option<&str> {
        match self.sections.get(section) {
            Some(files) if !files.is_empty() => Some(self.titles[section].as_str()),
            _ => None,
        }
    }

    pub fn file_at(&self, section: usize, row: usize) -> Option<&FileDescriptor> {
        self.sections.get(section)?.get(row)
    }

    /// Section a scrubber title jumps to.
    pub fn section_for_title(&self, title: &str) -> Option<usize> {
        self.titles.iter().position(|t| t == title)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FileDescriptor])> {
        self.titles
            .iter()
            .map(String::as_str)
            .zip(self.sections.iter().map(Vec::as_slice))
    }

    /// Sections that have at least one file, in order.
    pub fn non_empty(&self) -> impl Iterator<Item = (&str, &[FileDescriptor])> {
        self.iter().filter(|(_, files)| !files.is_empty())
    }
}

#[cfg(test)]
#[path = "sections_tests.rs"]
mod tests;
