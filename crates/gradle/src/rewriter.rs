use gms_harmonize_core::{LibraryEntry, VersionLabel};

use crate::extractor::Extraction;

/// Rebuild the properties file with every harmonizable declaration moved to `version`.
///
/// Pass-through lines come first in their original order, followed by all declarations
/// in extraction order.
#[must_use]
pub fn rewrite(extraction: &Extraction, version: &VersionLabel) -> String {
    let declarations = extraction
        .entries
        .iter()
        .map(|entry| entry.to_line(entry.is_harmonizable().then_some(version)));
    let mut content = extraction
        .passthrough
        .iter()
        .cloned()
        .chain(declarations)
        .collect::<Vec<_>>()
        .join(extraction.line_ending());
    if extraction.trailing_newline {
        content.push_str(extraction.line_ending());
    }
    content
}

/// Harmonizable entries whose version differs from `version`.
pub fn changed_entries<'a>(
    extraction: &'a Extraction,
    version: &'a VersionLabel,
) -> impl Iterator<Item = &'a LibraryEntry> {
    extraction
        .harmonizable()
        .filter(move |entry| entry.version() != version)
}
