//! The page-break marker and helpers for finding and stripping it.

/// Reserved token that splits a document into display pages.
pub const MARKER: &str = "<!--nextpage-->";

/// Remove every occurrence of [`MARKER`] from `content`.
///
/// Removal repeats until no marker is left, so text such as
/// `<!--next<!--nextpage-->page-->` cannot leave a marker behind and the
/// operation is idempotent.
pub fn remove_markers(content: &str) -> String {
    let mut out = content.replace(MARKER, "");
    while out.contains(MARKER) {
        out = out.replace(MARKER, "");
    }
    out
}

/// Number of markers in `content`.
pub fn count_markers(content: &str) -> usize {
    content.matches(MARKER).count()
}

/// True if `content` already carries at least one marker.
pub fn is_paginated(content: &str) -> bool {
    content.contains(MARKER)
}

/// Split paginated content into its pages, markers removed.
pub fn pages(content: &str) -> Vec<&str> {
    content.split(MARKER).collect()
}
