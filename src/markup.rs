//! Markup normalisation – turns paragraph markup and mixed line endings into
//! the single `"\n\n"` paragraph delimiter the segmenter relies on.
//!
//! Only the bare `<p>` and `</p>` tokens are recognised. Paragraph elements
//! that carry attributes (`<p class="lead">`) pass through untouched and do
//! not start a new paragraph.

/// Opening paragraph token. Replaced by a blank line.
pub const PARAGRAPH_OPEN: &str = "<p>";

/// Closing paragraph token. Removed.
pub const PARAGRAPH_CLOSE: &str = "</p>";

/// Delimiter between paragraphs after normalisation.
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

/// Normalise `content` so paragraphs are separated by a blank line.
///
/// 1. `\r\n` and lone `\r` become `\n`
/// 2. every `</p>` is dropped
/// 3. every `<p>` becomes `"\n\n"`
pub fn normalize(content: &str) -> String {
    let unix = content.replace("\r\n", "\n").replace('\r', "\n");

    if has_attributed_paragraphs(&unix) {
        log::warn!("paragraph markup with attributes is not treated as a paragraph boundary");
    }

    unix.replace(PARAGRAPH_CLOSE, "")
        .replace(PARAGRAPH_OPEN, PARAGRAPH_DELIMITER)
}

/// True when the text contains `<p ...>` openers the normaliser will ignore.
fn has_attributed_paragraphs(content: &str) -> bool {
    content.match_indices("<p").any(|(i, _)| {
        content[i + 2..]
            .chars()
            .next()
            .is_some_and(|c| c.is_whitespace())
    })
}
