//! Segmentation – normalised text → paragraphs → words.

use crate::markup::PARAGRAPH_DELIMITER;

/// One paragraph: its source text and its ordered words.
///
/// Words borrow from the normalised text. Rejoining them with single spaces
/// is the only reassembly the paginator performs, so runs of whitespace inside
/// a rejoined paragraph collapse to one space.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph<'a> {
    pub raw: &'a str,
    pub words: Vec<&'a str>,
}

impl<'a> Paragraph<'a> {
    pub fn parse(raw: &'a str) -> Self {
        Self {
            raw,
            words: words(raw),
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words joined by single spaces, with `suffix` glued to the last word.
    ///
    /// An empty paragraph yields an empty string and drops the suffix.
    pub fn join_with_suffix(&self, suffix: &str) -> String {
        let mut out = self.words.join(" ");
        if !self.words.is_empty() {
            out.push_str(suffix);
        }
        out
    }

    pub fn join(&self) -> String {
        self.join_with_suffix("")
    }
}

/// Split normalised text into paragraphs on the blank-line delimiter.
///
/// Order is preserved and empty or whitespace-only paragraphs are kept, so the
/// result always has at least one element.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split(PARAGRAPH_DELIMITER).collect()
}

/// Maximal runs of non-whitespace characters.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split and tokenise in one go.
pub fn segment(text: &str) -> Vec<Paragraph<'_>> {
    split_paragraphs(text)
        .into_iter()
        .map(Paragraph::parse)
        .collect()
}
