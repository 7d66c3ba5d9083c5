//! Pagination – decides where page-break markers go and stitches the
//! paragraphs back together.
//!
//! Handles:
//! - Running word count across paragraphs, reset after every break
//! - Breaks only at a paragraph's trailing edge, never inside one
//! - No break after the last paragraph that has words

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{PaginateError, Result};
use crate::markup::PARAGRAPH_DELIMITER;
use crate::marker::MARKER;
use crate::segment::Paragraph;

/// Words per page used when the host has no preference of its own.
pub const DEFAULT_WORDS_PER_PAGE: usize = 700;

/// Validated, strictly positive number of words per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct WordBudget(usize);

impl WordBudget {
    pub fn new(words: i64) -> Result<Self> {
        if words <= 0 {
            return Err(PaginateError::InvalidWordBudget(words));
        }
        usize::try_from(words)
            .map(Self)
            .map_err(|_| PaginateError::InvalidWordBudget(words))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for WordBudget {
    fn default() -> Self {
        Self(DEFAULT_WORDS_PER_PAGE)
    }
}

impl TryFrom<i64> for WordBudget {
    type Error = PaginateError;

    fn try_from(words: i64) -> Result<Self> {
        Self::new(words)
    }
}

impl From<WordBudget> for i64 {
    fn from(budget: WordBudget) -> Self {
        i64::try_from(budget.0).unwrap_or(i64::MAX)
    }
}

impl fmt::Display for WordBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Paragraph indices that end a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakPlan {
    /// Ascending indices of paragraphs that receive a trailing marker.
    pub breaks: Vec<usize>,
    /// Number of paragraphs the plan was made for.
    pub paragraph_count: usize,
}

impl BreakPlan {
    pub fn breaks_after(&self, index: usize) -> bool {
        self.breaks.binary_search(&index).is_ok()
    }

    pub fn marker_count(&self) -> usize {
        self.breaks.len()
    }

    pub fn page_count(&self) -> usize {
        self.breaks.len() + 1
    }

    /// Paragraph index range of every page, in order.
    pub fn page_ranges(&self) -> Vec<Range<usize>> {
        let mut ranges = Vec::with_capacity(self.page_count());
        let mut start = 0;
        for &b in &self.breaks {
            ranges.push(start..b + 1);
            start = b + 1;
        }
        ranges.push(start..self.paragraph_count);
        ranges
    }
}

/// Decide which paragraphs end a page.
///
/// Word counts accumulate paragraph by paragraph. As soon as the running total
/// is strictly greater than `budget`, the current paragraph ends the page and
/// the total restarts at zero. A single long paragraph is never split, so a
/// page may overshoot the budget by any amount.
///
/// The last paragraph is never examined, and neither is the last paragraph
/// that contains words (blank paragraphs after it have nothing to separate).
pub fn plan_breaks(word_counts: &[usize], budget: WordBudget) -> BreakPlan {
    let paragraph_count = word_counts.len();
    let last_with_words = word_counts.iter().rposition(|&n| n > 0).unwrap_or(0);
    let eligible = last_with_words.min(paragraph_count.saturating_sub(1));

    let mut breaks = Vec::new();
    let mut running = 0usize;
    for (index, &count) in word_counts.iter().enumerate().take(eligible) {
        running += count;
        log::trace!("paragraph {index}: {count} words, running total {running}");
        if running > budget.get() {
            breaks.push(index);
            running = 0;
        }
    }

    log::debug!(
        "planned {} break(s) over {} paragraph(s) at {} words per page",
        breaks.len(),
        paragraph_count,
        budget
    );

    BreakPlan {
        breaks,
        paragraph_count,
    }
}

/// Reassemble paragraphs, appending [`MARKER`] to the last word of every
/// paragraph in `plan`.
///
/// Every paragraph but the last is rejoined from its words; the last one is
/// emitted exactly as it was given.
pub fn apply_breaks(paragraphs: &[Paragraph<'_>], plan: &BreakPlan) -> String {
    let Some(last) = paragraphs.len().checked_sub(1) else {
        return String::new();
    };

    paragraphs
        .iter()
        .enumerate()
        .map(|(index, para)| {
            if index == last {
                para.raw.to_string()
            } else if plan.breaks_after(index) {
                para.join_with_suffix(MARKER)
            } else {
                para.join()
            }
        })
        .collect::<Vec<_>>()
        .join(PARAGRAPH_DELIMITER)
}
