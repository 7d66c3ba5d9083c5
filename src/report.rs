//! Pagination report – a serialisable summary of one pagination run, for
//! hosts that want to show page counts or log what changed.

use serde::{Deserialize, Serialize};

use crate::error::{PaginateError, Result};
use crate::pagination::{BreakPlan, WordBudget};
use crate::segment::Paragraph;

/// Summary of a paginated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationReport {
    /// Budget the document was paginated with.
    pub word_budget: WordBudget,
    /// Paragraphs found after normalisation, blank ones included.
    pub paragraph_count: usize,
    /// Markers in the output.
    pub marker_count: usize,
    /// Words across the whole document.
    pub total_words: usize,
    /// Ordered list of pages.
    pub pages: Vec<PageSummary>,
}

/// One page of the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub page_index: usize,
    pub paragraph_count: usize,
    pub word_count: usize,
}

impl PaginationReport {
    pub fn new(paragraphs: &[Paragraph<'_>], plan: &BreakPlan, word_budget: WordBudget) -> Self {
        let pages: Vec<PageSummary> = plan
            .page_ranges()
            .into_iter()
            .enumerate()
            .map(|(page_index, range)| PageSummary {
                page_index,
                paragraph_count: range.len(),
                word_count: paragraphs[range].iter().map(Paragraph::word_count).sum(),
            })
            .collect();

        Self {
            word_budget,
            paragraph_count: plan.paragraph_count,
            marker_count: plan.marker_count(),
            total_words: pages.iter().map(|p| p.word_count).sum(),
            pages,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Serialise to JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Deserialise from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PaginateError::InvalidReport(e.to_string()))
    }
}
