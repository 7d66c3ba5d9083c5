//! Pipeline – ties together marker removal, normalisation, segmentation and
//! break placement into a single function call.

use serde::{Deserialize, Serialize};

use crate::error::{PaginateError, Result};
use crate::marker::remove_markers;
use crate::markup::normalize;
use crate::pagination::{apply_breaks, plan_breaks, WordBudget, DEFAULT_WORDS_PER_PAGE};
use crate::report::PaginationReport;
use crate::segment::{segment, Paragraph};

/// Configuration for a pagination run.
///
/// The budget is kept as a raw integer so a config read from JSON can carry a
/// bad value; it is checked by [`PaginateConfig::validate`] before any work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginateConfig {
    /// Preferred words per page (default: 700).
    #[serde(default = "PaginateConfig::default_word_budget")]
    pub word_budget: i64,
}

impl Default for PaginateConfig {
    fn default() -> Self {
        Self {
            word_budget: Self::default_word_budget(),
        }
    }
}

impl PaginateConfig {
    pub fn with_word_budget(word_budget: i64) -> Self {
        Self { word_budget }
    }

    fn default_word_budget() -> i64 {
        DEFAULT_WORDS_PER_PAGE as i64
    }

    /// Check the config and return the budget it describes.
    pub fn validate(&self) -> Result<WordBudget> {
        WordBudget::new(self.word_budget)
    }

    /// Serialise to JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Deserialise from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PaginateError::InvalidConfig(e.to_string()))
    }
}

/// Full pipeline: content → content with page-break markers.
///
/// Existing markers are stripped first, so the result depends only on the
/// content and the budget, and running it again on its own output with the
/// same budget changes nothing.
pub fn paginate(content: &str, word_budget: i64) -> Result<String> {
    let budget = WordBudget::new(word_budget)?;
    Ok(run(content, budget).0)
}

/// Like [`paginate`], and also return a [`PaginationReport`].
pub fn paginate_with_report(
    content: &str,
    config: &PaginateConfig,
) -> Result<(String, PaginationReport)> {
    let budget = config.validate()?;
    Ok(run(content, budget))
}

/// Normalise and strip markers until neither step changes the text.
///
/// Stripping a marker can join the pieces of a `<p>` or `</p>` token, and
/// dropping `</p>` can join the pieces of a marker, so one pass of each is not
/// enough. Neither step lengthens the text, so the loop terminates.
pub fn prepare(content: &str) -> String {
    let mut text = remove_markers(&normalize(content));
    loop {
        let next = remove_markers(&normalize(&text));
        if next == text {
            return text;
        }
        text = next;
    }
}

fn run(content: &str, budget: WordBudget) -> (String, PaginationReport) {
    let text = prepare(content);

    let paragraphs = segment(&text);
    let counts: Vec<usize> = paragraphs.iter().map(Paragraph::word_count).collect();

    let plan = plan_breaks(&counts, budget);
    let output = apply_breaks(&paragraphs, &plan);
    let report = PaginationReport::new(&paragraphs, &plan, budget);

    log::info!(
        "paginated {} word(s) into {} page(s)",
        report.total_words,
        report.page_count()
    );

    (output, report)
}

/// Strip every page-break marker without re-paginating.
pub fn unpaginate(content: &str) -> String {
    remove_markers(content)
}
