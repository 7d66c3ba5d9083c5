//! Property-Based Tests
//!
//! Tests using property-based testing (proptest) to verify invariants:
//! - Marker count is bounded by the number of paragraphs
//! - Output never ends with a marker
//! - Marker removal is idempotent
//! - Pagination never drops or duplicates words
//! - A larger budget never produces more markers
//! - Re-pagination with the same budget is stable, even when stripping
//!   markers or `</p>` rebuilds paragraph markup

use autopaginate::marker::{count_markers, remove_markers, MARKER};
use autopaginate::pipeline::{paginate, prepare};
use autopaginate::segment::{split_paragraphs, words};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// A paragraph of short lowercase words with irregular spacing.
fn paragraph() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-z]{1,6}", "[ \t\n]{0,1} {1,2}"), 0..12).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(word, gap)| format!("{word}{gap}"))
            .collect::<String>()
    })
}

/// Paragraph markup for one document.
#[derive(Debug, Clone, Copy)]
enum Wrapping {
    Plain,
    Html,
    /// `<p>`/`</p>` with a marker inside the tag, joined only once it is stripped.
    MarkerInTag,
    /// `<p>`/`</p>` hidden inside a `</p>`, joined only once that is dropped.
    TagInTag,
}

fn wrapping() -> impl Strategy<Value = Wrapping> {
    prop_oneof![
        Just(Wrapping::Plain),
        Just(Wrapping::Html),
        Just(Wrapping::MarkerInTag),
        Just(Wrapping::TagInTag),
    ]
}

/// A document of 1..8 paragraphs in one of several markup styles,
/// optionally carrying stale markers.
fn document() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(paragraph(), 1..8),
        wrapping(),
        any::<bool>(),
    )
        .prop_map(|(paras, wrapping, stale)| {
            let paras: Vec<String> = if stale {
                paras.into_iter().map(|p| format!("{p}{MARKER}")).collect()
            } else {
                paras
            };
            let (open, close) = match wrapping {
                Wrapping::Plain => return paras.join("\n\n"),
                Wrapping::Html => ("<p>", "</p>"),
                Wrapping::MarkerInTag => ("<<!--nextpage-->p>", "</p<!--nextpage-->>"),
                Wrapping::TagInTag => ("<</p>p>", "<</p>/p>"),
            };
            paras
                .iter()
                .map(|p| format!("{open}{p}{close}\r\n"))
                .collect::<String>()
        })
}

fn paragraph_count(content: &str) -> usize {
    split_paragraphs(&prepare(content)).len()
}

// ============================================================================
// Properties
// ============================================================================

/// Property: at most P-1 markers, none for a single paragraph
#[test]
fn proptest_marker_count_bound() {
    proptest!(|(content in document(), budget in 1i64..40)| {
        let out = paginate(&content, budget).unwrap();
        let p = paragraph_count(&content);
        prop_assert!(count_markers(&out) <= p.saturating_sub(1));
    });
}

/// Property: the last non-whitespace content is never a marker
#[test]
fn proptest_no_trailing_marker() {
    proptest!(|(content in document(), budget in 1i64..40)| {
        let out = paginate(&content, budget).unwrap();
        prop_assert!(!out.trim_end().ends_with(MARKER));
    });
}

/// Property: removing markers twice equals removing them once
#[test]
fn proptest_removal_idempotent() {
    proptest!(|(content in document(), budget in 1i64..40)| {
        let once = remove_markers(&paginate(&content, budget).unwrap());
        prop_assert_eq!(remove_markers(&once), once.clone());
        prop_assert!(!once.contains(MARKER));
    });
}

/// Property: the word sequence survives pagination
#[test]
fn proptest_content_preserved() {
    proptest!(|(content in document(), budget in 1i64..40)| {
        let out = remove_markers(&paginate(&content, budget).unwrap());
        let expected = prepare(&content);
        prop_assert_eq!(words(&out), words(&expected));
    });
}

/// Property: a larger budget never yields more markers
#[test]
fn proptest_monotonic_budget() {
    proptest!(|(content in document(), a in 1i64..40, b in 1i64..40)| {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        let tight = count_markers(&paginate(&content, small).unwrap());
        let loose = count_markers(&paginate(&content, large).unwrap());
        prop_assert!(loose <= tight);
    });
}

/// Property: paginating paginated output with the same budget changes nothing
#[test]
fn proptest_repagination_stable() {
    proptest!(|(content in document(), budget in 1i64..40)| {
        let first = paginate(&content, budget).unwrap();
        let second = paginate(&first, budget).unwrap();
        prop_assert_eq!(first, second);
    });
}

/// Property: non-positive budgets are always rejected
#[test]
fn proptest_non_positive_budget_rejected() {
    proptest!(|(content in document(), budget in i64::MIN..=0)| {
        prop_assert!(paginate(&content, budget).is_err());
    });
}
