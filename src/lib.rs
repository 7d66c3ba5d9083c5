//! # autopaginate – word-budget pagination for long-form content
//!
//! Splits long posts into display pages by inserting the
//! `<!--nextpage-->` marker at paragraph boundaries. The pipeline stages are:
//!
//! 1. **Normalise** – `<p>` markup and line endings → blank-line paragraphs ([`markup`])
//! 2. **Strip** – drop markers from earlier runs ([`marker`])
//! 3. **Segment** – paragraphs → words ([`segment`])
//! 4. **Paginate** – place markers against the word budget ([`pagination`])
//! 5. **Report** – optional per-page summary ([`report`])
//!
//! [`lifecycle`] tells a host *when* to run the pipeline, and a
//! C-compatible FFI surface is exposed via the [`ffi`] module.
//!
//! ```
//! let out = autopaginate::paginate("one two three\n\nfour\n\nfive", 2).unwrap();
//! assert_eq!(out, "one two three<!--nextpage-->\n\nfour\n\nfive");
//! ```

pub mod error;
pub mod ffi;
pub mod lifecycle;
pub mod marker;
pub mod markup;
pub mod pagination;
pub mod pipeline;
pub mod report;
pub mod samples;
pub mod segment;

// Re-exports for convenience
pub use error::PaginateError;
pub use marker::{remove_markers, MARKER};
pub use pagination::{WordBudget, DEFAULT_WORDS_PER_PAGE};
pub use pipeline::{paginate, paginate_with_report, PaginateConfig};
pub use report::PaginationReport;
