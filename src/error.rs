//! Error type shared by the library, the CLI and the C bindings.

use thiserror::Error;

/// Everything that can go wrong while paginating.
///
/// Unrecognised paragraph markup is deliberately *not* an error: it is passed
/// through as plain text (see [`crate::markup`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginateError {
    /// The word budget must be a positive integer.
    #[error("invalid word budget {0}: must be greater than zero")]
    InvalidWordBudget(i64),

    /// A serialised [`crate::pipeline::PaginateConfig`] could not be read.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A serialised [`crate::report::PaginationReport`] could not be read.
    #[error("invalid report: {0}")]
    InvalidReport(String),

    /// A forced re-pagination was requested without a valid authorisation.
    #[error("forced re-pagination was not authorised")]
    UnauthorizedRepagination,
}

pub type Result<T, E = PaginateError> = std::result::Result<T, E>;
