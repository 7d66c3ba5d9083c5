//! Publish lifecycle – decides *when* a host should paginate a document.
//!
//! The host feeds its own events in (status transitions, saves, forced
//! re-pagination requests) and gets back an [`Action`]. Nothing here touches
//! storage: the host reads content before and writes the result after, using
//! [`Record::writable_target`] to find the record that owns the content.
//!
//! ```text
//!   Unpublished ──publish──▶ PublishedUnpaginated ──save──▶ PublishedPaginated
//!        ▲                                                       │
//!        └───────────────────────── unpublish ───────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{PaginateError, Result};
use crate::marker::is_paginated;
use crate::pipeline::{paginate_with_report, PaginateConfig};
use crate::report::PaginationReport;

/// Where a document sits in its publish lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishState {
    #[default]
    Unpublished,
    PublishedUnpaginated,
    PublishedPaginated,
}

/// Host-side publish status of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Draft,
    Pending,
    Private,
    Scheduled,
    Published,
}

impl PostStatus {
    pub fn is_published(self) -> bool {
        self == PostStatus::Published
    }
}

/// Whether a forced re-pagination request passed the host's request check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Authorization {
    Granted,
    Denied,
}

/// Events the host reports, in the order they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    /// The document's status changed. `already_paginated` is whether its
    /// current content carries a marker.
    Transition {
        from: PostStatus,
        to: PostStatus,
        already_paginated: bool,
    },
    /// The document was saved. `force` is present when the editor asked for
    /// re-pagination explicitly.
    Saved { force: Option<Authorization> },
}

/// What the host should do in response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Re-paginate the saved content and write it back.
    Paginate,
    /// Nothing to do.
    Skip,
}

/// Per-document state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Autopaginator {
    state: PublishState,
    pending: bool,
}

impl Autopaginator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a document's current status and content.
    pub fn for_document(status: PostStatus, content: &str) -> Self {
        let state = match (status.is_published(), is_paginated(content)) {
            (false, _) => PublishState::Unpublished,
            (true, false) => PublishState::PublishedUnpaginated,
            (true, true) => PublishState::PublishedPaginated,
        };
        Self {
            state,
            pending: false,
        }
    }

    pub fn state(&self) -> PublishState {
        self.state
    }

    /// True once a transition has scheduled pagination for the next save.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Feed one host event through the machine.
    ///
    /// A forced request with [`Authorization::Denied`] is rejected with
    /// [`PaginateError::UnauthorizedRepagination`] and leaves the state as is.
    pub fn handle(&mut self, event: HostEvent) -> Result<Action> {
        match event {
            HostEvent::Transition {
                from,
                to,
                already_paginated,
            } => {
                self.on_transition(from, to, already_paginated);
                Ok(Action::Skip)
            }
            HostEvent::Saved { force } => self.on_save(force),
        }
    }

    fn on_transition(&mut self, from: PostStatus, to: PostStatus, already_paginated: bool) {
        if !to.is_published() {
            self.state = PublishState::Unpublished;
            self.pending = false;
            return;
        }
        if from.is_published() {
            return;
        }
        if already_paginated {
            log::debug!("published content already carries markers, leaving it alone");
            self.state = PublishState::PublishedPaginated;
        } else {
            self.state = PublishState::PublishedUnpaginated;
            self.pending = true;
        }
    }

    fn on_save(&mut self, force: Option<Authorization>) -> Result<Action> {
        match force {
            Some(Authorization::Granted) => self.pending = true,
            Some(Authorization::Denied) => {
                log::warn!("rejected forced re-pagination without a valid authorisation");
                return Err(PaginateError::UnauthorizedRepagination);
            }
            None => {}
        }

        if !self.pending {
            return Ok(Action::Skip);
        }

        self.pending = false;
        if self.state == PublishState::PublishedUnpaginated {
            self.state = PublishState::PublishedPaginated;
        }
        Ok(Action::Paginate)
    }
}

/// Apply an [`Action`] to some content.
///
/// Returns `None` for [`Action::Skip`].
pub fn perform(
    action: Action,
    content: &str,
    config: &PaginateConfig,
) -> Result<Option<(String, PaginationReport)>> {
    match action {
        Action::Skip => Ok(None),
        Action::Paginate => paginate_with_report(content, config).map(Some),
    }
}

/// Whether a stored record is the document itself or a revision of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Document,
    Revision,
}

/// Minimal view of a stored record, enough to find where content belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub parent: Option<u64>,
    pub kind: RecordKind,
}

impl Record {
    /// Id of the record paginated content should be written to: a revision's
    /// parent, otherwise the record itself.
    pub fn writable_target(&self) -> u64 {
        match (self.kind, self.parent) {
            (RecordKind::Revision, Some(parent)) => parent,
            _ => self.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publish(already_paginated: bool) -> HostEvent {
        HostEvent::Transition {
            from: PostStatus::Draft,
            to: PostStatus::Published,
            already_paginated,
        }
    }

    const SAVE: HostEvent = HostEvent::Saved { force: None };

    #[test]
    fn publishing_schedules_pagination_on_save() {
        let mut ap = Autopaginator::new();
        assert_eq!(ap.handle(publish(false)).unwrap(), Action::Skip);
        assert!(ap.is_pending());
        assert_eq!(ap.state(), PublishState::PublishedUnpaginated);

        assert_eq!(ap.handle(SAVE).unwrap(), Action::Paginate);
        assert_eq!(ap.state(), PublishState::PublishedPaginated);
        assert_eq!(ap.handle(SAVE).unwrap(), Action::Skip);
    }

    #[test]
    fn already_paginated_content_is_left_alone() {
        let mut ap = Autopaginator::new();
        ap.handle(publish(true)).unwrap();
        assert_eq!(ap.state(), PublishState::PublishedPaginated);
        assert_eq!(ap.handle(SAVE).unwrap(), Action::Skip);
    }

    #[test]
    fn republishing_a_published_document_does_nothing() {
        let mut ap = Autopaginator::for_document(PostStatus::Published, "text");
        let event = HostEvent::Transition {
            from: PostStatus::Published,
            to: PostStatus::Published,
            already_paginated: false,
        };
        ap.handle(event).unwrap();
        assert!(!ap.is_pending());
        assert_eq!(ap.handle(SAVE).unwrap(), Action::Skip);
    }

    #[test]
    fn unpublishing_resets_the_machine() {
        let mut ap = Autopaginator::new();
        ap.handle(publish(false)).unwrap();
        ap.handle(HostEvent::Transition {
            from: PostStatus::Published,
            to: PostStatus::Draft,
            already_paginated: false,
        })
        .unwrap();
        assert_eq!(ap.state(), PublishState::Unpublished);
        assert_eq!(ap.handle(SAVE).unwrap(), Action::Skip);
    }

    #[test]
    fn forced_repagination_needs_authorisation() {
        let mut ap = Autopaginator::for_document(PostStatus::Published, "a<!--nextpage-->b");
        assert_eq!(ap.state(), PublishState::PublishedPaginated);

        let denied = HostEvent::Saved {
            force: Some(Authorization::Denied),
        };
        assert_eq!(ap.handle(denied), Err(PaginateError::UnauthorizedRepagination));

        let granted = HostEvent::Saved {
            force: Some(Authorization::Granted),
        };
        assert_eq!(ap.handle(granted).unwrap(), Action::Paginate);
        assert_eq!(ap.state(), PublishState::PublishedPaginated);
    }

    #[test]
    fn forced_repagination_works_on_drafts() {
        let mut ap = Autopaginator::for_document(PostStatus::Draft, "text");
        let granted = HostEvent::Saved {
            force: Some(Authorization::Granted),
        };
        assert_eq!(ap.handle(granted).unwrap(), Action::Paginate);
        assert_eq!(ap.state(), PublishState::Unpublished);
    }

    #[test]
    fn perform_runs_the_pipeline() {
        let config = PaginateConfig::with_word_budget(1);
        assert!(perform(Action::Skip, "a b\n\nc", &config).unwrap().is_none());
        let (out, report) = perform(Action::Paginate, "a b\n\nc d\n\ne", &config)
            .unwrap()
            .unwrap();
        assert_eq!(out, "a b<!--nextpage-->\n\nc d<!--nextpage-->\n\ne");
        assert_eq!(report.marker_count, 2);
    }

    #[test]
    fn revisions_write_to_their_parent() {
        let revision = Record {
            id: 12,
            parent: Some(7),
            kind: RecordKind::Revision,
        };
        assert_eq!(revision.writable_target(), 7);

        let document = Record {
            id: 7,
            parent: Some(3),
            kind: RecordKind::Document,
        };
        assert_eq!(document.writable_target(), 7);

        let orphan = Record {
            id: 9,
            parent: None,
            kind: RecordKind::Revision,
        };
        assert_eq!(orphan.writable_target(), 9);
    }

    #[test]
    fn events_deserialise_from_json() {
        let event: HostEvent = serde_json::from_str(
            r#"{"event":"transition","from":"draft","to":"published","already_paginated":false}"#,
        )
        .unwrap();
        assert_eq!(event, publish(false));
        let save: HostEvent =
            serde_json::from_str(r#"{"event":"saved","force":"granted"}"#).unwrap();
        assert_eq!(
            save,
            HostEvent::Saved {
                force: Some(Authorization::Granted)
            }
        );
    }
}
