//! Keyed per-review view-state store.
//!
//! Each review id maps to three independent UI flags. Components never mutate
//! this state directly: they return [`ViewStateAction`] transition requests
//! and the store alone commits them, so mutation stays with a single writer.

use std::collections::HashMap;

use crate::storefront::models::ReviewId;

/// Transient UI flags for one review. An absent entry reads as all false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewViewState {
    /// The review's edit form is open.
    pub editing_review: bool,
    /// The reply composer for this review is open.
    pub replying_to_review: bool,
    /// A reply submission is outstanding.
    pub submitting_reply: bool,
}

/// Conceptual per-review mode derived from the flags, for status display.
///
/// The flags are deliberately not mutually exclusive (editing and replying
/// may coexist in the store); this projection picks the mode the UI treats
/// as dominant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewMode {
    /// No interaction in progress.
    Viewing,
    /// Edit form open.
    Editing,
    /// Reply composer open, nothing outstanding.
    ReplyingIdle,
    /// Reply submission outstanding.
    ReplyingSubmitting,
}

impl ReviewViewState {
    /// Projects the flags onto a single display mode.
    #[must_use]
    pub const fn mode(self) -> ReviewMode {
        if self.submitting_reply {
            ReviewMode::ReplyingSubmitting
        } else if self.replying_to_review {
            ReviewMode::ReplyingIdle
        } else if self.editing_review {
            ReviewMode::Editing
        } else {
            ReviewMode::Viewing
        }
    }
}

/// Transition requests a component may address to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStateAction {
    /// Open the edit form.
    ShowEditForm {
        /// Review the form belongs to.
        review_id: ReviewId,
    },
    /// Close the edit form (cancel or successful submission).
    HideEditForm {
        /// Review the form belongs to.
        review_id: ReviewId,
    },
    /// Open the reply composer.
    ShowReplyForm {
        /// Review the composer belongs to.
        review_id: ReviewId,
    },
    /// Close the reply composer; also clears any outstanding-submission flag.
    HideReplyForm {
        /// Review the composer belongs to.
        review_id: ReviewId,
    },
    /// Mark a reply submission as outstanding.
    BeginReplySubmission {
        /// Review the reply is addressed to.
        review_id: ReviewId,
    },
    /// Reply submission succeeded: close the composer.
    FinishReplySubmission {
        /// Review the reply was addressed to.
        review_id: ReviewId,
    },
    /// Reply submission failed: clear the outstanding flag, keep the composer.
    FailReplySubmission {
        /// Review the reply was addressed to.
        review_id: ReviewId,
    },
}

impl ViewStateAction {
    /// Returns the review the action addresses.
    #[must_use]
    pub const fn review_id(self) -> ReviewId {
        match self {
            Self::ShowEditForm { review_id }
            | Self::HideEditForm { review_id }
            | Self::ShowReplyForm { review_id }
            | Self::HideReplyForm { review_id }
            | Self::BeginReplySubmission { review_id }
            | Self::FinishReplySubmission { review_id }
            | Self::FailReplySubmission { review_id } => review_id,
        }
    }
}

/// Single-writer store of per-review view state.
///
/// Entries are created implicitly on first interaction and never explicitly
/// destroyed; their lifetime is the store's.
#[derive(Debug, Clone, Default)]
pub struct ViewStateStore {
    entries: HashMap<ReviewId, ReviewViewState>,
}

impl ViewStateStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the state for `review_id`; absent entries read as all-false.
    #[must_use]
    pub fn get(&self, review_id: ReviewId) -> ReviewViewState {
        self.entries.get(&review_id).copied().unwrap_or_default()
    }

    /// Commits one transition request.
    pub fn apply(&mut self, action: ViewStateAction) {
        let entry = self.entries.entry(action.review_id()).or_default();
        match action {
            ViewStateAction::ShowEditForm { .. } => entry.editing_review = true,
            ViewStateAction::HideEditForm { .. } => entry.editing_review = false,
            ViewStateAction::ShowReplyForm { .. } => entry.replying_to_review = true,
            ViewStateAction::HideReplyForm { .. } => {
                entry.replying_to_review = false;
                entry.submitting_reply = false;
            }
            ViewStateAction::BeginReplySubmission { .. } => entry.submitting_reply = true,
            ViewStateAction::FinishReplySubmission { .. } => {
                entry.submitting_reply = false;
                entry.replying_to_review = false;
            }
            ViewStateAction::FailReplySubmission { .. } => entry.submitting_reply = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::storefront::models::ReviewId;

    use super::{ReviewMode, ViewStateAction, ViewStateStore};

    const REVIEW: ReviewId = ReviewId(5);

    #[test]
    fn absent_entry_reads_as_all_false() {
        let store = ViewStateStore::new();

        let state = store.get(REVIEW);

        assert!(!state.editing_review);
        assert!(!state.replying_to_review);
        assert!(!state.submitting_reply);
        assert_eq!(state.mode(), ReviewMode::Viewing);
    }

    #[test]
    fn repeated_reply_toggling_is_idempotent_per_step() {
        let mut store = ViewStateStore::new();

        for _ in 0..3 {
            store.apply(ViewStateAction::ShowReplyForm { review_id: REVIEW });
            assert!(store.get(REVIEW).replying_to_review);

            store.apply(ViewStateAction::HideReplyForm { review_id: REVIEW });
            assert!(!store.get(REVIEW).replying_to_review);
        }

        store.apply(ViewStateAction::ShowReplyForm { review_id: REVIEW });
        assert_eq!(store.get(REVIEW).mode(), ReviewMode::ReplyingIdle);
    }

    #[test]
    fn hide_reply_form_also_clears_submitting() {
        let mut store = ViewStateStore::new();
        store.apply(ViewStateAction::ShowReplyForm { review_id: REVIEW });
        store.apply(ViewStateAction::BeginReplySubmission { review_id: REVIEW });
        assert_eq!(store.get(REVIEW).mode(), ReviewMode::ReplyingSubmitting);

        store.apply(ViewStateAction::HideReplyForm { review_id: REVIEW });

        let state = store.get(REVIEW);
        assert!(!state.submitting_reply);
        assert_eq!(state.mode(), ReviewMode::Viewing);
    }

    #[rstest]
    #[case(ViewStateAction::FinishReplySubmission { review_id: REVIEW }, false)]
    #[case(ViewStateAction::FailReplySubmission { review_id: REVIEW }, true)]
    fn submission_outcomes_clear_the_outstanding_flag(
        #[case] outcome: ViewStateAction,
        #[case] composer_stays_open: bool,
    ) {
        let mut store = ViewStateStore::new();
        store.apply(ViewStateAction::ShowReplyForm { review_id: REVIEW });
        store.apply(ViewStateAction::BeginReplySubmission { review_id: REVIEW });

        store.apply(outcome);

        let state = store.get(REVIEW);
        assert!(!state.submitting_reply);
        assert_eq!(state.replying_to_review, composer_stays_open);
    }

    #[test]
    fn editing_and_replying_may_coexist() {
        // The flags are independent; the store does not force exclusivity.
        let mut store = ViewStateStore::new();
        store.apply(ViewStateAction::ShowEditForm { review_id: REVIEW });
        store.apply(ViewStateAction::ShowReplyForm { review_id: REVIEW });

        let state = store.get(REVIEW);
        assert!(state.editing_review);
        assert!(state.replying_to_review);
    }

    #[test]
    fn entries_are_keyed_per_review() {
        let mut store = ViewStateStore::new();
        store.apply(ViewStateAction::ShowEditForm { review_id: REVIEW });

        assert!(!store.get(ReviewId(6)).editing_review);
    }
}
