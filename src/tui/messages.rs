//! Message types for the TUI update loop.
//!
//! Messages represent user actions, asynchronous command results, and system
//! events delivered to the application's update function.

use crate::storefront::models::{Review, ReviewId};

/// Messages for the review moderation TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move the cursor up one review.
    CursorUp,
    /// Move the cursor down one review.
    CursorDown,
    /// Move the cursor to the first review.
    Home,
    /// Move the cursor to the last review.
    End,

    // Review item interactions
    /// Viewer clicked the edit affordance on the selected item.
    BeginEdit,
    /// The edit overlay completed a submission.
    CommitEdit,
    /// Viewer clicked the begin-reply affordance.
    BeginReply,
    /// Escape pressed: dismiss the composer first, then the edit form.
    EscapePressed,

    // Composer editing
    /// Type one character into the reply composer.
    ComposerInsertChar(char),
    /// Delete the last character from the reply composer.
    ComposerBackspace,
    /// Submit the reply composer's draft.
    SubmitReply,

    // Asynchronous submission outcomes
    /// The storefront accepted the reply.
    ReplySent {
        /// Review the reply was addressed to.
        review_id: ReviewId,
        /// The reply as the storefront recorded it.
        reply: Review,
    },
    /// The storefront rejected the reply or the submission failed.
    ReplyFailed {
        /// Review the reply was addressed to.
        review_id: ReviewId,
        /// Failure detail for the error banner.
        message: String,
    },

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns whether this is a cursor-navigation message.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp | Self::CursorDown | Self::Home | Self::End
        )
    }

    /// Returns whether this message edits or submits the reply composer.
    #[must_use]
    pub const fn is_composer(&self) -> bool {
        matches!(
            self,
            Self::ComposerInsertChar(_) | Self::ComposerBackspace | Self::SubmitReply
        )
    }

    /// Returns whether this message is an asynchronous submission outcome.
    #[must_use]
    pub const fn is_submission_outcome(&self) -> bool {
        matches!(self, Self::ReplySent { .. } | Self::ReplyFailed { .. })
    }
}
