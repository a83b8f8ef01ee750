//! Edit and reply interaction handlers for the review TUI.
//!
//! Handlers consult the review item component for the transition request an
//! interaction implies, commit it to the view-state store, and manage the
//! composer draft and error registry around asynchronous reply submissions.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::storefront::ReplyGateway;
use crate::storefront::models::{Review, ReviewId};
use crate::tui::components::{ReplySubmission, ReviewItemContext};
use crate::tui::messages::AppMsg;
use crate::tui::state::{ComposerState, ErrorKey, ViewStateAction};

use super::ReviewApp;

impl ReviewApp {
    /// Handles the edit affordance on the selected item.
    ///
    /// The review's author edits the review itself; the add-on's developer
    /// editing their existing reply reuses the reply form, prefilled with the
    /// current reply body.
    pub(super) fn handle_begin_edit(&mut self) -> Option<Cmd> {
        if self.selected_item_context().shows_edit_affordance() {
            let request = self.selected_item_context().begin_edit();
            if let Some(action) = request {
                self.view_states.apply(action);
            }
            return None;
        }
        self.begin_reply_edit()
    }

    /// Dismisses the edit form after the overlay completed a submission.
    pub(super) fn handle_commit_edit(&mut self) -> Option<Cmd> {
        if !self.selected_view_state().editing_review {
            return None;
        }
        let request = self.selected_item_context().commit_edit();
        if let Some(action) = request {
            self.view_states.apply(action);
        }
        None
    }

    /// Opens the reply composer for the selected review.
    pub(super) fn handle_begin_reply(&mut self) -> Option<Cmd> {
        let request = {
            let ctx = self.selected_item_context();
            if ctx.shows_begin_reply_affordance() {
                ctx.begin_reply()
            } else {
                None
            }
        };
        let action = request?;
        self.view_states.apply(action);
        self.composer = Some(ComposerState::new(
            action.review_id(),
            self.reply_max_length(),
        ));
        self.notice = None;
        None
    }

    /// Escape: dismiss the composer first, then the edit form.
    pub(super) fn handle_escape(&mut self) -> Option<Cmd> {
        if self.composer.is_some() {
            let request = self.selected_item_context().cancel_reply();
            self.composer = None;
            self.notice = None;
            if let Some(action) = request {
                self.errors.clear(&ErrorKey::for_reply(action.review_id()));
                self.view_states.apply(action);
            }
            return None;
        }
        if self.selected_view_state().editing_review {
            let request = self.selected_item_context().cancel_edit();
            if let Some(action) = request {
                self.view_states.apply(action);
            }
        }
        None
    }

    /// Handles composer input and submission messages.
    pub(super) fn handle_composer_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ComposerInsertChar(character) => {
                self.insert_composer_char(*character);
                None
            }
            AppMsg::ComposerBackspace => {
                if let Some(draft) = self.composer.as_mut() {
                    draft.backspace();
                    self.notice = None;
                }
                None
            }
            AppMsg::SubmitReply => self.handle_submit_reply(),
            _ => None,
        }
    }

    /// Routes asynchronous submission outcomes.
    pub(super) fn handle_submission_outcome(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ReplySent { review_id, reply } => self.handle_reply_sent(*review_id, reply),
            AppMsg::ReplyFailed { review_id, message } => {
                self.handle_reply_failed(*review_id, message)
            }
            _ => None,
        }
    }

    fn insert_composer_char(&mut self, character: char) {
        let Some(draft) = self.composer.as_mut() else {
            return;
        };
        match draft.push_char(character) {
            Ok(()) => self.notice = None,
            Err(error) => self.notice = Some(error.to_string()),
        }
    }

    /// Dispatches the composer draft as a fire-and-forget submission.
    ///
    /// The command resolves later to [`AppMsg::ReplySent`] or
    /// [`AppMsg::ReplyFailed`]; nothing is awaited inline and no cancellation
    /// is exposed while the request is outstanding.
    fn handle_submit_reply(&mut self) -> Option<Cmd> {
        let draft_review_id = self.composer.as_ref().map(ComposerState::review_id)?;
        if self.view_states.get(draft_review_id).submitting_reply {
            // One outstanding submission per review.
            return None;
        }

        let body = {
            let Some(draft) = self.composer.as_ref() else {
                return None;
            };
            match draft.submission_body() {
                Ok(body) => body.to_owned(),
                Err(error) => {
                    self.notice = Some(error.to_string());
                    return None;
                }
            }
        };

        // The composer only exists for a loaded review, so the component's
        // loaded-review contract holds here.
        let submission = self.selected_item_context().submit_reply(&body);
        self.errors.clear(&submission.error_key);
        self.view_states.apply(ViewStateAction::BeginReplySubmission {
            review_id: submission.review_id,
        });
        self.notice = None;
        Some(spawn_reply_submission(self.reply_gateway(), submission))
    }

    fn handle_reply_sent(&mut self, review_id: ReviewId, reply: &Review) -> Option<Cmd> {
        self.reviews
            .iter_mut()
            .find(|review| review.id == review_id)
            .map_or_else(
                || tracing::warn!("reply accepted for unknown review {review_id}"),
                |review| review.reply = Some(Box::new(reply.clone())),
            );
        self.view_states
            .apply(ViewStateAction::FinishReplySubmission { review_id });
        if self
            .composer
            .as_ref()
            .is_some_and(|draft| draft.review_id() == review_id)
        {
            self.composer = None;
        }
        self.errors.clear(&ErrorKey::for_reply(review_id));
        None
    }

    fn handle_reply_failed(&mut self, review_id: ReviewId, message: &str) -> Option<Cmd> {
        tracing::debug!("reply submission for review {review_id} failed: {message}");
        self.errors
            .record(ErrorKey::for_reply(review_id), message.to_owned());
        self.view_states
            .apply(ViewStateAction::FailReplySubmission { review_id });
        None
    }

    fn begin_reply_edit(&mut self) -> Option<Cmd> {
        let (action, review_id, existing_body) = self.reply_edit_request()?;
        self.view_states.apply(action);
        self.composer = Some(ComposerState::prefilled(
            review_id,
            self.reply_max_length(),
            &existing_body,
        ));
        self.notice = None;
        None
    }

    /// Computes the transition and prefill for the developer editing their
    /// existing reply, or `None` when the viewer may not do so.
    fn reply_edit_request(&self) -> Option<(ViewStateAction, ReviewId, String)> {
        let review = self.selected_review()?;
        let user = self.site_user.as_ref()?;
        let reply = review.reply.as_deref()?;
        if user.id != reply.author.id {
            return None;
        }
        let ctx = ReviewItemContext {
            review: Some(reply),
            is_reply_to_review_id: Some(review.id),
            addon: self.addon.as_ref(),
            site_user: self.site_user.as_ref(),
            view_state: self.view_states.get(review.id),
            composer: None,
            error_handle: None,
        };
        let action = ctx.begin_edit()?;
        Some((action, review.id, reply.body.clone()))
    }
}

fn spawn_reply_submission(gateway: Arc<dyn ReplyGateway>, submission: ReplySubmission) -> Cmd {
    Box::pin(async move {
        let message = match gateway
            .send_reply(submission.review_id, submission.body.as_str())
            .await
        {
            Ok(reply) => AppMsg::ReplySent {
                review_id: submission.review_id,
                reply,
            },
            Err(error) => AppMsg::ReplyFailed {
                review_id: submission.review_id,
                message: error.to_string(),
            },
        };
        Some(Box::new(message) as Box<dyn Any + Send>)
    })
}

#[cfg(test)]
#[path = "review_handlers_tests.rs"]
mod tests;
