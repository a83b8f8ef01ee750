//! Review item component.
//!
//! Renders one user review or developer reply and translates interactions
//! into view-state transition requests. The component never mutates the
//! view-state store: every operation returns the [`ViewStateAction`] to
//! dispatch (or `None`, logged, when the review has not loaded yet).

use chrono::{DateTime, Utc};

use crate::i18n::{Catalog, Message, relative_time};
use crate::markup::{AllowedTag, sanitize};
use crate::storefront::models::{Addon, Review, ReviewId, SiteUser};
use crate::tui::render::RenderNode;
use crate::tui::state::{
    ComposerState, ErrorKey, ReplyErrorHandle, ReviewViewState, ViewStateAction,
};

/// A developer reply nests exactly one level under its review.
const MAX_REPLY_DEPTH: usize = 1;

/// Inputs for rendering and interacting with one review item.
#[derive(Debug, Clone, Copy)]
pub struct ReviewItemContext<'a> {
    /// The review to render; `None` renders loading placeholders.
    pub review: Option<&'a Review>,
    /// Set when this instance renders a developer reply; carries the parent
    /// review's identifier.
    pub is_reply_to_review_id: Option<ReviewId>,
    /// The add-on the review belongs to, when known.
    pub addon: Option<&'a Addon>,
    /// Authenticated viewer, if any.
    pub site_user: Option<&'a SiteUser>,
    /// View-state flags for this review.
    pub view_state: ReviewViewState,
    /// Draft of the open reply composer, when one exists for this review.
    pub composer: Option<&'a ComposerState>,
    /// Error capability correlated with this review's reply request.
    pub error_handle: Option<&'a ReplyErrorHandle<'a>>,
}

/// A validated reply submission ready to hand to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplySubmission {
    /// Review the reply is addressed to.
    pub review_id: ReviewId,
    /// Correlation key for surfacing a later failure.
    pub error_key: ErrorKey,
    /// Reply body text.
    pub body: String,
}

impl<'a> ReviewItemContext<'a> {
    /// Returns whether this instance renders a developer reply.
    #[must_use]
    pub const fn is_reply(&self) -> bool {
        self.is_reply_to_review_id.is_some()
    }

    /// Requests the edit form for this item.
    ///
    /// A reply item reuses its parent review's reply form, so the request is
    /// addressed to the parent id even when the reply itself has not loaded.
    #[must_use]
    pub fn begin_edit(&self) -> Option<ViewStateAction> {
        if let Some(parent_id) = self.is_reply_to_review_id {
            return Some(ViewStateAction::ShowReplyForm {
                review_id: parent_id,
            });
        }
        self.action_for_loaded("edit", |review_id| ViewStateAction::ShowEditForm {
            review_id,
        })
    }

    /// Requests dismissal of the edit form without saving.
    #[must_use]
    pub fn cancel_edit(&self) -> Option<ViewStateAction> {
        self.action_for_loaded("cancel-edit", |review_id| ViewStateAction::HideEditForm {
            review_id,
        })
    }

    /// Requests dismissal of the edit form after a completed submission.
    #[must_use]
    pub fn commit_edit(&self) -> Option<ViewStateAction> {
        self.action_for_loaded("commit-edit", |review_id| ViewStateAction::HideEditForm {
            review_id,
        })
    }

    /// Requests the reply composer for this review.
    #[must_use]
    pub fn begin_reply(&self) -> Option<ViewStateAction> {
        self.action_for_loaded("reply", |review_id| ViewStateAction::ShowReplyForm {
            review_id,
        })
    }

    /// Requests dismissal of the reply composer.
    #[must_use]
    pub fn cancel_reply(&self) -> Option<ViewStateAction> {
        self.action_for_loaded("cancel-reply", |review_id| ViewStateAction::HideReplyForm {
            review_id,
        })
    }

    /// Builds the send-reply request for `body`.
    ///
    /// # Panics
    ///
    /// Panics when no review is loaded. The composer only exists for a loaded
    /// review, so reaching this without one is a broken caller contract, not
    /// a user-facing error.
    #[must_use]
    pub fn submit_reply(&self, body: &str) -> ReplySubmission {
        let Some(review) = self.review else {
            panic!("reply submitted for an unloaded review; this is a caller bug");
        };
        ReplySubmission {
            review_id: review.id,
            error_key: ErrorKey::for_reply(review.id),
            body: body.to_owned(),
        }
    }

    fn action_for_loaded(
        &self,
        operation: &str,
        build: impl FnOnce(ReviewId) -> ViewStateAction,
    ) -> Option<ViewStateAction> {
        let Some(review) = self.review else {
            tracing::warn!("{operation} requested before the review loaded; ignoring");
            return None;
        };
        Some(build(review.id))
    }

    /// Edit affordance: the authenticated viewer authored this review.
    #[must_use]
    pub fn shows_edit_affordance(&self) -> bool {
        match (self.site_user, self.review) {
            (Some(user), Some(review)) => review.author.id == user.id,
            _ => false,
        }
    }

    /// Begin-reply affordance: the add-on's developer may open the composer
    /// for somebody else's review that has no reply yet.
    #[must_use]
    pub fn shows_begin_reply_affordance(&self) -> bool {
        let (Some(review), Some(addon), Some(user)) = (self.review, self.addon, self.site_user)
        else {
            return false;
        };
        !self.view_state.replying_to_review
            && !review.has_reply()
            && addon.developer_id == user.id
            && review.author.id != user.id
    }

    /// Reply block: an existing reply, or the composer while replying.
    #[must_use]
    pub fn shows_reply_block(&self) -> bool {
        self.view_state.replying_to_review || self.review.is_some_and(Review::has_reply)
    }

    /// Star count to display, only for loaded top-level reviews.
    #[must_use]
    pub fn rating_stars(&self) -> Option<u8> {
        if self.is_reply() {
            return None;
        }
        self.review
            .and_then(|review| review.rating)
            .map(crate::storefront::models::Rating::stars)
    }

    /// Produces the render tree for this item.
    #[must_use]
    pub fn view(&self, catalog: &dyn Catalog, now: DateTime<Utc>) -> RenderNode {
        self.view_at_depth(catalog, now, 0)
    }

    fn view_at_depth(&self, catalog: &dyn Catalog, now: DateTime<Utc>, depth: usize) -> RenderNode {
        debug_assert!(depth <= MAX_REPLY_DEPTH, "reply-to-a-reply is not modelled");

        let mut children = Vec::new();

        if let Some(title) = self.title_node(catalog) {
            children.push(title);
        }
        if let Some(stars) = self.rating_stars() {
            children.push(RenderNode::Rating { stars });
        }
        children.push(self.byline_node(catalog, now));
        children.push(self.body_node());

        if let Some(review) = self.review {
            self.push_affordances(catalog, &mut children);
            if let Some(handle) = self.error_handle {
                if let Some(banner) = handle.render_error_if_present() {
                    children.push(banner);
                }
            }
            if self.view_state.replying_to_review {
                children.push(self.composer_node(catalog, review));
            } else if let Some(reply) = review.reply.as_deref() {
                children.push(self.nested_reply_node(catalog, now, depth, review, reply));
            }
        }

        RenderNode::group(children)
    }

    fn push_affordances(&self, catalog: &dyn Catalog, children: &mut Vec<RenderNode>) {
        if self.shows_edit_affordance() {
            children.push(RenderNode::Action {
                label: catalog.text(&Message::EditAction),
                key_hint: 'e',
            });
        }
        if self.shows_begin_reply_affordance() {
            children.push(RenderNode::Action {
                label: catalog.text(&Message::ReplyAction),
                key_hint: 'r',
            });
        }
    }

    fn title_node(&self, catalog: &dyn Catalog) -> Option<RenderNode> {
        let Some(review) = self.review else {
            return Some(RenderNode::Placeholder);
        };
        if self.is_reply() {
            return Some(RenderNode::Header(sanitize(
                &catalog.text(&Message::DeveloperResponse),
                &[],
            )));
        }
        review
            .title
            .as_deref()
            .map(|title| RenderNode::Header(sanitize(title, &[])))
    }

    fn byline_node(&self, catalog: &dyn Catalog, now: DateTime<Utc>) -> RenderNode {
        let Some(review) = self.review else {
            return RenderNode::Placeholder;
        };
        let when = relative_time(review.created_at, now);
        let message = if self.is_reply() {
            Message::BylinePosted {
                relative_time: when,
            }
        } else {
            Message::BylineByAuthor {
                author: review.author.name.clone(),
                relative_time: when,
            }
        };
        // Author display names are user-controlled, so the finished byline is
        // sanitised as a whole.
        RenderNode::Byline(sanitize(&catalog.text(&message), &[]))
    }

    fn body_node(&self) -> RenderNode {
        self.review.map_or(RenderNode::Placeholder, |review| {
            RenderNode::Paragraph(sanitize(&review.body, &[AllowedTag::LineBreak]))
        })
    }

    fn composer_node(&self, catalog: &dyn Catalog, review: &Review) -> RenderNode {
        let (submit, busy) = if review.has_reply() {
            (Message::UpdateReply, Message::UpdatingReply)
        } else {
            (Message::PublishReply, Message::PublishingReply)
        };
        RenderNode::Composer {
            draft: self
                .composer
                .map(|draft| draft.text().to_owned())
                .unwrap_or_default(),
            remaining: self.composer.map_or(0, ComposerState::remaining_chars),
            submit_label: catalog.text(&submit),
            busy_label: catalog.text(&busy),
            submitting: self.view_state.submitting_reply,
        }
    }

    fn nested_reply_node(
        &self,
        catalog: &dyn Catalog,
        now: DateTime<Utc>,
        depth: usize,
        review: &Review,
        reply: &'a Review,
    ) -> RenderNode {
        let nested = ReviewItemContext {
            review: Some(reply),
            is_reply_to_review_id: Some(review.id),
            addon: self.addon,
            site_user: self.site_user,
            // The reply has no composer of its own: editing it goes through
            // the parent review's reply form.
            view_state: ReviewViewState::default(),
            composer: None,
            error_handle: None,
        };
        RenderNode::Nested(Box::new(nested.view_at_depth(
            catalog,
            now,
            depth.saturating_add(1),
        )))
    }
}
