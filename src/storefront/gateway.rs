//! Reply submission gateway.
//!
//! The TUI never awaits a reply submission inline: it dispatches the request
//! as a command and receives the outcome as a later message. This module
//! defines the gateway seam and an in-memory implementation used by the demo
//! binary and tests; real network transport stays out of scope.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use super::error::StorefrontError;
use super::models::{Review, ReviewAuthor, ReviewId};

/// Accepts developer replies addressed to a review.
#[async_trait]
pub trait ReplyGateway: Send + Sync + std::fmt::Debug {
    /// Publishes (or updates) the developer reply for `review_id`.
    ///
    /// Returns the reply as the storefront now records it.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::EmptyReplyBody`] for blank bodies and
    /// [`StorefrontError::Rejected`] when the storefront refuses the reply.
    async fn send_reply(&self, review_id: ReviewId, body: &str) -> Result<Review, StorefrontError>;
}

/// Gateway that accepts every well-formed reply without leaving the process.
#[derive(Debug)]
pub struct InMemoryReplyGateway {
    developer: ReviewAuthor,
    next_reply_id: AtomicU64,
}

/// Reply identifiers minted by [`InMemoryReplyGateway`] start here so they
/// never collide with fixture review ids.
const REPLY_ID_OFFSET: u64 = 1_000_000;

impl InMemoryReplyGateway {
    /// Creates a gateway that attributes replies to `developer`.
    #[must_use]
    pub const fn new(developer: ReviewAuthor) -> Self {
        Self {
            developer,
            next_reply_id: AtomicU64::new(REPLY_ID_OFFSET),
        }
    }
}

#[async_trait]
impl ReplyGateway for InMemoryReplyGateway {
    async fn send_reply(&self, review_id: ReviewId, body: &str) -> Result<Review, StorefrontError> {
        if body.trim().is_empty() {
            return Err(StorefrontError::EmptyReplyBody);
        }

        let id = self.next_reply_id.fetch_add(1, Ordering::Relaxed);
        tracing::debug!("accepted reply to review {review_id} as reply {id}");

        Ok(Review {
            id: ReviewId(id),
            title: None,
            body: body.to_owned(),
            rating: None,
            author: self.developer.clone(),
            created_at: Utc::now(),
            reply: None,
        })
    }
}
