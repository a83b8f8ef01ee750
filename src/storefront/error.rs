//! Error types exposed by the storefront layer.

use thiserror::Error;

use super::models::ReviewId;

/// Errors surfaced while loading listings or submitting developer replies.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorefrontError {
    /// A reply was submitted against a review the storefront does not know.
    #[error("review {review_id} was not found")]
    ReviewNotFound {
        /// Identifier the reply was addressed to.
        review_id: ReviewId,
    },

    /// A reply was submitted with an empty or whitespace-only body.
    #[error("reply body must not be empty")]
    EmptyReplyBody,

    /// The storefront rejected the reply.
    #[error("storefront rejected the reply: {message}")]
    Rejected {
        /// Rejection detail suitable for display.
        message: String,
    },

    /// Configuration could not be loaded or was incomplete.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The review fixture file could not be read or parsed.
    #[error("review fixture could not be loaded: {message}")]
    Fixture {
        /// Details from the filesystem or the JSON parser.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
