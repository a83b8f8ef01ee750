//! Reply composer draft state.
//!
//! Holds the editable draft for one review's reply composer and enforces the
//! configured maximum character count. Submission progress is not tracked
//! here; that lives in the view-state store's `submitting_reply` flag.

use thiserror::Error;

use crate::storefront::models::ReviewId;

/// Editable reply draft tied to one review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerState {
    review_id: ReviewId,
    text: String,
    max_length: usize,
}

impl ComposerState {
    /// Creates an empty draft for `review_id`.
    #[must_use]
    pub const fn new(review_id: ReviewId, max_length: usize) -> Self {
        Self {
            review_id,
            text: String::new(),
            max_length,
        }
    }

    /// Creates a draft prefilled with an existing reply body, for update
    /// flows. Text beyond the limit is truncated at a character boundary.
    #[must_use]
    pub fn prefilled(review_id: ReviewId, max_length: usize, existing: &str) -> Self {
        let text = existing.chars().take(max_length).collect();
        Self {
            review_id,
            text,
            max_length,
        }
    }

    /// Returns the review this draft replies to.
    #[must_use]
    pub const fn review_id(&self) -> ReviewId {
        self.review_id
    }

    /// Returns the current draft text.
    #[must_use]
    pub const fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Returns the current character count in Unicode scalar values.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns remaining characters before the draft reaches its limit.
    #[must_use]
    pub fn remaining_chars(&self) -> usize {
        self.max_length.saturating_sub(self.char_count())
    }

    /// Appends one character to the draft.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::LengthExceeded`] when the draft is full.
    pub fn push_char(&mut self, character: char) -> Result<(), ComposerError> {
        let attempted = self.char_count().saturating_add(1);
        if attempted > self.max_length {
            return Err(ComposerError::LengthExceeded {
                attempted,
                max_length: self.max_length,
            });
        }
        self.text.push(character);
        Ok(())
    }

    /// Removes the last character from the draft, if present.
    pub fn backspace(&mut self) {
        let _ = self.text.pop();
    }

    /// Validates the draft for submission and returns the body text.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::EmptyDraft`] when the draft is empty or
    /// whitespace-only.
    pub fn submission_body(&self) -> Result<&str, ComposerError> {
        if self.text.trim().is_empty() {
            return Err(ComposerError::EmptyDraft);
        }
        Ok(self.text.as_str())
    }
}

/// Errors raised while editing or validating a reply draft.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComposerError {
    /// The draft would exceed the configured character limit.
    #[error("reply draft length {attempted} exceeds configured limit {max_length}")]
    LengthExceeded {
        /// Character count after the attempted edit.
        attempted: usize,
        /// Configured maximum character count.
        max_length: usize,
    },
    /// Submission was requested for an empty draft.
    #[error("reply draft is empty")]
    EmptyDraft,
}
