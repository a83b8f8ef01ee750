//! Reusable UI components for the review TUI.

mod review_item;

pub use review_item::{ReplySubmission, ReviewItemContext};
