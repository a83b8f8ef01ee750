//! Plaudit library crate for browsing and moderating add-on reviews.
//!
//! The library models an add-on storefront's review listing, sanitises
//! user-authored text before it reaches the terminal, and provides an
//! interactive TUI in which the add-on's developer can reply to reviews
//! and users can revise their own.

pub mod cli;
pub mod config;
pub mod i18n;
pub mod markup;
pub mod storefront;
pub mod tui;

pub use config::{OperationMode, PlauditConfig};
pub use storefront::{
    InMemoryReplyGateway, ReplyGateway, Review, ReviewAuthor, ReviewId, ReviewListing,
    StorefrontError,
};
