//! Storefront domain: review models, fixtures, errors, and the reply gateway.

pub mod error;
pub mod fixture;
pub mod gateway;
pub mod models;

pub use error::StorefrontError;
pub use gateway::{InMemoryReplyGateway, ReplyGateway};
pub use models::{Addon, Rating, Review, ReviewAuthor, ReviewId, ReviewListing, SiteUser, UserId};
