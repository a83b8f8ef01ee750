//! Domain models for add-on storefront reviews.
//!
//! These types mirror the storefront's public review data: an add-on, the
//! reviews posted against it, and at most one developer reply per review.
//! Everything derives `serde` so listings can be seeded from JSON fixtures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Identifier of a review (or of a developer reply, which is review-shaped).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ReviewId(pub u64);

impl std::fmt::Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a storefront account.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Star rating attached to a top-level review.
///
/// Values outside 1..=5 are clamped on construction and on deserialisation,
/// so a `Rating` read from a fixture is always displayable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest permitted star count.
    pub const MIN: u8 = 1;
    /// Highest permitted star count.
    pub const MAX: u8 = 5;

    /// Builds a rating, clamping the value into 1..=5.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Returns the star count.
    #[must_use]
    pub const fn stars(self) -> u8 {
        self.0
    }
}

impl From<u8> for Rating {
    fn from(value: u8) -> Self {
        Self::clamped(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.stars()
    }
}

/// Author attribution carried on every review and reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAuthor {
    /// Account identifier of the author.
    pub id: UserId,
    /// Display name shown in bylines.
    pub name: String,
}

/// One user review, optionally carrying one developer reply.
///
/// A reply is review-shaped but carries no rating and never nests further;
/// reply-to-a-reply is not modelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Review identifier.
    pub id: ReviewId,
    /// Optional review headline.
    pub title: Option<String>,
    /// User-authored body text. Treated as untrusted until sanitised.
    pub body: String,
    /// Star rating; absent on developer replies.
    #[serde(default)]
    pub rating: Option<Rating>,
    /// Who wrote the review or reply.
    pub author: ReviewAuthor,
    /// When the review or reply was posted.
    pub created_at: DateTime<Utc>,
    /// Developer reply, if one has been posted.
    #[serde(default)]
    pub reply: Option<Box<Review>>,
}

impl Review {
    /// Returns whether a developer reply is attached.
    #[must_use]
    pub const fn has_reply(&self) -> bool {
        self.reply.is_some()
    }
}

/// The add-on whose reviews are being browsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addon {
    /// URL slug identifying the add-on.
    pub slug: String,
    /// Human-readable add-on name.
    pub name: String,
    /// Account of the add-on's developer, who may reply to reviews.
    pub developer_id: UserId,
}

/// The authenticated viewer. Anonymous browsing is `Option::<SiteUser>::None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteUser {
    /// Account identifier of the viewer.
    pub id: UserId,
    /// Display name of the viewer.
    pub name: String,
}

/// A complete review listing: the seed data the application starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewListing {
    /// Add-on the reviews belong to.
    pub addon: Addon,
    /// Viewer identity, if authenticated.
    #[serde(default)]
    pub viewer: Option<SiteUser>,
    /// Reviews posted against the add-on, newest first.
    pub reviews: Vec<Review>,
}
