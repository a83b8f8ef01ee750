//! Builders producing review fixtures for tests.

use chrono::{DateTime, TimeZone, Utc};

use super::{Addon, Rating, Review, ReviewAuthor, ReviewId, ReviewListing, SiteUser, UserId};

/// Fixed timestamp used by fixture builders so relative-time output is stable.
#[must_use]
pub fn fixture_posted_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).single().map_or_else(
        || DateTime::<Utc>::MIN_UTC,
        |timestamp| timestamp,
    )
}

/// Builder assembling a [`Review`] with sensible defaults.
#[derive(Debug, Clone)]
pub struct ReviewBuilder {
    id: u64,
    title: Option<String>,
    body: String,
    rating: Option<u8>,
    author_id: u64,
    author_name: String,
    reply: Option<Review>,
}

impl Default for ReviewBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            title: Some("A solid add-on".to_owned()),
            body: "Does what it says.".to_owned(),
            rating: Some(4),
            author_id: 3,
            author_name: "carla".to_owned(),
            reply: None,
        }
    }
}

impl ReviewBuilder {
    /// Starts a builder for the given review id.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Sets the headline; `None` produces a title-less review.
    #[must_use]
    pub fn title(mut self, title: Option<&str>) -> Self {
        self.title = title.map(str::to_owned);
        self
    }

    /// Sets the body text.
    #[must_use]
    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_owned();
        self
    }

    /// Sets the star rating; `None` marks this as a reply-shaped value.
    #[must_use]
    pub const fn rating(mut self, rating: Option<u8>) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the author id and display name.
    #[must_use]
    pub fn author(mut self, id: u64, name: &str) -> Self {
        self.author_id = id;
        self.author_name = name.to_owned();
        self
    }

    /// Attaches a developer reply.
    #[must_use]
    pub fn reply(mut self, reply: Review) -> Self {
        self.reply = Some(reply);
        self
    }

    /// Builds the review.
    #[must_use]
    pub fn build(self) -> Review {
        Review {
            id: ReviewId(self.id),
            title: self.title,
            body: self.body,
            rating: self.rating.map(Rating::clamped),
            author: ReviewAuthor {
                id: UserId(self.author_id),
                name: self.author_name,
            },
            created_at: fixture_posted_at(),
            reply: self.reply.map(Box::new),
        }
    }
}

/// Builds a developer reply authored by the given account.
#[must_use]
pub fn developer_reply(id: u64, developer_id: u64, body: &str) -> Review {
    ReviewBuilder::new(id)
        .title(None)
        .rating(None)
        .author(developer_id, "dev")
        .body(body)
        .build()
}

/// Builds the demo add-on with the given developer account.
#[must_use]
pub fn sample_addon(developer_id: u64) -> Addon {
    Addon {
        slug: "tab-candy".to_owned(),
        name: "Tab Candy".to_owned(),
        developer_id: UserId(developer_id),
    }
}

/// Builds a viewer identity.
#[must_use]
pub fn viewer(id: u64, name: &str) -> SiteUser {
    SiteUser {
        id: UserId(id),
        name: name.to_owned(),
    }
}

/// Builds a listing with the given viewer and reviews.
#[must_use]
pub fn listing(
    developer_id: u64,
    listing_viewer: Option<SiteUser>,
    reviews: Vec<Review>,
) -> ReviewListing {
    ReviewListing {
        addon: sample_addon(developer_id),
        viewer: listing_viewer,
        reviews,
    }
}
